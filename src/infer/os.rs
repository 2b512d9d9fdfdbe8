//! Host platform and architecture detection.

use super::HostEnvironment;
use std::path::PathBuf;

/// The machine this process runs on.
///
/// Maps Rust's `std::env::consts` names onto the Node-style identifiers the
/// packaging step expects (`macos` → `darwin`, `x86_64` → `x64`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostEnvironment for SystemHost {
    fn platform(&self) -> String {
        node_platform(std::env::consts::OS)
    }

    fn arch(&self) -> String {
        node_arch(std::env::consts::ARCH)
    }

    fn current_dir(&self) -> Option<PathBuf> {
        match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                log::warn!("Cannot read the current working directory: {}", e);
                None
            }
        }
    }
}

/// Translates a Rust OS name into a Node-style platform identifier.
pub(crate) fn node_platform(os: &str) -> String {
    let platform = match os {
        "macos" => "darwin",
        "windows" => "win32",
        "linux" => "linux",
        other => {
            log::warn!("Untested host platform detected: {}", other);
            other
        }
    };
    platform.to_string()
}

/// Translates a Rust architecture name into a Node-style arch identifier.
pub(crate) fn node_arch(arch: &str) -> String {
    let arch = match arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "arm" => "arm",
        other => {
            log::warn!("Untested host architecture detected: {}", other);
            other
        }
    };
    arch.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rust_names_to_node_names() {
        assert_eq!(node_platform("macos"), "darwin");
        assert_eq!(node_platform("windows"), "win32");
        assert_eq!(node_platform("linux"), "linux");
        assert_eq!(node_arch("x86_64"), "x64");
        assert_eq!(node_arch("x86"), "ia32");
        assert_eq!(node_arch("aarch64"), "arm64");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(node_platform("freebsd"), "freebsd");
        assert_eq!(node_arch("riscv64"), "riscv64");
    }
}
