//! Default resolution: raw caller input to a fully populated config.

use super::{Platform, RawInput, ResolvedConfig, user_agent::fake_user_agent};
use crate::infer::{HostEnvironment, normalize_url};
use std::path::PathBuf;

/// Runtime version packaged against when the caller names none.
pub const ELECTRON_VERSION: &str = "0.36.4";

/// Name used when no name was given and none could be inferred.
pub const DEFAULT_APP_NAME: &str = "APP";

/// Default initial window width.
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default initial window height.
pub const DEFAULT_HEIGHT: u32 = 800;

/// Version of this tool, reported as `nativefierVersion`.
pub const NATIVEFIER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory holding the placeholder app the packager copies from.
///
/// The app template ships as `app/` next to the executable. When the
/// executable path cannot be determined, `app` relative to the working
/// directory is used.
pub fn placeholder_app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("app")))
        .unwrap_or_else(|| PathBuf::from("app"))
}

/// Fills every field of the config from `raw`, or from a default.
///
/// Never fails and performs no I/O beyond the `host` queries. Empty strings
/// and zero dimensions count as absent. The platform is alias-normalized
/// here, before inference runs, so later stages only ever see canonical
/// identifiers.
///
/// `name` and a non-empty `icon` are copied as given; filling them in is the
/// inference stage's job.
pub fn resolve<H: HostEnvironment + ?Sized>(raw: &RawInput, host: &H) -> ResolvedConfig {
    let platform = match non_empty(&raw.platform) {
        Some(platform) => Platform::parse(platform),
        None => Platform::parse(&host.platform()),
    };

    let arch = non_empty(&raw.arch)
        .map(str::to_string)
        .unwrap_or_else(|| host.arch());

    let out = raw
        .out
        .clone()
        .filter(|out| !out.as_os_str().is_empty())
        .or_else(|| host.current_dir())
        .unwrap_or_else(|| PathBuf::from("."));

    let user_agent = if raw.honest.unwrap_or(false) {
        None
    } else {
        non_empty(&raw.user_agent)
            .map(str::to_string)
            .or_else(|| fake_user_agent(&host.platform()).map(str::to_string))
    };

    ResolvedConfig {
        dir: placeholder_app_dir(),
        name: raw.name.clone().unwrap_or_default(),
        target_url: normalize_url(raw.target_url.as_deref()),
        platform,
        arch,
        version: non_empty(&raw.electron_version)
            .unwrap_or(ELECTRON_VERSION)
            .to_string(),
        nativefier_version: NATIVEFIER_VERSION.to_string(),
        out,
        overwrite: raw.overwrite.unwrap_or(false),
        asar: raw.conceal.unwrap_or(false),
        icon: raw
            .icon
            .clone()
            .filter(|icon| !icon.as_os_str().is_empty()),
        counter: raw.counter.unwrap_or(false),
        width: raw.width.filter(|w| *w > 0).unwrap_or(DEFAULT_WIDTH),
        height: raw.height.filter(|h| *h > 0).unwrap_or(DEFAULT_HEIGHT),
        show_menu_bar: raw.show_menu_bar.unwrap_or(false),
        user_agent,
        ignore_certificate: raw.ignore_certificate.unwrap_or(false),
        insecure: raw.insecure.unwrap_or(false),
        flash_plugin_dir: raw.flash.clone(),
        inject: raw.inject.clone(),
        full_screen: raw.full_screen.unwrap_or(false),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Host(&'static str);

    impl HostEnvironment for Host {
        fn platform(&self) -> String {
            self.0.to_string()
        }

        fn arch(&self) -> String {
            "x64".to_string()
        }

        fn current_dir(&self) -> Option<PathBuf> {
            Some(PathBuf::from("/work"))
        }
    }

    #[test]
    fn empty_input_gets_every_default() {
        let config = resolve(&RawInput::default(), &Host("linux"));

        assert_eq!(config.platform, Platform::Linux);
        assert_eq!(config.arch, "x64");
        assert_eq!(config.version, ELECTRON_VERSION);
        assert_eq!(config.out, PathBuf::from("/work"));
        assert_eq!((config.width, config.height), (1280, 800));
        assert!(!config.asar && !config.counter && !config.full_screen);
        assert!(!config.show_menu_bar && !config.insecure && !config.ignore_certificate);
        assert_eq!(config.user_agent.as_deref(), fake_user_agent("linux"));
        assert!(config.flash_plugin_dir.is_none() && config.inject.is_none());
        assert!(config.name.is_empty() && config.icon.is_none());
        assert_eq!(config.dir, placeholder_app_dir());
    }

    #[test]
    fn honest_drops_an_explicit_user_agent() {
        let raw = RawInput {
            user_agent: Some("Custom/1.0".into()),
            honest: Some(true),
            ..Default::default()
        };
        assert_eq!(resolve(&raw, &Host("darwin")).user_agent, None);
    }

    #[test]
    fn user_agent_follows_the_host_not_the_target() {
        let raw = RawInput {
            platform: Some("windows".into()),
            ..Default::default()
        };
        let config = resolve(&raw, &Host("darwin"));
        assert_eq!(config.platform, Platform::Win32);
        assert_eq!(config.user_agent.as_deref(), fake_user_agent("darwin"));
    }

    #[test]
    fn zero_and_empty_count_as_absent() {
        let raw = RawInput {
            platform: Some(String::new()),
            width: Some(0),
            electron_version: Some(String::new()),
            ..Default::default()
        };
        let config = resolve(&raw, &Host("win32"));
        assert_eq!(config.platform, Platform::Win32);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.version, ELECTRON_VERSION);
    }

    #[test]
    fn placeholder_dir_follows_the_executable() {
        let exe = std::env::current_exe().unwrap();
        let dir = placeholder_app_dir();

        assert_eq!(dir.parent(), exe.parent());
        assert!(dir.ends_with("app"));
    }

    #[test]
    fn empty_icon_counts_as_absent() {
        let raw = RawInput {
            icon: Some(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(resolve(&raw, &Host("linux")).icon, None);
    }

    #[test]
    fn conceal_maps_to_asar() {
        let raw = RawInput {
            conceal: Some(true),
            ..Default::default()
        };
        assert!(resolve(&raw, &Host("linux")).asar);
    }
}
