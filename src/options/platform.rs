//! Target platform identifiers and alias normalization.

use std::fmt;

/// Platform the wrapped application is packaged for.
///
/// Uses Node-style identifiers (`darwin`, `win32`, `linux`). The aliases
/// `windows`, `osx` and `mac` are accepted in any letter case and mapped to
/// their canonical form. Any other value is carried through unchanged so the
/// packaging step can decide what to do with it.
///
/// # Examples
///
/// ```
/// use nativefier_options::Platform;
///
/// assert_eq!(Platform::parse("Windows"), Platform::Win32);
/// assert_eq!(Platform::parse("MAC").as_str(), "darwin");
/// assert_eq!(Platform::parse("freebsd").as_str(), "freebsd");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Platform {
    /// macOS
    Darwin,
    /// Windows
    Win32,
    /// Linux
    Linux,
    /// Anything else, verbatim
    Other(String),
}

impl Platform {
    /// Parses a platform identifier, applying the case-insensitive aliases.
    ///
    /// Canonical names are matched exactly; `"Linux"` is not `linux` and is
    /// passed through as [`Platform::Other`].
    pub fn parse(value: &str) -> Self {
        match value {
            "darwin" => return Platform::Darwin,
            "win32" => return Platform::Win32,
            "linux" => return Platform::Linux,
            _ => {}
        }

        match value.to_ascii_lowercase().as_str() {
            "windows" => Platform::Win32,
            "osx" | "mac" => Platform::Darwin,
            _ => Platform::Other(value.to_string()),
        }
    }

    /// Re-applies alias normalization to an already parsed value.
    ///
    /// Idempotent: canonical variants are returned as-is.
    pub fn normalized(self) -> Self {
        match self {
            Platform::Other(raw) => Platform::parse(&raw),
            canonical => canonical,
        }
    }

    /// Returns the identifier handed to the packaging step.
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Win32 => "win32",
            Platform::Linux => "linux",
            Platform::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Platform::parse(value)
    }
}

impl serde::Serialize for Platform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Platform {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Platform::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_aliases_map_to_win32() {
        for raw in ["Windows", "windows", "WINDOWS", "wInDoWs"] {
            assert_eq!(Platform::parse(raw), Platform::Win32, "{raw}");
        }
    }

    #[test]
    fn mac_aliases_map_to_darwin() {
        for raw in ["osx", "OSX", "OsX", "mac", "Mac", "MAC"] {
            assert_eq!(Platform::parse(raw), Platform::Darwin, "{raw}");
        }
    }

    #[test]
    fn unknown_values_pass_through_verbatim() {
        assert_eq!(Platform::parse("FreeBSD").as_str(), "FreeBSD");
        assert_eq!(Platform::parse("Linux"), Platform::Other("Linux".into()));
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = Platform::parse("osx");
        assert_eq!(once.clone().normalized(), once);
        assert_eq!(
            Platform::Other("Windows".into()).normalized(),
            Platform::Win32
        );
    }
}
