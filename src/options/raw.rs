//! Caller-supplied, partially specified options.

use serde::Deserialize;
use std::path::PathBuf;

/// Options as given by the caller.
///
/// Every field is optional; anything left out is filled in by the default
/// resolver or by inference. Keys use camelCase so that option files read the
/// same as the command line flags they mirror.
///
/// # Examples
///
/// ```
/// use nativefier_options::RawInput;
///
/// let raw: RawInput = serde_json::from_str(
///     r#"{ "targetUrl": "example.com", "platform": "mac", "honest": true }"#,
/// ).unwrap();
/// assert_eq!(raw.platform.as_deref(), Some("mac"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInput {
    /// Application name. Inferred from the page title when absent.
    pub name: Option<String>,

    /// Page to wrap. Normalized before use.
    pub target_url: Option<String>,

    /// Target platform; aliases such as `windows` or `osx` are accepted.
    pub platform: Option<String>,

    /// Target CPU architecture (`x64`, `ia32`, ...).
    pub arch: Option<String>,

    /// Runtime version to package against.
    pub electron_version: Option<String>,

    /// Output directory for the packaged app.
    pub out: Option<PathBuf>,

    /// Overwrite an existing app in `out`.
    pub overwrite: Option<bool>,

    /// Pack the app sources into an archive.
    pub conceal: Option<bool>,

    /// Icon file to use instead of inferring one.
    pub icon: Option<PathBuf>,

    /// Show an unread counter badge.
    pub counter: Option<bool>,

    /// Initial window width.
    pub width: Option<u32>,

    /// Initial window height.
    pub height: Option<u32>,

    /// Keep the menu bar visible.
    pub show_menu_bar: Option<bool>,

    /// User agent string to send.
    pub user_agent: Option<String>,

    /// Ignore TLS certificate errors.
    pub ignore_certificate: Option<bool>,

    /// Allow insecure content.
    pub insecure: Option<bool>,

    /// Flash plugin directory.
    pub flash: Option<PathBuf>,

    /// Script or stylesheet to inject into the page.
    pub inject: Option<PathBuf>,

    /// Start in full screen.
    pub full_screen: Option<bool>,

    /// Send the runtime's own user agent instead of a browser one.
    pub honest: Option<bool>,
}

impl RawInput {
    /// Layers `overrides` on top of `self`: every field set in `overrides`
    /// wins, every field left unset keeps the value from `self`.
    pub fn merged_with(self, overrides: RawInput) -> RawInput {
        RawInput {
            name: overrides.name.or(self.name),
            target_url: overrides.target_url.or(self.target_url),
            platform: overrides.platform.or(self.platform),
            arch: overrides.arch.or(self.arch),
            electron_version: overrides.electron_version.or(self.electron_version),
            out: overrides.out.or(self.out),
            overwrite: overrides.overwrite.or(self.overwrite),
            conceal: overrides.conceal.or(self.conceal),
            icon: overrides.icon.or(self.icon),
            counter: overrides.counter.or(self.counter),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            show_menu_bar: overrides.show_menu_bar.or(self.show_menu_bar),
            user_agent: overrides.user_agent.or(self.user_agent),
            ignore_certificate: overrides.ignore_certificate.or(self.ignore_certificate),
            insecure: overrides.insecure.or(self.insecure),
            flash: overrides.flash.or(self.flash),
            inject: overrides.inject.or(self.inject),
            full_screen: overrides.full_screen.or(self.full_screen),
            honest: overrides.honest.or(self.honest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_and_gaps_are_filled() {
        let file = RawInput {
            name: Some("From File".into()),
            width: Some(1024),
            honest: Some(false),
            ..Default::default()
        };
        let cli = RawInput {
            name: Some("From Flag".into()),
            honest: Some(true),
            ..Default::default()
        };

        let merged = file.merged_with(cli);
        assert_eq!(merged.name.as_deref(), Some("From Flag"));
        assert_eq!(merged.width, Some(1024));
        assert_eq!(merged.honest, Some(true));
        assert!(merged.target_url.is_none());
    }

    #[test]
    fn missing_keys_stay_unset() {
        let raw: RawInput = serde_json::from_str(r#"{ "showMenuBar": true }"#).unwrap();
        assert_eq!(raw.show_menu_bar, Some(true));
        assert!(raw.full_screen.is_none());
    }
}
