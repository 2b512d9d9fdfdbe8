//! Fully resolved options handed to the packaging step.

use super::Platform;
use serde::Serialize;
use std::path::PathBuf;

/// Options after defaulting, inference and sanitization.
///
/// Built once per [`OptionsFactory::build`](super::OptionsFactory::build)
/// call and returned by value. Serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Placeholder app directory the packager copies from.
    pub dir: PathBuf,

    /// Application name. Non-empty, ASCII-only and file-name safe once resolved.
    pub name: String,

    /// Normalized target URL.
    pub target_url: String,

    /// Target platform, aliases already normalized.
    pub platform: Platform,

    /// Target CPU architecture.
    pub arch: String,

    /// Runtime version to package against.
    pub version: String,

    /// Version of this tool.
    pub nativefier_version: String,

    /// Output directory.
    pub out: PathBuf,

    /// Overwrite an existing app in `out`.
    pub overwrite: bool,

    /// Pack app sources into an archive.
    pub asar: bool,

    /// Icon path; stays unset when none was given and none could be inferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,

    /// Show an unread counter badge.
    pub counter: bool,

    /// Initial window width.
    pub width: u32,

    /// Initial window height.
    pub height: u32,

    /// Keep the menu bar visible.
    pub show_menu_bar: bool,

    /// User agent to send; `None` means the runtime's own.
    pub user_agent: Option<String>,

    /// Ignore TLS certificate errors.
    pub ignore_certificate: bool,

    /// Allow insecure content.
    pub insecure: bool,

    /// Flash plugin directory.
    pub flash_plugin_dir: Option<PathBuf>,

    /// Script or stylesheet to inject.
    pub inject: Option<PathBuf>,

    /// Start in full screen.
    pub full_screen: bool,
}

impl ResolvedConfig {
    /// Whether a non-empty icon is already set.
    pub fn has_icon(&self) -> bool {
        self.icon
            .as_deref()
            .is_some_and(|icon| !icon.as_os_str().is_empty())
    }

    /// Whether a non-empty name is already set.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
