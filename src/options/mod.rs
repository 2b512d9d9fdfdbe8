//! Option resolution for wrapping a web page into a desktop app.
//!
//! Resolution runs in three stages:
//!
//! 1. [`resolve`] - defaults for every unset field, platform aliases normalized
//! 2. [`infer`] - icon and title inference for an unset `icon` / `name`
//! 3. [`finalize`] - file-name safe, ASCII-only app name
//!
//! [`OptionsFactory`] wires the stages to a host environment and the two
//! inference collaborators.
//!
//! # Example
//!
//! ```no_run
//! use nativefier_options::{OptionsFactory, RawInput};
//!
//! # async fn example() {
//! let raw = RawInput {
//!     target_url: Some("example.com".into()),
//!     platform: Some("osx".into()),
//!     ..Default::default()
//! };
//!
//! let config = OptionsFactory::offline().build(&raw).await;
//! assert_eq!(config.platform.as_str(), "darwin");
//! # }
//! ```

mod defaults;
mod inference;
mod platform;
mod raw;
mod resolved;
mod sanitize;
mod user_agent;

pub use defaults::{
    DEFAULT_APP_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, ELECTRON_VERSION, NATIVEFIER_VERSION,
    placeholder_app_dir, resolve,
};
pub use inference::{StageOutcome, apply_icon, apply_title, infer};
pub use platform::Platform;
pub use raw::RawInput;
pub use resolved::ResolvedConfig;
pub use sanitize::{finalize, kebab_case, sanitize_app_name, sanitize_filename, strip_non_ascii};
pub use user_agent::fake_user_agent;

use crate::infer::{HostEnvironment, IconInferrer, SystemHost, TitleInferrer, Unavailable};

/// Builds [`ResolvedConfig`]s from [`RawInput`].
///
/// Holds no per-build state; one factory can serve any number of concurrent
/// builds.
#[derive(Debug, Clone, Default)]
pub struct OptionsFactory<H, I, T> {
    host: H,
    icons: I,
    titles: T,
}

impl OptionsFactory<SystemHost, Unavailable, Unavailable> {
    /// Factory for the current machine with no icon or title inference.
    ///
    /// Unset names fall back to `"APP"` and unset icons stay unset.
    pub fn offline() -> Self {
        Self::new(SystemHost, Unavailable, Unavailable)
    }
}

impl<H, I, T> OptionsFactory<H, I, T>
where
    H: HostEnvironment + Sync,
    I: IconInferrer,
    T: TitleInferrer,
{
    /// Creates a factory from its collaborators.
    pub fn new(host: H, icons: I, titles: T) -> Self {
        Self { host, icons, titles }
    }

    /// Replaces the icon collaborator.
    pub fn with_icons<I2: IconInferrer>(self, icons: I2) -> OptionsFactory<H, I2, T> {
        OptionsFactory {
            host: self.host,
            icons,
            titles: self.titles,
        }
    }

    /// Replaces the title collaborator.
    pub fn with_titles<T2: TitleInferrer>(self, titles: T2) -> OptionsFactory<H, I, T2> {
        OptionsFactory {
            host: self.host,
            icons: self.icons,
            titles,
        }
    }

    /// Runs the full pipeline for one input.
    ///
    /// Always produces a config: every inference failure is logged and
    /// replaced by its fallback.
    pub async fn build(&self, raw: &RawInput) -> ResolvedConfig {
        let mut config = resolve(raw, &self.host);
        infer(&mut config, &self.icons, &self.titles).await;
        let config = finalize(config);

        log::info!(
            "Resolved options for {} ({}, {})",
            config.name,
            config.platform,
            config.arch
        );
        config
    }
}
