//! Collaborators consumed by option resolution.
//!
//! The resolver only depends on the contracts in this module:
//!
//! - [`IconInferrer`] - finds an icon for a target URL
//! - [`TitleInferrer`] - finds a page title for a target URL
//! - [`HostEnvironment`] - reports the host platform, arch and working directory
//!
//! Icon and title discovery report failure through [`InferenceError`]; the
//! pipeline turns every failure into a fallback value.

mod os;
mod static_source;
mod target_url;

pub use os::SystemHost;
pub use static_source::{Failing, Fixed, Unavailable};
pub use target_url::normalize_url;

use crate::error::InferenceError;
use crate::options::Platform;
use std::future::Future;
use std::path::PathBuf;

/// Outcome of a single inference attempt.
pub type InferenceResult<T> = std::result::Result<T, InferenceError>;

/// Finds an icon for the wrapped page.
///
/// Implementations return the path of a local icon file suitable for
/// `platform`, or an error when none could be determined.
pub trait IconInferrer: Send + Sync {
    /// Infers an icon for `target_url`.
    fn infer_icon(
        &self,
        target_url: &str,
        platform: &Platform,
    ) -> impl Future<Output = InferenceResult<PathBuf>> + Send;
}

/// Finds the title of the wrapped page.
pub trait TitleInferrer: Send + Sync {
    /// Infers the page title of `target_url`. The title may carry surrounding
    /// whitespace; the pipeline trims it.
    fn infer_title(&self, target_url: &str) -> impl Future<Output = InferenceResult<String>> + Send;
}

/// Host environment queries used for defaults.
pub trait HostEnvironment {
    /// Node-style platform identifier of the host (`darwin`, `win32`, `linux`, ...).
    fn platform(&self) -> String;

    /// Node-style architecture identifier of the host (`x64`, `ia32`, `arm64`, ...).
    fn arch(&self) -> String;

    /// Current working directory, if it can be read.
    fn current_dir(&self) -> Option<PathBuf>;
}
