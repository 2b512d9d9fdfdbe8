//! Option resolution for wrapping a web page into a desktop application.
//!
//! Takes partially specified options for a target page and fills in the
//! rest before they are handed to the packaging step:
//! - Defaults for platform, architecture, window size, user agent, ...
//! - App icon and name inferred from the page, with fallbacks
//! - Platform aliases normalized and the app name made file-name safe
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod infer;
pub mod options;

// Re-export commonly used types
pub use error::{CliError, InferenceError, OptionsError, Result};
pub use infer::{HostEnvironment, IconInferrer, SystemHost, TitleInferrer};
pub use options::{OptionsFactory, Platform, RawInput, ResolvedConfig, kebab_case};
