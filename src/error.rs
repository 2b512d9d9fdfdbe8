//! Error types for option resolution.
//!
//! Inference failures never leave the pipeline: they are turned into fallback
//! values where they happen. The remaining errors belong to the CLI surface
//! (option files, argument validation, output).

use thiserror::Error;

/// Result type alias for CLI-level operations
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Main error type for everything outside the resolution pipeline
#[derive(Error, Debug)]
pub enum OptionsError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors while writing the resolved options
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Errors with context attached, such as a missing options file
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Failure reported by an icon or title inference collaborator.
///
/// The pipeline maps every variant to a fallback value; none of them is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// No collaborator is configured for this kind of inference
    #[error("{what} inference is not available")]
    Unavailable {
        /// What was being inferred ("icon", "title")
        what: &'static str,
    },

    /// The collaborator ran but found nothing usable
    #[error("no {what} found for {url}")]
    NotFound {
        /// What was being inferred
        what: &'static str,
        /// Target URL that was inspected
        url: String,
    },

    /// The collaborator failed outright
    #[error("{what} inference failed: {reason}")]
    Failed {
        /// What was being inferred
        what: &'static str,
        /// Reason for the failure
        reason: String,
    },
}

impl OptionsError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            OptionsError::Json(_) | OptionsError::Toml(_) => vec![
                "Check the options file syntax".to_string(),
                "Keys use camelCase, e.g. targetUrl, showMenuBar".to_string(),
            ],
            OptionsError::Io(_) => vec![
                "Check that the --output path is writable".to_string(),
                "Its parent directory is created if missing".to_string(),
            ],
            OptionsError::Anyhow(e) if e.downcast_ref::<std::io::Error>().is_some() => {
                vec!["Check that the options file exists and is readable".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
