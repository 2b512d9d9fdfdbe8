//! Collaborators that answer without looking at the page.
//!
//! Used by the CLI, which has no network access, and handy for embedding
//! callers that already know the icon or title.

use super::{IconInferrer, InferenceResult, TitleInferrer};
use crate::error::InferenceError;
use crate::options::Platform;
use std::future::Future;
use std::path::PathBuf;

/// Always reports that inference is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl IconInferrer for Unavailable {
    fn infer_icon(
        &self,
        _target_url: &str,
        _platform: &Platform,
    ) -> impl Future<Output = InferenceResult<PathBuf>> + Send {
        std::future::ready(Err(InferenceError::Unavailable { what: "icon" }))
    }
}

impl TitleInferrer for Unavailable {
    fn infer_title(&self, _target_url: &str) -> impl Future<Output = InferenceResult<String>> + Send {
        std::future::ready(Err(InferenceError::Unavailable { what: "title" }))
    }
}

/// Always succeeds with the same value.
///
/// As an [`IconInferrer`] the value is the icon path; as a [`TitleInferrer`]
/// it is the page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed(pub String);

impl IconInferrer for Fixed {
    fn infer_icon(
        &self,
        _target_url: &str,
        _platform: &Platform,
    ) -> impl Future<Output = InferenceResult<PathBuf>> + Send {
        std::future::ready(Ok(PathBuf::from(&self.0)))
    }
}

impl TitleInferrer for Fixed {
    fn infer_title(&self, _target_url: &str) -> impl Future<Output = InferenceResult<String>> + Send {
        std::future::ready(Ok(self.0.clone()))
    }
}

/// Always fails with the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failing(pub InferenceError);

impl IconInferrer for Failing {
    fn infer_icon(
        &self,
        _target_url: &str,
        _platform: &Platform,
    ) -> impl Future<Output = InferenceResult<PathBuf>> + Send {
        std::future::ready(Err(self.0.clone()))
    }
}

impl TitleInferrer for Failing {
    fn infer_title(&self, _target_url: &str) -> impl Future<Output = InferenceResult<String>> + Send {
        std::future::ready(Err(self.0.clone()))
    }
}
