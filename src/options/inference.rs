//! Icon and title inference for fields the caller left unset.
//!
//! Both stages read the config, ask their collaborator, and hand back an
//! outcome; the outcomes are applied to the config only after both finished.
//! The stages therefore share no state and run concurrently, and a failure in
//! one has no effect on the other.

use super::{Platform, ResolvedConfig, defaults::DEFAULT_APP_NAME, sanitize::kebab_case};
use crate::infer::{IconInferrer, InferenceResult, TitleInferrer};
use std::path::PathBuf;

/// What a single inference stage did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T> {
    /// The field was already set; the collaborator was not called.
    Skipped,
    /// The collaborator answered.
    Inferred(T),
    /// The collaborator failed; the reason is kept for logging.
    Failed(String),
}

impl<T> From<InferenceResult<T>> for StageOutcome<T> {
    fn from(result: InferenceResult<T>) -> Self {
        match result {
            Ok(value) => StageOutcome::Inferred(value),
            Err(e) => StageOutcome::Failed(e.to_string()),
        }
    }
}

/// Fills in `icon` and `name` where the caller left them unset.
///
/// Never fails: a failed icon lookup leaves `icon` unset, a failed title
/// lookup sets `name` to `"APP"`. On linux a name produced here is
/// kebab-cased.
pub async fn infer<I, T>(config: &mut ResolvedConfig, icons: &I, titles: &T)
where
    I: IconInferrer,
    T: TitleInferrer,
{
    let (icon, title) = {
        let snapshot: &ResolvedConfig = config;
        tokio::join!(icon_stage(snapshot, icons), title_stage(snapshot, titles))
    };

    apply_icon(config, icon);
    apply_title(config, title);
}

async fn icon_stage<I: IconInferrer>(
    config: &ResolvedConfig,
    icons: &I,
) -> StageOutcome<PathBuf> {
    if config.has_icon() {
        log::debug!("Icon given, skipping icon inference");
        return StageOutcome::Skipped;
    }
    icons
        .infer_icon(&config.target_url, &config.platform)
        .await
        .into()
}

async fn title_stage<T: TitleInferrer>(
    config: &ResolvedConfig,
    titles: &T,
) -> StageOutcome<String> {
    if config.has_name() {
        log::debug!("Name given, skipping title inference");
        return StageOutcome::Skipped;
    }
    titles.infer_title(&config.target_url).await.into()
}

/// Applies the icon stage outcome.
pub fn apply_icon(config: &mut ResolvedConfig, outcome: StageOutcome<PathBuf>) {
    match outcome {
        StageOutcome::Skipped => {}
        StageOutcome::Inferred(path) if path.as_os_str().is_empty() => {
            log::warn!("Icon inference returned no icon for {}", config.target_url);
        }
        StageOutcome::Inferred(path) => {
            log::debug!("Inferred icon: {}", path.display());
            config.icon = Some(path);
        }
        StageOutcome::Failed(reason) => {
            log::warn!("Cannot automatically retrieve the app icon: {}", reason);
        }
    }
}

/// Applies the title stage outcome, including the linux kebab-case step.
pub fn apply_title(config: &mut ResolvedConfig, outcome: StageOutcome<String>) {
    let name = match outcome {
        StageOutcome::Skipped => return,
        StageOutcome::Inferred(title) => title.trim().to_string(),
        StageOutcome::Failed(reason) => {
            log::warn!(
                "Unable to automatically determine app name, falling back to '{}': {}",
                DEFAULT_APP_NAME,
                reason
            );
            DEFAULT_APP_NAME.to_string()
        }
    };

    // Spaces break dock pinning on some Linux desktops.
    config.name = if config.platform == Platform::Linux {
        kebab_case(&name)
    } else {
        name
    };
}
