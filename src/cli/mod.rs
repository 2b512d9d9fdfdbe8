//! Command line interface for option resolution.
//!
//! Parses flags, layers them over an optional options file, runs the
//! resolver and writes the result as JSON.

mod args;
mod source;

pub use args::Args;
pub use source::load_options_file;

use crate::error::{CliError, Result};
use crate::options::{OptionsFactory, RawInput, ResolvedConfig};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(&args).await
}

/// Runs the CLI for already parsed arguments
pub async fn run_with(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let raw = collect_input(args).await?;
    if raw.target_url.as_deref().is_none_or(|url| url.trim().is_empty()) {
        return Err(CliError::InvalidArguments {
            reason: "A target URL is required, on the command line or in the options file"
                .to_string(),
        }
        .into());
    }

    let config = OptionsFactory::offline().build(&raw).await;
    write_config(args, &config).await?;
    Ok(0)
}

/// Merges the options file (if any) with the command line flags
pub async fn collect_input(args: &Args) -> Result<RawInput> {
    let from_flags = args.to_raw_input();
    match &args.options_file {
        Some(path) => Ok(load_options_file(path).await?.merged_with(from_flags)),
        None => Ok(from_flags),
    }
}

async fn write_config(args: &Args, config: &ResolvedConfig) -> Result<()> {
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, json).await?;
            log::info!("Wrote resolved options to {}", path.display());
        }
        None => {
            use tokio::io::AsyncWriteExt;
            let mut stdout = tokio::io::stdout();
            stdout.write_all(json.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
