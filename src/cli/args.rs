//! Command line argument parsing and validation.
//!
//! Flags mirror [`RawInput`] one to one; a flag that is not given leaves the
//! field unset so an options file or a default can fill it.

use crate::options::RawInput;
use clap::Parser;
use std::path::PathBuf;

/// Resolve the options for wrapping a web page into a desktop app
#[derive(Parser, Debug, Default)]
#[command(
    name = "nativefier-options",
    version,
    about = "Resolve the options for wrapping a web page into a desktop app",
    long_about = "Fills in every option needed to package a web page as a desktop app:
platform and architecture of this machine, window size, user agent, app name and icon.
The resolved options are printed as JSON for the packaging step.

Usage:
  nativefier-options https://mail.example.com
  nativefier-options example.com ./out --platform windows --name \"Example\"
  nativefier-options --options app.toml --honest --output resolved.json"
)]
pub struct Args {
    /// Page to wrap (scheme optional)
    #[arg(value_name = "TARGET_URL")]
    pub target_url: Option<String>,

    /// Directory the packaged app is written to (default: current directory)
    #[arg(value_name = "DEST")]
    pub out: Option<PathBuf>,

    /// JSON or TOML file with options; flags given on the command line win
    #[arg(long = "options", value_name = "FILE", env = "NATIVEFIER_OPTIONS")]
    pub options_file: Option<PathBuf>,

    /// Write the resolved options here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// App name (default: page title)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Target platform: darwin, win32, linux (aliases: mac, osx, windows)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Target architecture: ia32, x64, arm64
    #[arg(short, long)]
    pub arch: Option<String>,

    /// Runtime version to package against
    #[arg(short, long = "electron-version", value_name = "VERSION")]
    pub electron_version: Option<String>,

    /// Overwrite an existing app in the output directory
    #[arg(short, long)]
    pub overwrite: bool,

    /// Pack the app sources into an archive
    #[arg(short, long)]
    pub conceal: bool,

    /// Show an unread counter badge
    #[arg(long)]
    pub counter: bool,

    /// Icon file to use (default: inferred from the page)
    #[arg(short, long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Keep the menu bar visible
    #[arg(short = 'm', long)]
    pub show_menu_bar: bool,

    /// User agent to send (default: a desktop browser's)
    #[arg(short, long)]
    pub user_agent: Option<String>,

    /// Send the runtime's own user agent
    #[arg(long)]
    pub honest: bool,

    /// Ignore TLS certificate errors
    #[arg(long)]
    pub ignore_certificate: bool,

    /// Allow insecure content
    #[arg(long)]
    pub insecure: bool,

    /// Flash plugin directory
    #[arg(long, value_name = "DIR")]
    pub flash: Option<PathBuf>,

    /// Script or stylesheet to inject into the page
    #[arg(long, value_name = "PATH")]
    pub inject: Option<PathBuf>,

    /// Start in full screen
    #[arg(short, long)]
    pub full_screen: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err("Window width and height must be greater than zero".to_string());
        }

        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("Name cannot be blank".to_string());
        }

        if self.honest && self.user_agent.is_some() {
            log::warn!("--honest overrides --user-agent");
        }

        Ok(())
    }

    /// Options set on the command line; switches that are off stay unset.
    pub fn to_raw_input(&self) -> RawInput {
        RawInput {
            name: self.name.clone(),
            target_url: self.target_url.clone(),
            platform: self.platform.clone(),
            arch: self.arch.clone(),
            electron_version: self.electron_version.clone(),
            out: self.out.clone(),
            overwrite: self.overwrite.then_some(true),
            conceal: self.conceal.then_some(true),
            icon: self.icon.clone(),
            counter: self.counter.then_some(true),
            width: self.width,
            height: self.height,
            show_menu_bar: self.show_menu_bar.then_some(true),
            user_agent: self.user_agent.clone(),
            ignore_certificate: self.ignore_certificate.then_some(true),
            insecure: self.insecure.then_some(true),
            flash: self.flash.clone(),
            inject: self.inject.clone(),
            full_screen: self.full_screen.then_some(true),
            honest: self.honest.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_left_off_stay_unset() {
        let args = Args::parse_from(["nativefier-options", "example.com", "--honest"]);
        let raw = args.to_raw_input();

        assert_eq!(raw.target_url.as_deref(), Some("example.com"));
        assert_eq!(raw.honest, Some(true));
        assert_eq!(raw.full_screen, None);
        assert_eq!(raw.overwrite, None);
    }

    #[test]
    fn short_flags_match_long_ones() {
        let args = Args::parse_from([
            "nativefier-options",
            "example.com",
            "/tmp/out",
            "-n",
            "Example",
            "-p",
            "osx",
            "-o",
            "-c",
            "-m",
            "-f",
        ]);

        assert_eq!(args.name.as_deref(), Some("Example"));
        assert_eq!(args.platform.as_deref(), Some("osx"));
        assert_eq!(args.out, Some(PathBuf::from("/tmp/out")));
        assert!(args.overwrite && args.conceal && args.show_menu_bar && args.full_screen);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let args = Args::parse_from(["nativefier-options", "example.com", "--width", "0"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        let args = Args::parse_from(["nativefier-options", "example.com", "--name", "  "]);
        assert!(args.validate().is_err());
    }
}
