//! Loading options from a JSON or TOML file.

use crate::error::Result;
use crate::options::RawInput;
use anyhow::Context;
use std::path::Path;

/// Reads [`RawInput`] from `path`.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON. Keys
/// use the same camelCase names in both formats.
pub async fn load_options_file(path: &Path) -> Result<RawInput> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read options file {}", path.display()))?;

    let raw = parse_options(path, &contents)?;
    log::debug!("Loaded options from {}", path.display());
    Ok(raw)
}

fn parse_options(path: &Path, contents: &str) -> Result<RawInput> {
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        Ok(toml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionsError;

    #[test]
    fn parses_toml_by_extension() {
        let raw = parse_options(
            Path::new("app.TOML"),
            "name = \"Mail\"\ntargetUrl = \"mail.example.com\"\nshowMenuBar = true\n",
        )
        .unwrap();

        assert_eq!(raw.name.as_deref(), Some("Mail"));
        assert_eq!(raw.target_url.as_deref(), Some("mail.example.com"));
        assert_eq!(raw.show_menu_bar, Some(true));
    }

    #[test]
    fn parses_json_otherwise() {
        let raw = parse_options(Path::new("app.conf"), r#"{ "width": 640 }"#).unwrap();
        assert_eq!(raw.width, Some(640));
    }

    #[test]
    fn syntax_errors_keep_their_format() {
        assert!(matches!(
            parse_options(Path::new("bad.json"), "{"),
            Err(OptionsError::Json(_))
        ));
        assert!(matches!(
            parse_options(Path::new("bad.toml"), "name = "),
            Err(OptionsError::Toml(_))
        ));
    }
}
