//! Target URL normalization.

use url::Url;

/// Canonicalizes the URL of the page to wrap.
///
/// - Surrounding whitespace is trimmed
/// - `http://` is prepended when no scheme is present
/// - The result is parsed and re-serialized by [`url::Url`]
///
/// Input that still fails to parse is returned trimmed but otherwise
/// unchanged, with a warning. A missing URL becomes the empty string.
pub fn normalize_url(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        log::warn!("No target URL given");
        return String::new();
    };

    let with_scheme = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    match Url::parse(&with_scheme) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!("Target URL {} is not valid: {}", raw, e);
            raw.to_string()
        }
    }
}

fn has_scheme(raw: &str) -> bool {
    match raw.find("://") {
        Some(idx) => {
            let scheme = &raw[..idx];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_http_when_scheme_missing() {
        assert_eq!(normalize_url(Some("example.com")), "http://example.com/");
        assert_eq!(
            normalize_url(Some("  example.com/inbox ")),
            "http://example.com/inbox"
        );
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(
            normalize_url(Some("https://mail.example.com/u/0")),
            "https://mail.example.com/u/0"
        );
    }

    #[test]
    fn missing_url_is_empty() {
        assert_eq!(normalize_url(None), "");
        assert_eq!(normalize_url(Some("   ")), "");
    }

    #[test]
    fn unparseable_input_is_returned_trimmed() {
        assert_eq!(normalize_url(Some(" http://[::1 ")), "http://[::1");
    }
}
