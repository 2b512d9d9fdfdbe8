//! Post-processing: platform normalization and file-name safe app names.

use super::{ResolvedConfig, defaults::DEFAULT_APP_NAME};

/// Longest file name, in bytes, most filesystems accept.
const NAME_MAX: usize = 255;

/// Characters no common filesystem allows in a file name.
const ILLEGAL_CHARS: &[char] = &['/', '?', '<', '>', '\\', ':', '*', '|', '"'];

/// Device names Windows reserves regardless of extension.
const WINDOWS_RESERVED: &[&str] = &["con", "prn", "aux", "nul"];

/// Final pass over a config coming out of inference.
///
/// - Re-applies platform alias normalization (idempotent)
/// - Makes `name` file-name safe and ASCII-only
///
/// An app name that sanitizes to nothing is replaced by `"APP"`.
pub fn finalize(mut config: ResolvedConfig) -> ResolvedConfig {
    config.platform = config.platform.normalized();
    config.name = sanitize_app_name(&config.name);
    config
}

/// Sanitizes an app name: file-name safety first, then non-ASCII removal.
pub fn sanitize_app_name(name: &str) -> String {
    let cleaned = strip_non_ascii(&sanitize_filename(name));
    if cleaned.is_empty() {
        log::warn!(
            "App name {:?} has no file-name safe ASCII characters, falling back to '{}'",
            name,
            DEFAULT_APP_NAME
        );
        return DEFAULT_APP_NAME.to_string();
    }
    cleaned
}

/// Removes everything outside the ASCII range.
pub fn strip_non_ascii(value: &str) -> String {
    value.chars().filter(char::is_ascii).collect()
}

/// Strips characters that are illegal in file names on common filesystems.
///
/// - Removes `/ ? < > \ : * | "` and C0/C1 control characters
/// - Names made only of dots, and Windows device names such as `con` or
///   `lpt1.txt`, become empty
/// - Trailing dots and spaces are removed
/// - Truncated to 255 bytes on a char boundary
pub fn sanitize_filename(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c) && !is_control(*c))
        .collect();

    if is_dots_only(&cleaned) || is_windows_reserved(&cleaned) {
        return String::new();
    }

    let trimmed = cleaned.trim_end_matches(['.', ' ']);
    truncate_bytes(trimmed, NAME_MAX).to_string()
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{1f}' | '\u{80}'..='\u{9f}')
}

fn is_dots_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c == '.')
}

fn is_windows_reserved(value: &str) -> bool {
    let stem = match value.find('.') {
        Some(idx) => &value[..idx],
        None => value,
    };
    let stem = stem.to_ascii_lowercase();

    if WINDOWS_RESERVED.contains(&stem.as_str()) {
        return true;
    }

    match stem.as_bytes() {
        [b'c', b'o', b'm', digit] | [b'l', b'p', b't', digit] => digit.is_ascii_digit(),
        _ => false,
    }
}

fn truncate_bytes(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Lowercase words joined by hyphens.
///
/// Words break at any character that is not a letter or digit, between a
/// lowercase and an uppercase letter, between letters and digits, and before
/// the last capital of an acronym (`"XMLHttp"` → `xml-http`). Apostrophes are
/// dropped without breaking a word and accented Latin letters are reduced to
/// their base letter.
///
/// ```
/// use nativefier_options::kebab_case;
///
/// assert_eq!(kebab_case("My Cool App"), "my-cool-app");
/// assert_eq!(kebab_case("GitHub's Dashboard"), "git-hubs-dashboard");
/// ```
pub fn kebab_case(value: &str) -> String {
    words(value)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

fn words(value: &str) -> Vec<String> {
    let chars: Vec<char> = deburr(value)
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();

    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = prev.is_numeric() != c.is_numeric()
                || (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(char::is_lowercase));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Replaces Latin-1 accented letters with their base letters and drops
/// combining diacritical marks.
fn deburr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        let replacement = match c {
            'À'..='Å' => "A",
            'à'..='å' => "a",
            'Ç' => "C",
            'ç' => "c",
            'È'..='Ë' => "E",
            'è'..='ë' => "e",
            'Ì'..='Ï' => "I",
            'ì'..='ï' => "i",
            'Ð' => "D",
            'ð' => "d",
            'Ñ' => "N",
            'ñ' => "n",
            'Ò'..='Ö' | 'Ø' => "O",
            'ò'..='ö' | 'ø' => "o",
            'Ù'..='Ü' => "U",
            'ù'..='ü' => "u",
            'Ý' => "Y",
            'ý' | 'ÿ' => "y",
            'Æ' => "Ae",
            'æ' => "ae",
            'Þ' => "Th",
            'þ' => "th",
            'ß' => "ss",
            'Œ' => "Oe",
            'œ' => "oe",
            '\u{0300}'..='\u{036f}' => "",
            other => {
                out.push(other);
                continue;
            }
        };
        out.push_str(replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_illegal_and_control_characters() {
        assert_eq!(sanitize_filename("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
        assert_eq!(sanitize_filename("tab\there\u{85}"), "tabhere");
    }

    #[test]
    fn reserved_names_become_empty() {
        assert_eq!(sanitize_filename(".."), "");
        assert_eq!(sanitize_filename("CON"), "");
        assert_eq!(sanitize_filename("lpt1.txt"), "");
        assert_eq!(sanitize_filename("com10"), "com10");
        assert_eq!(sanitize_filename("console"), "console");
    }

    #[test]
    fn trailing_dots_and_spaces_are_trimmed() {
        assert_eq!(sanitize_filename("My App. . "), "My App");
        assert_eq!(sanitize_filename(" Leading stays"), " Leading stays");
    }

    #[test]
    fn truncates_on_char_boundary() {
        let long = "é".repeat(200);
        let cut = sanitize_filename(&long);
        assert!(cut.len() <= NAME_MAX);
        assert_eq!(cut.chars().count(), 127);
    }

    #[test]
    fn app_name_strips_every_non_ascii_character() {
        let name = sanitize_app_name("Café β App");
        assert!(name.is_ascii());
        assert_eq!(name, "Caf  App");
    }

    #[test]
    fn app_name_falls_back_when_nothing_survives() {
        assert_eq!(sanitize_app_name("日本語"), DEFAULT_APP_NAME);
        assert_eq!(sanitize_app_name("???"), DEFAULT_APP_NAME);
        assert_eq!(sanitize_app_name(""), DEFAULT_APP_NAME);
    }

    #[test]
    fn kebab_splits_on_separators_and_case() {
        assert_eq!(kebab_case("My Cool App"), "my-cool-app");
        assert_eq!(kebab_case("  --Foo__bar--  "), "foo-bar");
        assert_eq!(kebab_case("fooBar"), "foo-bar");
        assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(kebab_case("version2beta"), "version-2-beta");
        assert_eq!(kebab_case("APP"), "app");
    }

    #[test]
    fn kebab_deburrs_latin_letters() {
        assert_eq!(kebab_case("Café Crème"), "cafe-creme");
        assert_eq!(kebab_case("Straße"), "strasse");
    }

    #[test]
    fn kebab_of_nothing_is_empty() {
        assert_eq!(kebab_case("!!!"), "");
    }
}
