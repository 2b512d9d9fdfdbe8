//! Browser user agents sent in place of the runtime's own.

/// macOS desktop Chrome.
pub const DARWIN_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2227.1 Safari/537.36";

/// Windows desktop Chrome.
pub const WIN32_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

/// Linux desktop Chrome.
pub const LINUX_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2227.0 Safari/537.36";

/// Returns the fake browser user agent for a host platform.
///
/// Keyed on the platform the tool runs on, not the packaging target.
/// Hosts other than darwin, win32 and linux get `None`.
pub fn fake_user_agent(host_platform: &str) -> Option<&'static str> {
    match host_platform {
        "darwin" => Some(DARWIN_USER_AGENT),
        "win32" => Some(WIN32_USER_AGENT),
        "linux" => Some(LINUX_USER_AGENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hosts_get_a_browser_agent() {
        assert!(fake_user_agent("darwin").unwrap().contains("Macintosh"));
        assert!(fake_user_agent("win32").unwrap().contains("Windows NT"));
        assert!(fake_user_agent("linux").unwrap().contains("X11; Linux"));
    }

    #[test]
    fn other_hosts_get_none() {
        assert_eq!(fake_user_agent("freebsd"), None);
        assert_eq!(fake_user_agent(""), None);
    }
}
