//! Device/browser/OS derivation from User-Agent strings using woothee.

use woothee::parser::Parser;

/// Fields derived from a User-Agent string for click analytics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UaInfo {
    pub device_type: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
}

/// Parses a User-Agent header into analytics fields.
///
/// A missing or unrecognized User-Agent yields all-`None` fields; parsing
/// never fails the caller.
pub fn parse_user_agent(user_agent: Option<&str>) -> UaInfo {
    let Some(ua) = user_agent else {
        return UaInfo::default();
    };

    let Some(result) = Parser::new().parse(ua) else {
        return UaInfo::default();
    };

    // woothee reports "UNKNOWN" for fields it cannot classify
    let known = |value: &str| {
        if value.is_empty() || value == "UNKNOWN" {
            None
        } else {
            Some(value.to_string())
        }
    };

    UaInfo {
        device_type: known(result.category),
        browser: known(result.name),
        os: known(result.os),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    #[test]
    fn test_parse_chrome_desktop() {
        let info = parse_user_agent(Some(CHROME_DESKTOP));

        assert_eq!(info.browser.as_deref(), Some("Chrome"));
        assert_eq!(info.device_type.as_deref(), Some("pc"));
        assert!(info.os.is_some());
    }

    #[test]
    fn test_parse_missing_user_agent() {
        assert_eq!(parse_user_agent(None), UaInfo::default());
    }

    #[test]
    fn test_parse_unrecognized_user_agent() {
        let info = parse_user_agent(Some("definitely-not-a-browser"));

        assert!(info.browser.is_none());
        assert!(info.os.is_none());
    }
}
