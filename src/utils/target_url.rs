//! Validation of link targets.
//!
//! Targets are stored exactly as submitted (minus surrounding whitespace), so
//! this module only checks them; it never rewrites them.

use url::Url;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("url is required")]
    Empty,

    #[error("url is not a valid absolute URL: {0}")]
    Malformed(String),

    #[error("url must not contain control characters")]
    ControlCharacter,

    #[error("url scheme must be http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("url must include a host")]
    MissingHost,
}

/// Checks that `raw` is an absolute `http`/`https` URL with a host and no
/// ASCII control characters.
pub fn validate_target_url(raw: &str) -> Result<(), TargetUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TargetUrlError::Empty);
    }

    // The parser strips tab, CR and LF, but the raw string is what gets stored.
    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(TargetUrlError::ControlCharacter);
    }

    let parsed = Url::parse(trimmed).map_err(|e| TargetUrlError::Malformed(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(TargetUrlError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://example.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1#frag").is_ok());
        assert!(validate_target_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_target_url("   "), Err(TargetUrlError::Empty));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_target_url("example.com/path"),
            Err(TargetUrlError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            validate_target_url("ftp://example.com/file"),
            Err(TargetUrlError::UnsupportedScheme("ftp".to_string()))
        );
        assert!(validate_target_url("javascript:alert(1)").is_err());
        assert!(validate_target_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        for raw in [
            "https://exam\nple.com/",
            "https://example.com/\r\npath",
            "https://example.com/a\tb",
            "https://example.com/\u{7f}",
        ] {
            assert_eq!(
                validate_target_url(raw),
                Err(TargetUrlError::ControlCharacter),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(validate_target_url("https://example.com/über").is_ok());
    }
}
