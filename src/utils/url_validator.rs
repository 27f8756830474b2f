//! Validation of URLs submitted for shortening.
//!
//! Only absolute `http`/`https` URLs in `scheme://host` form are accepted.
//! The URL is checked, never rewritten: the caller's string is what gets
//! stored and redirected to, so it must already be exactly what the parser
//! sees. Control characters and surrounding whitespace, which the parser
//! would silently strip, are rejected up front.

use url::Url;

/// Reasons a URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("url is required")]
    Empty,

    #[error("invalid url: {0}")]
    Malformed(String),

    #[error("url scheme must be http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("url contains control characters or surrounding whitespace")]
    InvalidCharacters,

    #[error("url missing host")]
    MissingHost,
}

/// Checks that `raw` is an absolute http(s) URL with a host.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for an empty string
/// - [`UrlValidationError::InvalidCharacters`] for ASCII control characters
///   anywhere, or whitespace at either end
/// - [`UrlValidationError::Malformed`] when parsing fails, which includes
///   relative references such as `/path` or `example.com`
/// - [`UrlValidationError::UnsupportedScheme`] for anything but `http`/`https`
/// - [`UrlValidationError::MissingHost`] unless the scheme is followed by
///   `//` and a non-empty authority (`http:example.com`, `http:///x`)
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("/relative/path").is_err());
/// ```
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if raw.chars().any(|c| c.is_ascii_control())
        || raw.starts_with(char::is_whitespace)
        || raw.ends_with(char::is_whitespace)
    {
        return Err(UrlValidationError::InvalidCharacters);
    }

    let url = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    // The parser invents a host for `http:example.com`; require it literally.
    let after_scheme = raw.get(url.scheme().len()..).unwrap_or_default();
    let has_authority = after_scheme
        .strip_prefix("://")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| !matches!(c, '/' | '?' | '#'));

    if !has_authority || url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_http() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_query_and_fragment() {
        assert!(validate_url("https://example.com/a/b?q=rust&lang=en#top").is_ok());
    }

    #[test]
    fn test_validate_ip_and_port() {
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
        assert!(validate_url("http://[::1]:8080/").is_ok());
    }

    #[test]
    fn test_validate_uppercase_scheme() {
        // The parser lowercases the scheme.
        assert!(validate_url("HTTPS://EXAMPLE.COM/Path").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_validate_missing_scheme() {
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_empty_authority_is_malformed() {
        assert!(matches!(
            validate_url("https://"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_missing_authority_slashes() {
        for raw in [
            "http:example.com",
            "http:/example.com",
            "https:example.com/path",
            "http:///example.com",
            "HTTP:example.com",
        ] {
            assert_eq!(
                validate_url(raw),
                Err(UrlValidationError::MissingHost),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_validate_control_characters() {
        for raw in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exa\rmple.com",
            "https://example.com/\u{0}",
            "https://example.com/\u{7f}",
        ] {
            assert_eq!(
                validate_url(raw),
                Err(UrlValidationError::InvalidCharacters),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_validate_surrounding_whitespace() {
        for raw in [
            " https://example.com",
            "https://example.com ",
            "\u{a0}https://example.com",
        ] {
            assert_eq!(
                validate_url(raw),
                Err(UrlValidationError::InvalidCharacters),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_validate_inner_space_is_kept() {
        // Not stripped by the parser, and valid in a Location header.
        assert!(validate_url("https://example.com/a b").is_ok());
    }

    #[test]
    fn test_validate_relative_path() {
        assert!(matches!(
            validate_url("/path/to/resource"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_validate_ftp_scheme() {
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_validate_dangerous_schemes() {
        for raw in [
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
            "file:///home/user/document.txt",
        ] {
            assert!(
                matches!(
                    validate_url(raw),
                    Err(UrlValidationError::UnsupportedScheme(_))
                ),
                "{raw} should be rejected by scheme"
            );
        }
    }

    #[test]
    fn test_validate_not_a_url() {
        assert!(validate_url("not a valid url").is_err());
    }

    #[test]
    fn test_validate_very_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_url(&url).is_ok());
    }
}
