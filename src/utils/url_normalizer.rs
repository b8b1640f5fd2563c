//! URL validation and canonicalization.

use url::Url;

/// Errors raised while canonicalizing a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("not an absolute URL: {0}")]
    InvalidFormat(String),

    #[error("only http and https URLs can be shortened")]
    UnsupportedScheme,
}

/// Parses and canonicalizes the URL a shortcode will point at.
///
/// Hostnames are lowercased, default ports (80/443) and fragments are
/// stripped, path and query are preserved as given. Schemes other than
/// http/https are rejected outright, which also shuts out `javascript:`
/// and `data:` targets.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for anything `Url`
/// cannot parse as absolute, and
/// [`UrlNormalizationError::UnsupportedScheme`] for non-http(s) schemes.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedScheme);
    }

    if let Some(host) = url.host_str() {
        let lowered = host.to_ascii_lowercase();
        if lowered != host {
            url.set_host(Some(&lowered))
                .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;
        }
    }

    url.set_fragment(None);

    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        // set_port only fails for schemes without ports; http(s) always has one.
        let _ = url.set_port(None);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_https_url_passes_through() {
        assert_eq!(
            normalize_url("https://example.com/page?q=1").unwrap(),
            "https://example.com/page?q=1"
        );
    }

    #[test]
    fn test_host_is_lowercased() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_default_port_is_dropped() {
        assert_eq!(
            normalize_url("https://example.com:443/a").unwrap(),
            "https://example.com/a"
        );
        assert_eq!(
            normalize_url("http://example.com:80/a").unwrap(),
            "http://example.com/a"
        );
    }

    #[test]
    fn test_non_default_port_is_kept() {
        assert_eq!(
            normalize_url("https://example.com:8443/a").unwrap(),
            "https://example.com:8443/a"
        );
    }

    #[test]
    fn test_fragment_is_dropped() {
        assert_eq!(
            normalize_url("https://example.com/doc#section-2").unwrap(),
            "https://example.com/doc"
        );
    }

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(matches!(
            normalize_url("not-a-url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(normalize_url("/relative/path").is_err());
    }

    #[test]
    fn test_dangerous_schemes_are_rejected() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,hello",
            "file:///etc/passwd",
            "ftp://example.com/file",
        ] {
            assert!(matches!(
                normalize_url(input),
                Err(UrlNormalizationError::UnsupportedScheme)
            ));
        }
    }
}
