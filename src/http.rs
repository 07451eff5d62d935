pub use api::{require_array, require_bool, require_f64, require_str, ApiClient, ApiError};
pub use client::{build, ClientConfig};

use url::Url;

mod api;
mod client;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum UrlError {
    #[error("Cannot parse given URL.")]
    Invalid,
    #[error("Only HTTP is supported as protocol.")]
    UnsupportedScheme,
    #[error("Port number is missing. Please try {0}://hostname:port")]
    MissingPort(String),
}

/// Normalises the user-supplied URL into the canonical base
/// `scheme://host:port[/path]`, dropping query, fragment and any
/// trailing slash. The port must be spelled out in the authority.
pub fn normalize_base_url(raw: &str) -> Result<String, UrlError> {
    let url = Url::parse(raw).map_err(|_| UrlError::Invalid)?;

    let scheme = url.scheme();
    if !scheme.starts_with("http") {
        return Err(UrlError::UnsupportedScheme);
    }
    if !has_explicit_port(raw) {
        return Err(UrlError::MissingPort(scheme.to_string()));
    }

    let host = url.host_str().ok_or(UrlError::Invalid)?;
    // The parser strips default ports, so recover them here; the
    // explicit-port check above already ruled out an absent one.
    let port = url
        .port_or_known_default()
        .ok_or_else(|| UrlError::MissingPort(scheme.to_string()))?;

    let mut base = format!("{scheme}://{host}:{port}");
    base.push_str(url.path().trim_end_matches('/'));
    Ok(base)
}

fn has_explicit_port(raw: &str) -> bool {
    let rest = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    // IPv6 literals carry colons inside the brackets
    match host_port.rsplit_once(']') {
        Some((_, tail)) => tail.contains(':'),
        None => host_port.contains(':'),
    }
}

#[cfg(test)]
mod test_normalize_base_url {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(
            normalize_base_url("http://localhost:12900"),
            Ok("http://localhost:12900".to_string())
        );
    }

    #[test]
    fn test_https_is_accepted() {
        assert_eq!(
            normalize_base_url("https://graylog.example.com:443"),
            Ok("https://graylog.example.com:443".to_string())
        );
    }

    #[test]
    fn test_path_is_kept() {
        assert_eq!(
            normalize_base_url("http://graylog.example.com:9000/api"),
            Ok("http://graylog.example.com:9000/api".to_string())
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        assert_eq!(
            normalize_base_url("http://localhost:12900/"),
            Ok("http://localhost:12900".to_string())
        );
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        assert_eq!(
            normalize_base_url("http://localhost:12900/api?pretty=true#top"),
            Ok("http://localhost:12900/api".to_string())
        );
    }

    #[test]
    fn test_explicit_default_port_survives() {
        assert_eq!(
            normalize_base_url("http://graylog.example.com:80"),
            Ok("http://graylog.example.com:80".to_string())
        );
    }

    #[test]
    fn test_ipv6_host() {
        assert_eq!(
            normalize_base_url("http://[::1]:12900"),
            Ok("http://[::1]:12900".to_string())
        );
    }

    #[test]
    fn test_missing_port() {
        assert_eq!(
            normalize_base_url("http://localhost"),
            Err(UrlError::MissingPort("http".to_string()))
        );
    }

    #[test]
    fn test_missing_port_message_names_the_scheme() {
        let err = normalize_base_url("https://localhost").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Port number is missing. Please try https://hostname:port"
        );
    }

    #[test]
    fn test_non_http_scheme() {
        assert_eq!(
            normalize_base_url("ftp://localhost:21"),
            Err(UrlError::UnsupportedScheme)
        );
    }

    #[test]
    fn test_unparsable() {
        assert_eq!(normalize_base_url("::not a url::"), Err(UrlError::Invalid));
    }
}
