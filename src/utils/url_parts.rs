//! Helpers for pulling pieces out of parsed URLs.

use std::collections::HashMap;
use url::Url;

/// Returns `host[:port]` of a parsed URL, or `None` when the host is missing or empty.
///
/// The port is only present when it differs from the scheme default, matching how
/// [`Url`] normalizes it.
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?;

    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Decodes the query string into a map holding the first value of every key.
pub fn first_query_values(url: &Url) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for (key, value) in url.query_pairs() {
        values
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_without_port() {
        let url = Url::parse("https://X.link/abc").unwrap();
        assert_eq!(authority(&url).as_deref(), Some("x.link"));
    }

    #[test]
    fn test_authority_with_port() {
        let url = Url::parse("http://localhost:9010/abc").unwrap();
        assert_eq!(authority(&url).as_deref(), Some("localhost:9010"));

        let url = Url::parse("https://x.link:443/abc").unwrap();
        assert_eq!(authority(&url).as_deref(), Some("x.link"));
    }

    #[test]
    fn test_authority_missing_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert!(authority(&url).is_none());
    }

    #[test]
    fn test_first_query_values() {
        let url = Url::parse("https://x.link/?link=a&st=hello+world&link=b&sd=%26").unwrap();
        let values = first_query_values(&url);
        assert_eq!(values["link"], "a");
        assert_eq!(values["st"], "hello world");
        assert_eq!(values["sd"], "&");
    }
}
