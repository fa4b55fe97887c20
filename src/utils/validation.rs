//! Host, URL and identifier validation.
//!
//! Pure predicates used by link creation. None of them perform I/O.

use crate::domain::errors::LinkError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// DNS name or IPv4 address with an optional port, or a bracketed IPv6 literal.
static HOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*|\[[0-9a-f:.]+\])(?::[0-9]{1,5})?$",
    )
    .unwrap()
});

/// Reduces user input to a bare authority (`host[:port]`).
///
/// Strips a leading `scheme://`, anything from the first `/`, `?` or `#` on, and
/// surrounding whitespace; the result is lowercased.
///
/// # Errors
///
/// Returns [`LinkError::InvalidHost`] if nothing is left or the remainder is not a
/// valid host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_host("https://X.link/abc").unwrap(), "x.link");
/// assert_eq!(clean_host("x.link:8080").unwrap(), "x.link:8080");
/// assert!(clean_host("https://").is_err());
/// ```
pub fn clean_host(raw: &str) -> Result<String, LinkError> {
    let mut host = raw.trim();

    if let Some(idx) = host.find("://") {
        host = &host[idx + 3..];
    }

    if let Some(end) = host.find(['/', '?', '#']) {
        host = &host[..end];
    }

    let host = host.to_ascii_lowercase();

    if host.is_empty() {
        return Err(LinkError::InvalidHost("host is empty".to_string()));
    }

    if !HOST_REGEX.is_match(&host) {
        return Err(LinkError::InvalidHost(host));
    }

    Ok(host)
}

/// Checks the host of `target_link` against the allow-list.
///
/// # Policy
///
/// - The link host must equal an entry or be a subdomain of it
///   (`app.example.com` matches `example.com`; `badexample.com` does not).
/// - Comparison is case-insensitive. A leading `*.` or `.` on an entry is ignored.
/// - An empty allow-list rejects every link.
/// - A link that cannot be parsed, or has no host, is rejected.
pub fn is_domain_allowed(allow_list: &[String], target_link: &str) -> bool {
    let Ok(url) = Url::parse(target_link) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();

    allow_list.iter().any(|entry| {
        let entry = entry.trim().to_ascii_lowercase();
        let entry = entry
            .strip_prefix("*.")
            .or_else(|| entry.strip_prefix('.'))
            .unwrap_or(&entry);

        !entry.is_empty()
            && (host == entry
                || host
                    .strip_suffix(entry)
                    .is_some_and(|prefix| prefix.ends_with('.')))
    })
}

/// Returns true for a non-empty string of ASCII digits.
pub fn is_numeric_string(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `value` is an absolute `http`/`https` URL with a host.
pub fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

/// Ensures a target link is an absolute URL using an allowed scheme.
///
/// # Errors
///
/// Returns [`LinkError::InvalidUrlFormat`] if the link cannot be parsed.
/// Returns [`LinkError::InvalidUrlScheme`] for any scheme other than `http`/`https`.
pub fn validate_url_scheme(link: &str) -> Result<(), LinkError> {
    let url = Url::parse(link).map_err(|_| LinkError::InvalidUrlFormat)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(LinkError::InvalidUrlScheme(other.to_string())),
    }
}
