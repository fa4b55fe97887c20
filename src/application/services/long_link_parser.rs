//! Long link to link description parsing.
//!
//! Inverse of [`super::canonicalizer::canonicalize`]: both directions go through the
//! same [`ParamKey`] table.

use url::Url;

use crate::config::LinkSettings;
use crate::domain::entities::{DurableLinkRequest, LinkDescription, SuffixOption};
use crate::domain::errors::LinkError;
use crate::domain::query_encoding::ParamKey;
use crate::utils::url_parts::{authority, first_query_values};

/// Query key carrying the requested suffix option on a long link.
const SUFFIX_KEY: &str = "path";

/// Parses long-form durable links, applying configured platform defaults.
#[derive(Debug, Clone, Default)]
pub struct LongLinkParser {
    default_android_package_name: Option<String>,
    default_ios_store_id: Option<String>,
}

impl LongLinkParser {
    pub fn new(settings: &LinkSettings) -> Self {
        Self {
            default_android_package_name: settings.default_android_package_name.clone(),
            default_ios_store_id: settings.default_ios_store_id.clone(),
        }
    }

    /// Parses a long link such as
    /// `https://x.link/?link=https://example.com&apn=com.example&path=SHORT`.
    ///
    /// - `host` is the authority of the long link.
    /// - `link` is taken as-is (possibly empty); it is validated later.
    /// - Configured default Android package and iOS store ID are applied first and
    ///   overwritten by non-empty `apn` / `isi`.
    /// - Every other field comes from its key when present and non-empty.
    /// - The `path` key selects the suffix option.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidUrlFormat`] if the link cannot be parsed.
    /// Returns [`LinkError::HostInvalid`] if the link has no host.
    pub fn parse(&self, long_link: &str) -> Result<DurableLinkRequest, LinkError> {
        let url = Url::parse(long_link.trim()).map_err(|_| LinkError::InvalidUrlFormat)?;
        let host = authority(&url).ok_or(LinkError::HostInvalid)?;
        let values = first_query_values(&url);

        let mut info = LinkDescription::new(
            host,
            values
                .get(ParamKey::Link.as_str())
                .cloned()
                .unwrap_or_default(),
        );

        if let Some(ref apn) = self.default_android_package_name {
            info.android_parameters.android_package_name = apn.clone();
        }
        if let Some(ref isi) = self.default_ios_store_id {
            info.ios_parameters.ios_app_store_id = isi.clone();
        }

        for key in ParamKey::ALL {
            if key == ParamKey::Link {
                continue;
            }
            if let Some(value) = values.get(key.as_str()).filter(|v| !v.is_empty()) {
                *info.field_mut(key) = value.clone();
            }
        }

        let mut request = DurableLinkRequest {
            durable_link_info: info,
            ..Default::default()
        };
        if let Some(option) = values.get(SUFFIX_KEY).filter(|v| !v.is_empty()) {
            request.suffix.option = SuffixOption::from(option.as_str());
        }

        tracing::debug!(
            host = %request.durable_link_info.host,
            link = %request.durable_link_info.link,
            suffix = request.suffix.option.as_str(),
            "Parsed long durable link"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::canonicalizer::canonicalize;

    fn parser_with_defaults() -> LongLinkParser {
        LongLinkParser::new(&LinkSettings {
            default_android_package_name: Some("com.default.app".to_string()),
            default_ios_store_id: Some("111".to_string()),
            ..LinkSettings::default()
        })
    }

    #[test]
    fn test_parse_minimal() {
        let request = LongLinkParser::default()
            .parse("https://x.link/?link=https%3A%2F%2Fexample.com")
            .unwrap();

        assert_eq!(
            request.durable_link_info,
            LinkDescription::new("x.link", "https://example.com")
        );
        assert_eq!(request.suffix.option, SuffixOption::Unspecified);
    }

    #[test]
    fn test_parse_all_fields() {
        let request = LongLinkParser::default()
            .parse(
                "https://x.link/?link=https://example.com&apn=com.example&afl=https://a.example&amv=12\
                 &ifl=https://i.example&ipfl=https://ipad.example&isi=123&ofl=https://o.example\
                 &st=Title&sd=Some+text&si=https://img.example/a.png&utm_source=s&utm_medium=m\
                 &utm_campaign=c&utm_term=t&utm_content=co&at=1&ct=2&mt=8&pt=9&path=SHORT",
            )
            .unwrap();

        let info = &request.durable_link_info;
        assert_eq!(info.android_parameters.android_package_name, "com.example");
        assert_eq!(info.android_parameters.android_min_package_version_code, "12");
        assert_eq!(info.ios_parameters.ios_ipad_fallback_link, "https://ipad.example");
        assert_eq!(info.ios_parameters.ios_app_store_id, "123");
        assert_eq!(info.other_platform_parameters.fallback_url, "https://o.example");
        assert_eq!(info.social_meta_tag_info.social_description, "Some text");
        assert_eq!(info.analytics_info.marketing_parameters.utm_content, "co");
        assert_eq!(info.analytics_info.itunes_connect_analytics.mt, "8");
        assert_eq!(info.analytics_info.itunes_connect_analytics.pt, "9");
        assert_eq!(request.suffix.option, SuffixOption::Short);
    }

    #[test]
    fn test_parse_applies_defaults() {
        let request = parser_with_defaults()
            .parse("https://x.link/?link=https://example.com")
            .unwrap();

        let info = &request.durable_link_info;
        assert_eq!(info.android_parameters.android_package_name, "com.default.app");
        assert_eq!(info.ios_parameters.ios_app_store_id, "111");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let request = parser_with_defaults()
            .parse("https://x.link/?link=https://example.com&apn=com.other&isi=222")
            .unwrap();

        let info = &request.durable_link_info;
        assert_eq!(info.android_parameters.android_package_name, "com.other");
        assert_eq!(info.ios_parameters.ios_app_store_id, "222");
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let request = parser_with_defaults()
            .parse("https://x.link/?link=https://example.com&apn=&isi=")
            .unwrap();

        let info = &request.durable_link_info;
        assert_eq!(info.android_parameters.android_package_name, "com.default.app");
        assert_eq!(info.ios_parameters.ios_app_store_id, "111");
    }

    #[test]
    fn test_missing_link_is_empty() {
        let request = LongLinkParser::default().parse("https://x.link/").unwrap();
        assert_eq!(request.durable_link_info.link, "");
    }

    #[test]
    fn test_host_keeps_port() {
        let request = LongLinkParser::default()
            .parse("http://localhost:9010/?link=https://example.com")
            .unwrap();
        assert_eq!(request.durable_link_info.host, "localhost:9010");
    }

    #[test]
    fn test_unknown_suffix_is_unspecified() {
        let request = LongLinkParser::default()
            .parse("https://x.link/?link=https://example.com&path=LONG")
            .unwrap();
        assert_eq!(request.suffix.option, SuffixOption::Unspecified);
    }

    #[test]
    fn test_parse_invalid_url() {
        let result = LongLinkParser::default().parse("not a url");
        assert!(matches!(result, Err(LinkError::InvalidUrlFormat)));
    }

    #[test]
    fn test_parse_missing_host() {
        let result = LongLinkParser::default().parse("mailto:someone@example.com");
        assert!(matches!(result, Err(LinkError::HostInvalid)));
    }

    #[test]
    fn test_round_trip_with_platform_block() {
        let mut info = LinkDescription::new("x.link", "https://example.com/a?b=c");
        info.ios_parameters.ios_app_store_id = "123456".to_string();
        info.ios_parameters.ios_fallback_link = "https://example.com/ios".to_string();

        let (query, _) = canonicalize(&info);
        let long_link = format!("https://x.link/?{}", query.encode());

        let parsed = LongLinkParser::default().parse(&long_link).unwrap();
        assert_eq!(parsed.durable_link_info, info);
    }
}
