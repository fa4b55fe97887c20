//! Structured description of a durable link.
//!
//! This is the single request schema for link creation: every field is optional at the
//! binding stage (missing keys and JSON `null` both decode to the empty string), and the
//! two required fields are checked explicitly afterwards by
//! [`crate::application::services::LinkService::prepare_request`].

use crate::domain::query_encoding::ParamKey;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Requested path style for a new short link.
///
/// Only [`SuffixOption::Short`] produces a short, reusable path. Every other value,
/// including unknown strings, produces a long unguessable path that is always freshly
/// minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuffixOption {
    Short,
    Unguessable,
    #[default]
    Unspecified,
}

impl SuffixOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Unguessable => "UNGUESSABLE",
            Self::Unspecified => "",
        }
    }

    /// Whether the allocated path must be unguessable (and therefore never reused).
    pub fn is_unguessable(&self) -> bool {
        !matches!(self, Self::Short)
    }
}

impl From<&str> for SuffixOption {
    fn from(value: &str) -> Self {
        match value {
            "SHORT" => Self::Short,
            "UNGUESSABLE" => Self::Unguessable,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for SuffixOption {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SuffixOption> for String {
    fn from(value: SuffixOption) -> Self {
        value.as_str().to_string()
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suffix {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub option: SuffixOption,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AndroidParameters {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub android_package_name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub android_fallback_link: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub android_min_package_version_code: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IosParameters {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ios_fallback_link: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ios_ipad_fallback_link: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ios_app_store_id: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherPlatformParameters {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub fallback_url: String,
}

/// Preview metadata used when the link is shared on social platforms.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialMetaTagInfo {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub social_title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub social_description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub social_image_link: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketingParameters {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub utm_source: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub utm_medium: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub utm_campaign: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub utm_term: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub utm_content: String,
}

/// iTunes Connect campaign parameters.
///
/// `at`, `ct` and `mt` are only meaningful together with `pt`, and all four only with an
/// App Store ID.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItunesConnectAnalytics {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub at: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ct: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub mt: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pt: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsInfo {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub marketing_parameters: MarketingParameters,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub itunes_connect_analytics: ItunesConnectAnalytics,
}

/// A durable link: destination plus optional platform, social and analytics data.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkDescription {
    /// Authority of the short link (no scheme, no path).
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub host: String,
    /// Destination URL.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub link: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub android_parameters: AndroidParameters,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub ios_parameters: IosParameters,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub other_platform_parameters: OtherPlatformParameters,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub social_meta_tag_info: SocialMetaTagInfo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub analytics_info: AnalyticsInfo,
}

impl LinkDescription {
    /// Creates a description with only the two required fields set.
    pub fn new(host: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            link: link.into(),
            ..Self::default()
        }
    }

    /// Field stored under a query key.
    pub fn field(&self, key: ParamKey) -> &str {
        match key {
            ParamKey::Link => &self.link,
            ParamKey::AndroidPackageName => &self.android_parameters.android_package_name,
            ParamKey::AndroidFallbackLink => &self.android_parameters.android_fallback_link,
            ParamKey::AndroidMinVersionCode => {
                &self.android_parameters.android_min_package_version_code
            }
            ParamKey::IosFallbackLink => &self.ios_parameters.ios_fallback_link,
            ParamKey::IosIpadFallbackLink => &self.ios_parameters.ios_ipad_fallback_link,
            ParamKey::IosAppStoreId => &self.ios_parameters.ios_app_store_id,
            ParamKey::OtherFallbackUrl => &self.other_platform_parameters.fallback_url,
            ParamKey::SocialTitle => &self.social_meta_tag_info.social_title,
            ParamKey::SocialDescription => &self.social_meta_tag_info.social_description,
            ParamKey::SocialImageLink => &self.social_meta_tag_info.social_image_link,
            ParamKey::UtmSource => &self.analytics_info.marketing_parameters.utm_source,
            ParamKey::UtmMedium => &self.analytics_info.marketing_parameters.utm_medium,
            ParamKey::UtmCampaign => &self.analytics_info.marketing_parameters.utm_campaign,
            ParamKey::UtmTerm => &self.analytics_info.marketing_parameters.utm_term,
            ParamKey::UtmContent => &self.analytics_info.marketing_parameters.utm_content,
            ParamKey::ItunesAffiliateToken => &self.analytics_info.itunes_connect_analytics.at,
            ParamKey::ItunesCampaignToken => &self.analytics_info.itunes_connect_analytics.ct,
            ParamKey::ItunesMediaType => &self.analytics_info.itunes_connect_analytics.mt,
            ParamKey::ItunesProviderToken => &self.analytics_info.itunes_connect_analytics.pt,
        }
    }

    /// Mutable access to the field stored under a query key.
    pub fn field_mut(&mut self, key: ParamKey) -> &mut String {
        let android = &mut self.android_parameters;
        let ios = &mut self.ios_parameters;
        let social = &mut self.social_meta_tag_info;
        let marketing = &mut self.analytics_info.marketing_parameters;
        let itunes = &mut self.analytics_info.itunes_connect_analytics;

        match key {
            ParamKey::Link => &mut self.link,
            ParamKey::AndroidPackageName => &mut android.android_package_name,
            ParamKey::AndroidFallbackLink => &mut android.android_fallback_link,
            ParamKey::AndroidMinVersionCode => &mut android.android_min_package_version_code,
            ParamKey::IosFallbackLink => &mut ios.ios_fallback_link,
            ParamKey::IosIpadFallbackLink => &mut ios.ios_ipad_fallback_link,
            ParamKey::IosAppStoreId => &mut ios.ios_app_store_id,
            ParamKey::OtherFallbackUrl => &mut self.other_platform_parameters.fallback_url,
            ParamKey::SocialTitle => &mut social.social_title,
            ParamKey::SocialDescription => &mut social.social_description,
            ParamKey::SocialImageLink => &mut social.social_image_link,
            ParamKey::UtmSource => &mut marketing.utm_source,
            ParamKey::UtmMedium => &mut marketing.utm_medium,
            ParamKey::UtmCampaign => &mut marketing.utm_campaign,
            ParamKey::UtmTerm => &mut marketing.utm_term,
            ParamKey::UtmContent => &mut marketing.utm_content,
            ParamKey::ItunesAffiliateToken => &mut itunes.at,
            ParamKey::ItunesCampaignToken => &mut itunes.ct,
            ParamKey::ItunesMediaType => &mut itunes.mt,
            ParamKey::ItunesProviderToken => &mut itunes.pt,
        }
    }
}

/// A link creation request: the description plus the requested path style.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DurableLinkRequest {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub durable_link_info: LinkDescription,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub suffix: Suffix,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_suffix_option_from_str() {
        assert_eq!(SuffixOption::from("SHORT"), SuffixOption::Short);
        assert_eq!(SuffixOption::from("UNGUESSABLE"), SuffixOption::Unguessable);
        assert_eq!(SuffixOption::from("short"), SuffixOption::Unspecified);
        assert_eq!(SuffixOption::from(""), SuffixOption::Unspecified);
    }

    #[test]
    fn test_only_short_is_guessable() {
        assert!(!SuffixOption::Short.is_unguessable());
        assert!(SuffixOption::Unguessable.is_unguessable());
        assert!(SuffixOption::Unspecified.is_unguessable());
    }

    #[test]
    fn test_deserialize_full_request() {
        let request: DurableLinkRequest = serde_json::from_value(json!({
            "durableLinkInfo": {
                "host": "x.link",
                "link": "https://example.com",
                "androidParameters": { "androidPackageName": "com.example.app" },
                "iosParameters": { "iosAppStoreId": "123456" },
                "analyticsInfo": {
                    "itunesConnectAnalytics": { "at": "token", "pt": "42" }
                }
            },
            "suffix": { "option": "SHORT" }
        }))
        .unwrap();

        let info = &request.durable_link_info;
        assert_eq!(info.host, "x.link");
        assert_eq!(info.android_parameters.android_package_name, "com.example.app");
        assert_eq!(info.ios_parameters.ios_app_store_id, "123456");
        assert_eq!(info.analytics_info.itunes_connect_analytics.at, "token");
        assert_eq!(info.analytics_info.itunes_connect_analytics.pt, "42");
        assert_eq!(request.suffix.option, SuffixOption::Short);
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let request: DurableLinkRequest = serde_json::from_value(json!({
            "durableLinkInfo": {
                "host": null,
                "link": "https://example.com",
                "socialMetaTagInfo": null
            },
            "suffix": { "option": null }
        }))
        .unwrap();

        assert_eq!(request.durable_link_info.host, "");
        assert_eq!(
            request.durable_link_info.social_meta_tag_info,
            SocialMetaTagInfo::default()
        );
        assert_eq!(request.suffix.option, SuffixOption::Unspecified);
    }

    #[test]
    fn test_field_mut_round_trips_every_key() {
        let mut info = LinkDescription::default();
        for key in ParamKey::ALL {
            *info.field_mut(key) = format!("value-{}", key.as_str());
        }
        for key in ParamKey::ALL {
            assert_eq!(info.field(key), format!("value-{}", key.as_str()));
        }
        assert_eq!(info.analytics_info.itunes_connect_analytics.ct, "value-ct");
        assert_eq!(info.other_platform_parameters.fallback_url, "value-ofl");
    }

    #[test]
    fn test_deserialize_empty_object() {
        let request: DurableLinkRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, DurableLinkRequest::default());
    }
}
