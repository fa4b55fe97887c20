//! Link description to query parameter mapping.
//!
//! Produces the [`QueryEncoding`] stored for a link plus the warnings describing
//! parameter combinations that will have no effect. Warnings never change what gets
//! encoded.

use crate::domain::entities::{LinkDescription, Warning};
use crate::domain::query_encoding::{ParamKey, QueryEncoding};
use crate::utils::validation::is_url;

/// Maps a validated description to its query parameters and consistency warnings.
///
/// `link` is always included; every other field is included under its key only when
/// non-empty, with the value passed through unchanged.
///
/// # Warnings
///
/// - `MALFORMED_PARAM` for a non-empty `si` that is not a URL.
/// - `UNRECOGNIZED_PARAM` for each of `at`, `ct`, `mt`, `pt` set without `isi`.
/// - `UNRECOGNIZED_PARAM` for each of `at`, `ct`, `mt` set without `pt`.
///
/// The two dependency checks are independent, so `at` is reported twice when both
/// `isi` and `pt` are missing.
pub fn canonicalize(info: &LinkDescription) -> (QueryEncoding, Vec<Warning>) {
    let ios = &info.ios_parameters;
    let social = &info.social_meta_tag_info;
    let itunes = &info.analytics_info.itunes_connect_analytics;

    let mut query = QueryEncoding::new();
    for key in ParamKey::ALL {
        match key {
            ParamKey::Link => query.insert(key, info.field(key)),
            _ => query.insert_non_empty(key, info.field(key)),
        }
    }

    let mut warnings = Vec::new();

    if !social.social_image_link.is_empty() && !is_url(&social.social_image_link) {
        warnings.push(Warning::malformed(ParamKey::SocialImageLink.as_str()));
    }

    let isi = ParamKey::IosAppStoreId.as_str();
    let pt = ParamKey::ItunesProviderToken.as_str();

    if ios.ios_app_store_id.is_empty() {
        for (key, value) in [
            (ParamKey::ItunesAffiliateToken, &itunes.at),
            (ParamKey::ItunesCampaignToken, &itunes.ct),
            (ParamKey::ItunesMediaType, &itunes.mt),
            (ParamKey::ItunesProviderToken, &itunes.pt),
        ] {
            if !value.is_empty() {
                warnings.push(Warning::unrecognized(key.as_str(), isi));
            }
        }
    }

    if itunes.pt.is_empty() {
        for (key, value) in [
            (ParamKey::ItunesAffiliateToken, &itunes.at),
            (ParamKey::ItunesCampaignToken, &itunes.ct),
            (ParamKey::ItunesMediaType, &itunes.mt),
        ] {
            if !value.is_empty() {
                warnings.push(Warning::unrecognized(key.as_str(), pt));
            }
        }
    }

    (query, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WarningCode;

    fn base() -> LinkDescription {
        LinkDescription::new("x.link", "https://example.com")
    }

    fn unrecognized_for<'a>(warnings: &'a [Warning], param: &str) -> Vec<&'a Warning> {
        let prefix = format!("Param '{param}'");
        warnings
            .iter()
            .filter(|w| w.code == WarningCode::UnrecognizedParam && w.message.starts_with(&prefix))
            .collect()
    }

    #[test]
    fn test_minimal_description() {
        let (query, warnings) = canonicalize(&base());
        assert_eq!(query.encode(), "link=https%3A%2F%2Fexample.com");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_link_is_always_included() {
        let info = LinkDescription::new("x.link", "");
        let (query, _) = canonicalize(&info);
        assert_eq!(query.get(ParamKey::Link), Some(""));
    }

    #[test]
    fn test_optional_fields_map_to_keys() {
        let mut info = base();
        info.android_parameters.android_package_name = "com.example.app".to_string();
        info.android_parameters.android_min_package_version_code = "42".to_string();
        info.ios_parameters.ios_ipad_fallback_link = "https://example.com/ipad".to_string();
        info.other_platform_parameters.fallback_url = "https://example.com/web".to_string();
        info.social_meta_tag_info.social_title = "Title".to_string();
        info.analytics_info.marketing_parameters.utm_campaign = "spring".to_string();

        let (query, warnings) = canonicalize(&info);

        assert_eq!(query.len(), 7);
        assert_eq!(query.get(ParamKey::AndroidPackageName), Some("com.example.app"));
        assert_eq!(query.get(ParamKey::AndroidMinVersionCode), Some("42"));
        assert_eq!(
            query.get(ParamKey::IosIpadFallbackLink),
            Some("https://example.com/ipad")
        );
        assert_eq!(query.get(ParamKey::OtherFallbackUrl), Some("https://example.com/web"));
        assert_eq!(query.get(ParamKey::SocialTitle), Some("Title"));
        assert_eq!(query.get(ParamKey::UtmCampaign), Some("spring"));
        assert!(!query.contains(ParamKey::AndroidFallbackLink));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_malformed_social_image_still_encoded() {
        let mut info = base();
        info.social_meta_tag_info.social_image_link = "not-a-url".to_string();

        let (query, warnings) = canonicalize(&info);

        assert_eq!(query.get(ParamKey::SocialImageLink), Some("not-a-url"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::MalformedParam);
        assert_eq!(warnings[0].message, "Param 'si' is not a valid URL");
    }

    #[test]
    fn test_valid_social_image_no_warning() {
        let mut info = base();
        info.social_meta_tag_info.social_image_link = "https://cdn.example.com/a.png".to_string();

        let (_, warnings) = canonicalize(&info);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_at_without_isi_and_pt_warns_twice() {
        let mut info = base();
        info.analytics_info.itunes_connect_analytics.at = "x".to_string();

        let (query, warnings) = canonicalize(&info);

        assert_eq!(query.get(ParamKey::ItunesAffiliateToken), Some("x"));
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0].message,
            "Param 'at' is not needed, since 'isi' is not specified."
        );
        assert_eq!(
            warnings[1].message,
            "Param 'at' is not needed, since 'pt' is not specified."
        );
    }

    #[test]
    fn test_at_and_pt_without_isi() {
        let mut info = base();
        info.analytics_info.itunes_connect_analytics.at = "x".to_string();
        info.analytics_info.itunes_connect_analytics.pt = "y".to_string();

        let (_, warnings) = canonicalize(&info);

        assert_eq!(warnings.len(), 2);
        assert_eq!(unrecognized_for(&warnings, "at").len(), 1);
        assert_eq!(unrecognized_for(&warnings, "pt").len(), 1);
        assert!(warnings.iter().all(|w| w.message.ends_with("'isi' is not specified.")));
    }

    #[test]
    fn test_at_with_isi_but_without_pt() {
        let mut info = base();
        info.ios_parameters.ios_app_store_id = "123456".to_string();
        info.analytics_info.itunes_connect_analytics.at = "x".to_string();
        info.analytics_info.itunes_connect_analytics.mt = "8".to_string();

        let (_, warnings) = canonicalize(&info);

        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0].message,
            "Param 'at' is not needed, since 'pt' is not specified."
        );
        assert_eq!(
            warnings[1].message,
            "Param 'mt' is not needed, since 'pt' is not specified."
        );
    }

    #[test]
    fn test_complete_itunes_analytics_no_warnings() {
        let mut info = base();
        info.ios_parameters.ios_app_store_id = "123456".to_string();
        let itunes = &mut info.analytics_info.itunes_connect_analytics;
        itunes.at = "a".to_string();
        itunes.ct = "c".to_string();
        itunes.mt = "8".to_string();
        itunes.pt = "p".to_string();

        let (query, warnings) = canonicalize(&info);

        assert!(warnings.is_empty());
        assert_eq!(query.encode(), "at=a&ct=c&isi=123456&link=https%3A%2F%2Fexample.com&mt=8&pt=p");
    }

    #[test]
    fn test_all_dependency_warnings() {
        let mut info = base();
        info.social_meta_tag_info.social_image_link = "bad".to_string();
        let itunes = &mut info.analytics_info.itunes_connect_analytics;
        itunes.at = "a".to_string();
        itunes.ct = "c".to_string();
        itunes.mt = "8".to_string();

        let (_, warnings) = canonicalize(&info);

        // si, then at/ct/mt for isi, then at/ct/mt for pt
        assert_eq!(warnings.len(), 7);
        assert_eq!(warnings[0].code, WarningCode::MalformedParam);
        assert_eq!(unrecognized_for(&warnings, "at").len(), 2);
        assert_eq!(unrecognized_for(&warnings, "ct").len(), 2);
        assert_eq!(unrecognized_for(&warnings, "mt").len(), 2);
    }
}
