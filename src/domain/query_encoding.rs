//! Query parameter key table and canonical query encoding.
//!
//! [`ParamKey`] is the single key table shared by the canonicalizer (description to
//! query) and the long link parser (query to description). [`QueryEncoding`] keeps its
//! pairs sorted by key bytes, so the serialized form does not depend on insertion order
//! and can be used as the reuse lookup key.

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Short query keys of a durable link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Link,
    AndroidPackageName,
    AndroidFallbackLink,
    AndroidMinVersionCode,
    IosFallbackLink,
    IosIpadFallbackLink,
    IosAppStoreId,
    OtherFallbackUrl,
    SocialTitle,
    SocialDescription,
    SocialImageLink,
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmTerm,
    UtmContent,
    ItunesAffiliateToken,
    ItunesCampaignToken,
    ItunesMediaType,
    ItunesProviderToken,
}

impl ParamKey {
    pub const ALL: [ParamKey; 20] = [
        Self::Link,
        Self::AndroidPackageName,
        Self::AndroidFallbackLink,
        Self::AndroidMinVersionCode,
        Self::IosFallbackLink,
        Self::IosIpadFallbackLink,
        Self::IosAppStoreId,
        Self::OtherFallbackUrl,
        Self::SocialTitle,
        Self::SocialDescription,
        Self::SocialImageLink,
        Self::UtmSource,
        Self::UtmMedium,
        Self::UtmCampaign,
        Self::UtmTerm,
        Self::UtmContent,
        Self::ItunesAffiliateToken,
        Self::ItunesCampaignToken,
        Self::ItunesMediaType,
        Self::ItunesProviderToken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::AndroidPackageName => "apn",
            Self::AndroidFallbackLink => "afl",
            Self::AndroidMinVersionCode => "amv",
            Self::IosFallbackLink => "ifl",
            Self::IosIpadFallbackLink => "ipfl",
            Self::IosAppStoreId => "isi",
            Self::OtherFallbackUrl => "ofl",
            Self::SocialTitle => "st",
            Self::SocialDescription => "sd",
            Self::SocialImageLink => "si",
            Self::UtmSource => "utm_source",
            Self::UtmMedium => "utm_medium",
            Self::UtmCampaign => "utm_campaign",
            Self::UtmTerm => "utm_term",
            Self::UtmContent => "utm_content",
            Self::ItunesAffiliateToken => "at",
            Self::ItunesCampaignToken => "ct",
            Self::ItunesMediaType => "mt",
            Self::ItunesProviderToken => "pt",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Ordered set of query parameters derived from a link description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryEncoding {
    params: BTreeMap<&'static str, String>,
}

impl QueryEncoding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` unconditionally, replacing any previous value.
    pub fn insert(&mut self, key: ParamKey, value: impl Into<String>) {
        self.params.insert(key.as_str(), value.into());
    }

    /// Sets `key` only when `value` is non-empty.
    pub fn insert_non_empty(&mut self, key: ParamKey, value: &str) {
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.params.get(key.as_str()).map(String::as_str)
    }

    pub fn contains(&self, key: ParamKey) -> bool {
        self.params.contains_key(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Pairs in canonical (key byte) order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Canonical `application/x-www-form-urlencoded` serialization, sorted by key.
    ///
    /// This string is both what gets persisted and the reuse lookup key.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
