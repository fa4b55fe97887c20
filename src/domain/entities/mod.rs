//! Core domain entities of the durable link service.
//!
//! Entities are plain data structures; behavior lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`LinkDescription`] - Structured durable link payload (request schema)
//! - [`ShortLinkRecord`] - A persisted `(host, path)` mapping
//! - [`Warning`] - Informational annotation on a successful creation
//!
//! `NewShortLink` is the insert-side counterpart of `ShortLinkRecord`.

pub mod link_description;
pub mod short_link;
pub mod warning;

pub use link_description::{
    AnalyticsInfo, AndroidParameters, DurableLinkRequest, IosParameters, ItunesConnectAnalytics,
    LinkDescription, MarketingParameters, OtherPlatformParameters, SocialMetaTagInfo, Suffix,
    SuffixOption,
};
pub use short_link::{LinkCounts, NewShortLink, ShortLinkRecord};
pub use warning::{Warning, WarningCode};
