//! Durable link creation and resolution service.

use std::sync::Arc;

use serde_json::Value;

use crate::config::LinkSettings;
use crate::domain::entities::{DurableLinkRequest, Warning};
use crate::domain::errors::LinkError;
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::cache::CacheService;
use crate::utils::validation::{
    clean_host, is_domain_allowed, is_numeric_string, validate_url_scheme,
};

use super::allocator::ShortLinkAllocator;
use super::canonicalizer::canonicalize;
use super::long_link_parser::LongLinkParser;
use super::resolver::ShortLinkResolver;

/// Body key selecting the long-link form of a create request.
const LONG_LINK_KEY: &str = "longDurableLink";

/// Result of [`LinkService::create_durable_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedShortLink {
    pub short_link: String,
    pub warnings: Vec<Warning>,
}

/// Entry point for the durable link core.
///
/// Wires request decoding, validation, canonicalization, path allocation and
/// resolution over a single repository and cache.
pub struct LinkService<R: ShortLinkRepository + ?Sized> {
    settings: LinkSettings,
    parser: LongLinkParser,
    allocator: ShortLinkAllocator<R>,
    resolver: ShortLinkResolver<R>,
}

impl<R: ShortLinkRepository + ?Sized> LinkService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, settings: LinkSettings) -> Self {
        Self {
            parser: LongLinkParser::new(&settings),
            allocator: ShortLinkAllocator::new(repository.clone(), settings.clone()),
            resolver: ShortLinkResolver::new(repository, cache, settings.clone()),
            settings,
        }
    }

    /// Decodes a create request body into a finalized [`DurableLinkRequest`].
    ///
    /// A body carrying a non-empty `longDurableLink` string is parsed as a long link.
    /// Any other body is bound to the structured `durableLinkInfo` + `suffix` shape. Either way the
    /// result must then carry a host and an http(s) link.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidFormat`] if the body cannot be bound
    /// - [`LinkError::InvalidUrlFormat`] / [`LinkError::HostInvalid`] from long-link parsing
    /// - [`LinkError::MissingHost`] / [`LinkError::MissingLink`] for absent required fields
    /// - [`LinkError::InvalidUrlFormat`] for a link with surrounding whitespace
    /// - [`LinkError::InvalidUrlScheme`] for a non-http(s) link
    pub fn prepare_request(&self, body: Value) -> Result<DurableLinkRequest, LinkError> {
        let request = match body.get(LONG_LINK_KEY) {
            Some(Value::String(long_link)) if !long_link.is_empty() => {
                self.parse_long_link(long_link)?
            }
            _ => serde_json::from_value::<DurableLinkRequest>(body)
                .map_err(|e| LinkError::InvalidFormat(e.to_string()))?,
        };

        let info = &request.durable_link_info;
        if info.host.trim().is_empty() {
            return Err(LinkError::MissingHost);
        }
        if info.link.trim().is_empty() {
            return Err(LinkError::MissingLink);
        }
        if info.link.trim() != info.link {
            return Err(LinkError::InvalidUrlFormat);
        }
        validate_url_scheme(&info.link)?;

        Ok(request)
    }

    /// Parses a long durable link into a request, applying configured defaults.
    ///
    /// # Errors
    ///
    /// See [`LongLinkParser::parse`].
    pub fn parse_long_link(&self, long_link: &str) -> Result<DurableLinkRequest, LinkError> {
        self.parser.parse(long_link)
    }

    /// Creates (or reuses) a short link for a prepared request.
    ///
    /// Checks run in order: host cleaning, allow-list, numeric iOS store ID. Warnings
    /// from canonicalization are returned alongside the short link and never fail
    /// the request.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidHost`] if the host is not a valid authority
    /// - [`LinkError::DomainNotAllowed`] if the target link's domain is not allowed
    /// - [`LinkError::InvalidAppStoreId`] if `isi` is set and not numeric
    /// - [`LinkError::Storage`] / [`LinkError::Timeout`] on persistence failures
    pub async fn create_durable_link(
        &self,
        request: DurableLinkRequest,
    ) -> Result<CreatedShortLink, LinkError> {
        let DurableLinkRequest {
            mut durable_link_info,
            suffix,
        } = request;

        let host = clean_host(&durable_link_info.host)?;
        durable_link_info.host = host.clone();

        if !is_domain_allowed(&self.settings.allowed_domains, &durable_link_info.link) {
            tracing::debug!(link = %durable_link_info.link, "Rejected link outside allow list");
            return Err(LinkError::DomainNotAllowed(durable_link_info.link));
        }

        let isi = &durable_link_info.ios_parameters.ios_app_store_id;
        if !isi.is_empty() && !is_numeric_string(isi) {
            return Err(LinkError::InvalidAppStoreId);
        }

        let (query, warnings) = canonicalize(&durable_link_info);
        let short_link = self
            .allocator
            .create_or_get(&host, &query, suffix.option)
            .await?;

        tracing::debug!(
            short_link = %short_link,
            warnings = warnings.len(),
            "Created durable link"
        );

        Ok(CreatedShortLink {
            short_link,
            warnings,
        })
    }

    /// Expands a short (or preview) link back into its long form.
    ///
    /// # Errors
    ///
    /// See [`ShortLinkResolver::resolve`].
    pub async fn resolve_short_link(&self, requested_link: &str) -> Result<String, LinkError> {
        self.resolver.resolve(requested_link).await
    }
}
