//! Short link resolution.

use std::sync::Arc;

use url::Url;

use crate::config::LinkSettings;
use crate::domain::errors::LinkError;
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::cache::CacheService;
use crate::utils::url_parts::authority;

use super::bounded;

const PREVIEW_PREFIX: &str = "preview.";
const PREVIEW_LABEL_SUFFIX: &str = "-preview";

/// Maps a preview host onto the host its links were issued for.
///
/// - `preview.x.link` -> `x.link`
/// - `app-preview.x.link` -> `app.x.link`
/// - anything else is returned unchanged
pub fn normalize_preview_host(host: &str) -> String {
    if let Some(rest) = host.strip_prefix(PREVIEW_PREFIX) {
        return rest.to_string();
    }

    let (first, rest) = match host.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (host, None),
    };

    match first.strip_suffix(PREVIEW_LABEL_SUFFIX) {
        Some(label) => match rest {
            Some(rest) => format!("{label}.{rest}"),
            None => label.to_string(),
        },
        None => host.to_string(),
    }
}

/// Extracts the single path token from a URL path such as `/abc123/`.
fn path_token(path: &str) -> Result<&str, LinkError> {
    let token = path.trim_matches('/');
    if token.is_empty() || token.contains('/') {
        return Err(LinkError::InvalidPathFormat);
    }
    Ok(token)
}

/// Expands short links back into long links.
pub struct ShortLinkResolver<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    settings: LinkSettings,
}

impl<R: ShortLinkRepository + ?Sized> ShortLinkResolver<R> {
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, settings: LinkSettings) -> Self {
        Self {
            repository,
            cache,
            settings,
        }
    }

    /// Resolves a short link to `scheme://<requested host>/<path>[?raw_query]`.
    ///
    /// Lookup happens under the preview-normalized host, while the returned long link
    /// keeps the host exactly as requested.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidRequestedLink`] if the link is unparsable or has no host
    /// - [`LinkError::InvalidPathFormat`] if the path is not exactly one segment
    /// - [`LinkError::NotFound`] if nothing is stored under the path
    /// - [`LinkError::Storage`] / [`LinkError::Timeout`] on repository failures
    pub async fn resolve(&self, requested_link: &str) -> Result<String, LinkError> {
        let url = Url::parse(requested_link.trim()).map_err(|_| LinkError::InvalidRequestedLink)?;
        let requested_host = authority(&url).ok_or(LinkError::InvalidRequestedLink)?;
        let host = normalize_preview_host(&requested_host);
        let path = path_token(url.path())?;

        let raw_query = match self.lookup(&host, path).await? {
            Some(raw_query) => raw_query,
            None => {
                tracing::debug!(host = %host, path, "Short link not found");
                return Err(LinkError::NotFound);
            }
        };

        let mut long_link = format!("{}://{}/{}", self.settings.url_scheme, requested_host, path);
        if !raw_query.is_empty() {
            long_link.push('?');
            long_link.push_str(&raw_query);
        }

        tracing::debug!(host = %host, path, "Resolved short link");
        Ok(long_link)
    }

    /// Cache calls share the storage timeout; a slow cache counts as a miss.
    async fn lookup(&self, host: &str, path: &str) -> Result<Option<String>, LinkError> {
        let timeout = self.settings.storage_timeout();

        match tokio::time::timeout(timeout, self.cache.get_query(host, path)).await {
            Ok(Ok(Some(raw_query))) => return Ok(Some(raw_query)),
            Ok(Ok(None)) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "Cache lookup failed, falling back to storage"),
            Err(_) => tracing::warn!("Cache lookup timed out, falling back to storage"),
        }

        let Some(record) = bounded(timeout, self.repository.get(host, path)).await? else {
            return Ok(None);
        };

        let populate = self.cache.set_query(host, path, &record.raw_query, None);
        match tokio::time::timeout(timeout, populate).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "Failed to populate cache"),
            Err(_) => tracing::warn!("Cache write timed out"),
        }

        Ok(Some(record.raw_query))
    }
}
