//! Short path allocation and reuse.

use std::sync::Arc;

use crate::config::LinkSettings;
use crate::domain::entities::{NewShortLink, SuffixOption};
use crate::domain::errors::LinkError;
use crate::domain::query_encoding::QueryEncoding;
use crate::domain::repositories::ShortLinkRepository;
use crate::utils::path_generator::generate_path;

use super::bounded;

/// Allocates short paths for canonical queries.
///
/// `SHORT` requests reuse an existing guessable path for the same host and query when
/// one exists. Every other request gets a fresh path of the unguessable length.
pub struct ShortLinkAllocator<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
    settings: LinkSettings,
}

impl<R: ShortLinkRepository + ?Sized> ShortLinkAllocator<R> {
    pub fn new(repository: Arc<R>, settings: LinkSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Returns `scheme://host/path` for the given query, allocating a path if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] when the repository fails or when every allocation
    /// attempt collided with an existing path.
    /// Returns [`LinkError::Timeout`] when a repository call exceeds the storage timeout.
    pub async fn create_or_get(
        &self,
        host: &str,
        query: &QueryEncoding,
        suffix: SuffixOption,
    ) -> Result<String, LinkError> {
        let raw_query = query.encode();
        let timeout = self.settings.storage_timeout();

        if !suffix.is_unguessable() {
            if let Some(path) =
                bounded(timeout, self.repository.find_guessable(host, &raw_query)).await?
            {
                tracing::debug!(host, path = %path, "Reusing existing short path");
                return Ok(self.short_link(host, &path));
            }
        }

        let unguessable = suffix.is_unguessable();
        let length = if unguessable {
            self.settings.unguessable_path_length
        } else {
            self.settings.short_path_length
        };

        let attempts = self.settings.max_allocation_attempts;
        for attempt in 1..=attempts {
            let path = generate_path(length);
            let new_link = NewShortLink {
                host: host.to_string(),
                path: path.clone(),
                raw_query: raw_query.clone(),
                unguessable,
            };

            match bounded(timeout, self.repository.put(new_link)).await {
                Ok(()) => {
                    tracing::debug!(host, path = %path, unguessable, "Allocated short path");
                    return Ok(self.short_link(host, &path));
                }
                Err(LinkError::DuplicatePath) => {
                    tracing::warn!(host, path = %path, attempt, "Short path collision, retrying");
                }
                Err(e) => {
                    tracing::error!(host, error = %e, "Failed to store short link");
                    return Err(e);
                }
            }
        }

        tracing::error!(host, attempts, "Exhausted short path allocation attempts");
        Err(LinkError::storage(format!(
            "no free path after {attempts} attempts"
        )))
    }

    fn short_link(&self, host: &str, path: &str) -> String {
        format!("{}://{}/{}", self.settings.url_scheme, host, path)
    }
}
