//! Repository trait for short link persistence.

use crate::domain::entities::{LinkCounts, NewShortLink, ShortLinkRecord};
use crate::domain::errors::LinkError;
use async_trait::async_trait;

/// Persistence contract for `(host, path) -> raw query` mappings.
///
/// Implementations must enforce path uniqueness per host as a structural constraint
/// and report a violation as [`LinkError::DuplicatePath`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryShortLinkRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Looks up the record stored under `(host, path)`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on backend failures.
    async fn get(&self, host: &str, path: &str) -> Result<Option<ShortLinkRecord>, LinkError>;

    /// Finds the path of a reusable (guessable) record with the same canonical query.
    ///
    /// Unguessable records never match.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Storage`] on backend failures.
    async fn find_guessable(&self, host: &str, raw_query: &str)
    -> Result<Option<String>, LinkError>;

    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::DuplicatePath`] if `path` already exists for `host`.
    /// Returns [`LinkError::Storage`] on backend failures.
    async fn put(&self, new_link: NewShortLink) -> Result<(), LinkError>;

    /// Counts stored records split by guessability.
    async fn count(&self) -> Result<LinkCounts, LinkError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), LinkError>;
}
