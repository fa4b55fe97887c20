//! Durable link services for the application layer.

use std::future::Future;
use std::time::Duration;

use crate::domain::errors::LinkError;

pub mod allocator;
pub mod canonicalizer;
pub mod link_service;
pub mod long_link_parser;
pub mod resolver;

pub use allocator::ShortLinkAllocator;
pub use canonicalizer::canonicalize;
pub use link_service::{CreatedShortLink, LinkService};
pub use long_link_parser::LongLinkParser;
pub use resolver::{ShortLinkResolver, normalize_preview_host};

/// Runs a repository call under the storage timeout.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, LinkError>
where
    F: Future<Output = Result<T, LinkError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(timeout_ms = limit.as_millis() as u64, "Storage call timed out");
            Err(LinkError::Timeout)
        }
    }
}
