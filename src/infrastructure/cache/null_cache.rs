//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when `REDIS_URL` is not configured or Redis is unreachable at startup.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_query(&self, _host: &str, _path: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_query(
        &self,
        _host: &str,
        _path: &str,
        _raw_query: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();
        cache
            .set_query("x.link", "abc123", "link=x", None)
            .await
            .unwrap();

        assert_eq!(cache.get_query("x.link", "abc123").await.unwrap(), None);
        assert!(cache.health_check().await);
    }
}
