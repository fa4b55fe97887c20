//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::LinkService;
use crate::config::LinkSettings;
use crate::domain::repositories::ShortLinkRepository;
use crate::infrastructure::cache::CacheService;

/// State injected into every handler.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn ShortLinkRepository>>,
    pub repository: Arc<dyn ShortLinkRepository>,
    pub cache: Arc<dyn CacheService>,
    /// Upper bound for storage calls made outside the link service.
    pub storage_timeout: Duration,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        cache: Arc<dyn CacheService>,
        settings: LinkSettings,
    ) -> Self {
        let storage_timeout = settings.storage_timeout();
        let link_service = Arc::new(LinkService::new(
            repository.clone(),
            cache.clone(),
            settings,
        ));

        Self {
            link_service,
            repository,
            cache,
            storage_timeout,
        }
    }
}
