#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use durable_links::api;
use durable_links::api::handlers::health_handler;
use durable_links::config::LinkSettings;
use durable_links::domain::entities::NewShortLink;
use durable_links::domain::repositories::ShortLinkRepository;
use durable_links::infrastructure::cache::NullCache;
use durable_links::infrastructure::persistence::{
    MemoryShortLinkRepository, PgShortLinkRepository,
};
use durable_links::state::AppState;

pub fn test_settings() -> LinkSettings {
    LinkSettings {
        allowed_domains: vec!["example.com".to_string()],
        ..LinkSettings::default()
    }
}

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryShortLinkRepository::new()))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    create_state_with(Arc::new(PgShortLinkRepository::new(Arc::new(pool))))
}

pub fn create_state_with(repository: Arc<dyn ShortLinkRepository>) -> AppState {
    AppState::new(repository, Arc::new(NullCache::new()), test_settings())
}

pub fn test_app(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}

pub async fn insert_link(state: &AppState, host: &str, path: &str, raw_query: &str, unguessable: bool) {
    state
        .repository
        .put(NewShortLink {
            host: host.to_string(),
            path: path.to_string(),
            raw_query: raw_query.to_string(),
            unguessable,
        })
        .await
        .unwrap();
}

/// Returns the path token of a short link such as `https://x.link/aB3dE9`.
pub fn path_of(short_link: &str) -> String {
    short_link.rsplit('/').next().unwrap().to_string()
}
