//! Durable link API routes.

use crate::api::handlers::{create_short_link_handler, exchange_short_link_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Durable link endpoints.
///
/// # Endpoints
///
/// - `POST /shortLinks`        - Create or reuse a short link
/// - `POST /exchangeShortLink` - Expand a short link into its long form
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shortLinks", post(create_short_link_handler))
        .route("/exchangeShortLink", post(exchange_short_link_handler))
}
