//! Handler for short link exchange.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::exchange::{ExchangeShortLinkRequest, ExchangeShortLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Expands a short (or preview) link into its long form.
///
/// # Endpoint
///
/// `POST /exchangeShortLink`
///
/// # Request Body
///
/// ```json
/// { "requestedLink": "https://preview.x.link/aB3dE9" }
/// ```
///
/// # Response
///
/// ```json
/// { "longLink": "https://preview.x.link/aB3dE9?link=https%3A%2F%2Fexample.com" }
/// ```
///
/// # Errors
///
/// Returns 400 for invalid links or paths, 404 when the path is unknown.
pub async fn exchange_short_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExchangeShortLinkRequest>, JsonRejection>,
) -> Result<Json<ExchangeShortLinkResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let long_link = state
        .link_service
        .resolve_short_link(&request.requested_link)
        .await?;

    Ok(Json(ExchangeShortLinkResponse { long_link }))
}
