//! Handler for durable link creation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::api::dto::short_links::CreateShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short link for a durable link description.
///
/// # Endpoint
///
/// `POST /shortLinks`
///
/// # Request Body
///
/// Either a structured description:
///
/// ```json
/// {
///   "durableLinkInfo": {
///     "host": "x.link",
///     "link": "https://example.com",
///     "iosParameters": { "iosAppStoreId": "123456" }
///   },
///   "suffix": { "option": "SHORT" }
/// }
/// ```
///
/// or a long link:
///
/// ```json
/// { "longDurableLink": "https://x.link/?link=https://example.com&path=SHORT" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortLink": "https://x.link/aB3dE9",
///   "warnings": []
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for malformed bodies and validation failures, 500 on storage
/// failures and 504 when storage does not answer in time.
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateShortLinkResponse>, AppError> {
    let Json(body) = payload?;

    let request = state.link_service.prepare_request(body)?;
    let created = state.link_service.create_durable_link(request).await?;

    Ok(Json(created.into()))
}
