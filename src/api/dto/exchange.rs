//! DTOs for the short link exchange endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for `POST /exchangeShortLink`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeShortLinkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "requestedLink is required"))]
    pub requested_link: String,
}

/// Response for `POST /exchangeShortLink`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeShortLinkResponse {
    pub long_link: String,
}
