//! DTOs for the short link creation endpoint.
//!
//! The request body is decoded in two phases by
//! [`crate::application::services::LinkService::prepare_request`], so only the
//! response shapes live here.

use serde::Serialize;

use crate::application::services::CreatedShortLink;
use crate::domain::entities::Warning;

/// Response for `POST /shortLinks`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkResponse {
    pub short_link: String,
    pub warnings: Vec<WarningItem>,
}

/// A non-fatal issue found while encoding the link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningItem {
    pub warning_code: &'static str,
    pub warning_message: String,
}

impl From<Warning> for WarningItem {
    fn from(warning: Warning) -> Self {
        Self {
            warning_code: warning.code.as_str(),
            warning_message: warning.message,
        }
    }
}

impl From<CreatedShortLink> for CreateShortLinkResponse {
    fn from(created: CreatedShortLink) -> Self {
        Self {
            short_link: created.short_link,
            warnings: created.warnings.into_iter().map(WarningItem::from).collect(),
        }
    }
}
