//! Error taxonomy for durable link creation and resolution.

use thiserror::Error;

/// Boxed cause carried by [`LinkError::Storage`].
pub type StorageCause = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by the durable link core.
///
/// Everything except [`LinkError::DuplicatePath`] is returned to the caller as-is.
/// `DuplicatePath` is retried by the allocator and only escapes as
/// [`LinkError::Storage`] once the retry budget is spent.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Domain of link '{0}' is not in the allow list")]
    DomainNotAllowed(String),

    #[error("iOS App Store ID must be numeric")]
    InvalidAppStoreId,

    #[error("Invalid URL format")]
    InvalidUrlFormat,

    #[error("URL host is missing or invalid")]
    HostInvalid,

    #[error("Missing required field 'host'")]
    MissingHost,

    #[error("Missing required field 'link'")]
    MissingLink,

    #[error("URL scheme '{0}' is not allowed, only http and https are supported")]
    InvalidUrlScheme(String),

    #[error("Invalid request body: {0}")]
    InvalidFormat(String),

    #[error("Requested link is not a valid URL")]
    InvalidRequestedLink,

    #[error("Unexpected path format, expected exactly one path segment")]
    InvalidPathFormat,

    #[error("Short link not found")]
    NotFound,

    #[error("Path already exists for this host")]
    DuplicatePath,

    #[error("Storage error: {0}")]
    Storage(#[source] StorageCause),

    #[error("Storage operation timed out")]
    Timeout,
}

impl LinkError {
    /// Wraps any error as a storage failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<StorageCause>,
    {
        Self::Storage(err.into())
    }

    /// Stable variant name, exposed to API clients in error details.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidHost(_) => "INVALID_HOST",
            Self::DomainNotAllowed(_) => "DOMAIN_NOT_ALLOWED",
            Self::InvalidAppStoreId => "INVALID_APP_STORE_ID",
            Self::InvalidUrlFormat => "INVALID_URL_FORMAT",
            Self::HostInvalid => "HOST_INVALID",
            Self::MissingHost => "MISSING_HOST",
            Self::MissingLink => "MISSING_LINK",
            Self::InvalidUrlScheme(_) => "INVALID_URL_SCHEME",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::InvalidRequestedLink => "INVALID_REQUESTED_LINK",
            Self::InvalidPathFormat => "INVALID_PATH_FORMAT",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicatePath => "DUPLICATE_PATH",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Timeout => "TIMEOUT",
        }
    }
}
