//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (link description, stored record, warnings)
//! - [`query_encoding`] - Query key table and canonical encoding
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Error taxonomy shared by every layer below HTTP
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Business logic lives in services (see [`crate::application::services`]).

pub mod entities;
pub mod errors;
pub mod query_encoding;
pub mod repositories;

pub use errors::LinkError;
