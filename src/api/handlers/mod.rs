//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod exchange;
pub mod health;
pub mod short_links;

pub use exchange::exchange_short_link_handler;
pub use health::health_handler;
pub use short_links::create_short_link_handler;
