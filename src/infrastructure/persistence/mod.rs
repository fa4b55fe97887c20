//! Short link repository implementations and database setup.
//!
//! # Repositories
//!
//! - [`PgShortLinkRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryShortLinkRepository`] - In-process map for development and tests

pub mod connect;
pub mod memory_short_link_repository;
pub mod pg_short_link_repository;

pub use connect::{PoolSettings, connect_with_retry, run_migrations};
pub use memory_short_link_repository::MemoryShortLinkRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
