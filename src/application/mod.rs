//! Application layer services implementing the durable link core.
//!
//! Services consume the repository and cache traits and expose a small API to the
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::LinkService`] - Request decoding, creation and resolution
//! - [`services::canonicalize`] - Link description to canonical query encoding
//! - [`services::LongLinkParser`] - Long link to link description parsing
//! - [`services::ShortLinkAllocator`] - Short path reuse and allocation
//! - [`services::ShortLinkResolver`] - Preview-aware short link resolution

pub mod services;
