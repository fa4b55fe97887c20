//! Utility functions shared across layers.
//!
//! - [`path_generator`] - Random path token generation
//! - [`url_parts`] - Authority and query extraction from parsed URLs
//! - [`validation`] - Host, URL and identifier validation

pub mod path_generator;
pub mod url_parts;
pub mod validation;
