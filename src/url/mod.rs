//! The URL record and the plumbing around it.
//!
//! This module contains:
//! - The mutable [`UrlRecord`] with its accessors
//! - The insertion-ordered [`QueryParams`] map
//! - The default port table
//! - Percent-encoding helpers and `url` crate conversions

pub mod ports;
pub mod query;
pub mod record;

pub(crate) mod encoding;
mod interop;

// Re-export main functionality
pub use ports::default_port;
pub use query::QueryParams;
pub use record::UrlRecord;
