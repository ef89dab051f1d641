//! Core URL operations.
//!
//! This module contains the logic behind [`UrlRecord`](crate::UrlRecord):
//! - Parsing URL strings into records
//! - Serializing a subset of record components
//! - Resolving relative references against a base
//! - Canonicalizing paths

pub mod canonical;
pub mod parser;
pub mod resolver;
pub mod serializer;

// Re-export main functionality
pub use canonical::{canonical_segments, canonicalize_path};
pub use parser::{parse, validate};
pub use resolver::{resolve, ReferenceKind};
pub use serializer::serialize;
