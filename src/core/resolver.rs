//! Resolution of relative references against a base record.

use std::fmt;

use crate::core::canonical::canonical_segments;
use crate::core::parser;
use crate::error::UrlError;
use crate::types::Components;
use crate::url::record::UrlRecord;

/// How a reference string relates to the base it is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A complete URL with its own host (`http://other/`, `//other`).
    Absolute,
    /// Only a fragment (`#section`).
    Fragment,
    /// A query, optionally followed by a fragment (`?page=2`).
    Query,
    /// A path from the root of the base host (`/docs/index.html`).
    RootRelative,
    /// A path relative to the base's current directory (`../img/logo.png`).
    PathRelative,
}

impl ReferenceKind {
    /// Classify `reference` the same way [`resolve`] does.
    ///
    /// ```
    /// use urlrec::ReferenceKind;
    ///
    /// assert_eq!(ReferenceKind::classify("//cdn.example.com/app.js"), ReferenceKind::Absolute);
    /// assert_eq!(ReferenceKind::classify("#top"), ReferenceKind::Fragment);
    /// assert_eq!(ReferenceKind::classify("img/logo.png"), ReferenceKind::PathRelative);
    /// ```
    pub fn classify(reference: &str) -> Self {
        if parser::validate(reference) {
            ReferenceKind::Absolute
        } else {
            Relative::of(reference).into()
        }
    }
}

/// The kinds of reference that are resolved against the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relative {
    Fragment,
    Query,
    Root,
    Path,
}

impl Relative {
    /// Classify a reference already known not to be absolute.
    fn of(reference: &str) -> Self {
        match reference.chars().next() {
            Some('#') => Relative::Fragment,
            Some('?') => Relative::Query,
            Some('/') => Relative::Root,
            _ => Relative::Path,
        }
    }
}

impl From<Relative> for ReferenceKind {
    fn from(relative: Relative) -> Self {
        match relative {
            Relative::Fragment => ReferenceKind::Fragment,
            Relative::Query => ReferenceKind::Query,
            Relative::Root => ReferenceKind::RootRelative,
            Relative::Path => ReferenceKind::PathRelative,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Absolute => "absolute",
            ReferenceKind::Fragment => "fragment",
            ReferenceKind::Query => "query",
            ReferenceKind::RootRelative => "root-relative",
            ReferenceKind::PathRelative => "path-relative",
        };
        f.write_str(name)
    }
}

/// Resolve `reference` against `base`, producing a new record.
///
/// An absolute reference replaces the base entirely. Every other kind keeps a
/// prefix of the base and is reparsed as a whole:
///
/// - `#frag` keeps everything but the fragment;
/// - `?query` keeps everything but the query and fragment;
/// - `/path` keeps scheme, credentials, host and port;
/// - anything else is appended to the directory of the base path and the
///   result is canonicalized. An empty reference yields that directory.
///
/// The base is never modified.
pub fn resolve(base: &UrlRecord, reference: &str) -> Result<UrlRecord, UrlError> {
    let err = match parser::parse(reference) {
        Ok(absolute) => {
            tracing::trace!(reference, kind = %ReferenceKind::Absolute, "resolved reference");
            return Ok(absolute);
        }
        Err(err) => err,
    };

    tracing::debug!(reference, error = %err, "reference is not absolute, resolving against base");

    let relative = Relative::of(reference);
    let resolved = match relative {
        Relative::Fragment => {
            format!("{}{}", base.serialize(Components::ALL - Components::FRAGMENT), reference)
        }
        Relative::Query => {
            let mask = Components::ALL - Components::FRAGMENT - Components::QUERY;
            format!("{}{}", base.serialize(mask), reference)
        }
        Relative::Root => {
            // The serialized prefix already ends in `/`
            format!("{}{}", authority_prefix(base), &reference[1..])
        }
        Relative::Path => {
            let merged = format!("{}{}", directory_of(base.path()), reference);
            format!("{}{}", authority_prefix(base), canonical_segments(&merged).join("/"))
        }
    };

    tracing::trace!(reference, kind = %ReferenceKind::from(relative), resolved = %resolved, "resolved reference");

    parser::parse(&resolved)
}

/// Serialize `base` up to and including the `/` that starts its path.
fn authority_prefix(base: &UrlRecord) -> String {
    base.serialize(Components::ALL - Components::FRAGMENT - Components::QUERY - Components::PATH)
}

/// The directory part of `path`, i.e. everything up to its last `/`.
fn directory_of(path: Option<&str>) -> &str {
    let path = path.unwrap_or("/");
    if path.ends_with('/') {
        return path;
    }

    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    }
}
