//! Error types for URL parsing, mutation and serialization.

use thiserror::Error;

/// Errors that can occur while parsing, mutating or serializing a [`UrlRecord`].
///
/// [`UrlRecord`]: crate::UrlRecord
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input could not be split into URL components or has no host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The port number is invalid (must be 1-65535).
    #[error("Invalid port number: must be between 1 and 65535")]
    InvalidPort,

    /// The component inclusion mask has bits outside of `Components::ALL`.
    #[error("Invalid component mask {0}: must be between 0 and 127")]
    InvalidMask(u32),

    /// A component name did not match any known component.
    #[error("Unknown URL component: {0}")]
    UnknownComponent(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParse(String),
}

impl UrlError {
    pub(crate) fn invalid_url(reason: impl Into<String>) -> Self {
        UrlError::InvalidUrl(reason.into())
    }
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::UrlParse(err.to_string())
    }
}
