//! Error types for openlib-core

use openlib_identifiers::IdentifierError;
use thiserror::Error;

use crate::http::TransportError;
use crate::shape::ShapeError;

/// Result type alias for openlib operations
pub type Result<T> = std::result::Result<T, OpenLibError>;

/// Main error type for openlib operations
#[derive(Error, Debug)]
pub enum OpenLibError {
    /// No identifier kind was supplied and none could be inferred
    #[error("Unknown identifier kind: {0}")]
    UnknownIdentifierKind(String),

    /// A string passed as a bibkey is not `PREFIX:value`
    #[error("Invalid bibkey: {0}")]
    InvalidBibkey(String),

    /// A JSON field had none of the shapes its decoder accepts
    #[error("Malformed shape: {0}")]
    MalformedShape(String),

    /// The requested drill-down property is absent from the response
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The response body is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Opaque failure from the HTTP transport
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl From<IdentifierError> for OpenLibError {
    fn from(err: IdentifierError) -> Self {
        match err {
            IdentifierError::UnknownIdentifierKind(raw) => OpenLibError::UnknownIdentifierKind(raw),
            IdentifierError::InvalidBibkey(raw) => OpenLibError::InvalidBibkey(raw),
        }
    }
}

impl From<ShapeError> for OpenLibError {
    fn from(err: ShapeError) -> Self {
        OpenLibError::MalformedShape(err.to_string())
    }
}

impl From<toml::de::Error> for OpenLibError {
    fn from(err: toml::de::Error) -> Self {
        OpenLibError::Config(err.to_string())
    }
}
