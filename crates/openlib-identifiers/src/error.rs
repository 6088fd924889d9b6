//! Error types for identifier handling

use thiserror::Error;

/// Result type alias for identifier operations
pub type Result<T> = std::result::Result<T, IdentifierError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier kind could not be inferred and none was supplied
    #[error("Cannot infer identifier kind for '{0}'")]
    UnknownIdentifierKind(String),

    /// A string claimed to be a bibkey but is not `PREFIX:value`
    #[error("Invalid bibkey: {0}")]
    InvalidBibkey(String),
}
