//! Errors during parsing of primitives.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Provider type string was empty.
    #[error("empty provider type")]
    EmptyProviderType,

    /// Provider type string is not one we serve.
    #[error("unrecognized provider type '{0}'")]
    UnknownProviderType(String),

    /// Amount string was not a valid unsigned 256-bit integer.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}
