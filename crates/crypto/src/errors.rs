use thiserror::Error;

pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors raised while handling signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Signature bytes are not a `r || s || v` encoding we understand.
    #[error("malformed signature: {0}")]
    MalformedSignature(&'static str),
}
