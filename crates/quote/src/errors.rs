use lbc_crypto::CryptoError;
use lbc_primitives::{Address, Digest, ProviderId, ProviderType, QuoteKind};
use lbc_registry::RegistryError;
use thiserror::Error;

pub type QuoteResult<T> = Result<T, QuoteError>;

/// Reasons a quote is refused.  None of these are faults: the caller may
/// resubmit with a corrected quote or signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Provider lookup failed (`UnknownProvider`, `ProviderInactive`).
    #[error("provider: {0}")]
    Provider(#[from] RegistryError),

    #[error("signature over quote {digest} does not match provider {provider}")]
    InvalidSignature { digest: Digest, provider: Address },

    #[error(transparent)]
    MalformedSignature(#[from] CryptoError),

    #[error("quote addressed to bridge {got}, this is {expected}")]
    WrongBridge { expected: Address, got: Address },

    #[error("quote expired at {deadline}, now {now}")]
    QuoteExpired { deadline: u64, now: u64 },

    #[error("provider {id} ({provider_type}) does not service {kind} quotes")]
    UnsupportedQuoteKind {
        id: ProviderId,
        provider_type: ProviderType,
        kind: QuoteKind,
    },

    #[error("quote {0} was already consumed")]
    QuoteAlreadyConsumed(Digest),
}
