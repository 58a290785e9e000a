use std::fmt;

use lbc_crypto::CryptoError;
use lbc_ledger::{LedgerError, TransferError};
use lbc_primitives::{Address, Wei};
use lbc_quote::QuoteError;
use lbc_registry::RegistryError;
use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced by bridge operations.  Every rejection leaves bridge state
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("bridge already initialized")]
    AlreadyInitialized,

    #[error("bridge not initialized")]
    NotInitialized,

    #[error("{caller} is not the bridge owner")]
    NotOwner { caller: Address },

    #[error("zero address not allowed")]
    ZeroAddress,

    #[error("pegout payment {provided} below amount due {required}")]
    InsufficientPayment { required: Wei, provided: Wei },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    TransferFailed(#[from] TransferError),
}

/// Flat identifier of a rejection, stable across error payload changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCode {
    EmptyName,
    EmptyUrl,
    InvalidProviderType,
    CallerNotEligible,
    AlreadyRegistered,
    InsufficientCollateral,
    InsufficientBalance,
    BalanceOverflow,
    UnknownProvider,
    ProviderInactive,
    NotProviderOwner,
    ProviderIdExhausted,
    InvalidSignature,
    MalformedSignature,
    WrongBridge,
    QuoteExpired,
    UnsupportedQuoteKind,
    QuoteAlreadyConsumed,
    InsufficientPayment,
    TransferFailed,
    AlreadyInitialized,
    NotInitialized,
    NotOwner,
    ZeroAddress,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyName => "EmptyName",
            ErrorCode::EmptyUrl => "EmptyUrl",
            ErrorCode::InvalidProviderType => "InvalidProviderType",
            ErrorCode::CallerNotEligible => "CallerNotEligible",
            ErrorCode::AlreadyRegistered => "AlreadyRegistered",
            ErrorCode::InsufficientCollateral => "InsufficientCollateral",
            ErrorCode::InsufficientBalance => "InsufficientBalance",
            ErrorCode::BalanceOverflow => "BalanceOverflow",
            ErrorCode::UnknownProvider => "UnknownProvider",
            ErrorCode::ProviderInactive => "ProviderInactive",
            ErrorCode::NotProviderOwner => "NotProviderOwner",
            ErrorCode::ProviderIdExhausted => "ProviderIdExhausted",
            ErrorCode::InvalidSignature => "InvalidSignature",
            ErrorCode::MalformedSignature => "MalformedSignature",
            ErrorCode::WrongBridge => "WrongBridge",
            ErrorCode::QuoteExpired => "QuoteExpired",
            ErrorCode::UnsupportedQuoteKind => "UnsupportedQuoteKind",
            ErrorCode::QuoteAlreadyConsumed => "QuoteAlreadyConsumed",
            ErrorCode::InsufficientPayment => "InsufficientPayment",
            ErrorCode::TransferFailed => "TransferFailed",
            ErrorCode::AlreadyInitialized => "AlreadyInitialized",
            ErrorCode::NotInitialized => "NotInitialized",
            ErrorCode::NotOwner => "NotOwner",
            ErrorCode::ZeroAddress => "ZeroAddress",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn ledger_code(e: &LedgerError) -> ErrorCode {
    match e {
        LedgerError::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
        LedgerError::BalanceOverflow(_) => ErrorCode::BalanceOverflow,
    }
}

fn registry_code(e: &RegistryError) -> ErrorCode {
    match e {
        RegistryError::EmptyName => ErrorCode::EmptyName,
        RegistryError::EmptyUrl => ErrorCode::EmptyUrl,
        RegistryError::InvalidProviderType(_) => ErrorCode::InvalidProviderType,
        RegistryError::CallerNotEligible(_) => ErrorCode::CallerNotEligible,
        RegistryError::AlreadyRegistered { .. } => ErrorCode::AlreadyRegistered,
        RegistryError::InsufficientCollateral { .. } => ErrorCode::InsufficientCollateral,
        RegistryError::UnknownProvider(_) => ErrorCode::UnknownProvider,
        RegistryError::ProviderInactive(_) => ErrorCode::ProviderInactive,
        RegistryError::NotProviderOwner { .. } => ErrorCode::NotProviderOwner,
        RegistryError::IdSpaceExhausted => ErrorCode::ProviderIdExhausted,
        RegistryError::Ledger(e) => ledger_code(e),
    }
}

fn quote_code(e: &QuoteError) -> ErrorCode {
    match e {
        QuoteError::Provider(e) => registry_code(e),
        QuoteError::InvalidSignature { .. } => ErrorCode::InvalidSignature,
        QuoteError::MalformedSignature(CryptoError::MalformedSignature(_)) => {
            ErrorCode::MalformedSignature
        }
        QuoteError::WrongBridge { .. } => ErrorCode::WrongBridge,
        QuoteError::QuoteExpired { .. } => ErrorCode::QuoteExpired,
        QuoteError::UnsupportedQuoteKind { .. } => ErrorCode::UnsupportedQuoteKind,
        QuoteError::QuoteAlreadyConsumed(_) => ErrorCode::QuoteAlreadyConsumed,
    }
}

impl BridgeError {
    /// The flat code identifying which precondition was violated.
    pub fn code(&self) -> ErrorCode {
        match self {
            BridgeError::AlreadyInitialized => ErrorCode::AlreadyInitialized,
            BridgeError::NotInitialized => ErrorCode::NotInitialized,
            BridgeError::NotOwner { .. } => ErrorCode::NotOwner,
            BridgeError::ZeroAddress => ErrorCode::ZeroAddress,
            BridgeError::InsufficientPayment { .. } => ErrorCode::InsufficientPayment,
            BridgeError::Ledger(e) => ledger_code(e),
            BridgeError::Registry(e) => registry_code(e),
            BridgeError::Quote(e) => quote_code(e),
            BridgeError::TransferFailed(_) => ErrorCode::TransferFailed,
        }
    }
}
