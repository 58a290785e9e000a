use std::fmt;

use lbc_ledger::LedgerError;
use lbc_primitives::{Address, ParseError, ProviderId, Wei};
use thiserror::Error;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// How a provider was looked up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ProviderLookup {
    Id(ProviderId),
    Owner(Address),
}

impl fmt::Display for ProviderLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderLookup::Id(id) => write!(f, "#{id}"),
            ProviderLookup::Owner(owner) => write!(f, "{owner}"),
        }
    }
}

/// Registry related error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("provider name is empty")]
    EmptyName,

    #[error("provider api url is empty")]
    EmptyUrl,

    #[error("invalid provider type: {0}")]
    InvalidProviderType(#[from] ParseError),

    /// Caller is not a directly controlled identity.
    #[error("caller {0} is not eligible to register")]
    CallerNotEligible(Address),

    #[error("{owner} already registered as provider {id}")]
    AlreadyRegistered { owner: Address, id: ProviderId },

    #[error("insufficient collateral: provided {provided}, required {required}")]
    InsufficientCollateral { provided: Wei, required: Wei },

    #[error("unknown provider {0}")]
    UnknownProvider(ProviderLookup),

    #[error("provider {0} is inactive")]
    ProviderInactive(ProviderId),

    #[error("{caller} does not own provider {id}")]
    NotProviderOwner { id: ProviderId, caller: Address },

    #[error("provider id space exhausted")]
    IdSpaceExhausted,

    #[error("ledger: {0}")]
    Ledger(#[from] LedgerError),
}
