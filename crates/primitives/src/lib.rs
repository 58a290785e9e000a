//! Collection of generic data types shared by every liquidity bridge crate.
//!
//! Identities are plain 20-byte account addresses and value is counted in wei,
//! so these types line up with what the host execution environment hands us.

#[macro_use]
mod macros;

mod amount;
mod caller;
mod errors;
mod provider;

pub use alloy_primitives::{Address, B256, U256};
pub use amount::{parse_wei, Wei};
pub use caller::{CallContext, CallerKind};
pub use errors::ParseError;
pub use provider::{ProviderId, ProviderType, QuoteKind};

/// Hash digest used as the canonical identity of signed payloads.
pub type Digest = B256;
