//! Liquidity provider registry.
//!
//! Maps identities to provider records.  Registration bonds collateral into the
//! [`CollateralLedger`](lbc_ledger::CollateralLedger) in the same step that
//! stores the record, so either both happen or neither does.

mod errors;
mod record;
mod registry;

pub use errors::{ProviderLookup, RegistryError, RegistryResult};
pub use record::{ProviderRecord, RegisterProvider};
pub use registry::ProviderRegistry;
