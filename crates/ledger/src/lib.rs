//! Collateral ledger.
//!
//! Per-identity balance accounting.  Value entering or leaving the ledger is
//! carried by a linear [`Coin`] that remembers who it is owed to, so every unit
//! is explicitly either booked into a balance or handed to an external
//! transfer.  Accounting bugs then show up as panics instead of silently
//! created or destroyed value.

mod coin;
mod errors;
mod ledger;
mod transfer;

pub use coin::Coin;
pub use errors::{LedgerError, LedgerResult};
pub use ledger::CollateralLedger;
pub use transfer::{TransferError, ValueTransfer};
