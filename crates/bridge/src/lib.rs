//! The liquidity bridge service.
//!
//! [`LiquidityBridge`] owns the collateral ledger and the provider registry and
//! is the only way to mutate either.  Every public operation runs to completion
//! under a single lock.  External value transfers are suspension points: they
//! happen after the ledger has been updated and after the lock is released, so
//! a receiver that calls back in sees the already updated balances.

mod bridge;
mod errors;
mod events;
mod exec;
mod params;


pub use bridge::LiquidityBridge;
pub use errors::{BridgeError, BridgeResult, ErrorCode};
pub use events::{
    BalanceIncrease, BridgeEvent, OwnershipTransferred, ProviderStatusSet, QuoteExecuted,
    Registered, Withdrawal,
};
pub use exec::QuoteReceipt;
pub use params::InitParams;
