use lbc_primitives::{Address, Wei};
use thiserror::Error;

/// Host primitive that moves native value out of the bridge.
///
/// Every call is a suspension point: the receiver may call back into the bridge
/// before this returns, so ledger state must already reflect the debit.
pub trait ValueTransfer {
    /// Sends `amount` to `to`.
    fn send_value(&self, to: Address, amount: Wei) -> Result<(), TransferError>;
}

/// The external transfer was rejected by the host or the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value transfer of {amount} to {to} failed: {reason}")]
pub struct TransferError {
    pub to: Address,
    pub amount: Wei,
    pub reason: String,
}

impl TransferError {
    pub fn new(to: Address, amount: Wei, reason: impl Into<String>) -> Self {
        Self {
            to,
            amount,
            reason: reason.into(),
        }
    }
}
