//! [`ValueTransfer`] backends for tests.

use lbc_ledger::{TransferError, ValueTransfer};
use lbc_primitives::{Address, Wei};
use parking_lot::Mutex;

/// Accepts every transfer and remembers it.
#[derive(Debug, Default)]
pub struct RecordingTransfer {
    sent: Mutex<Vec<(Address, Wei)>>,
}

impl RecordingTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transfers performed so far, in order.
    pub fn sent(&self) -> Vec<(Address, Wei)> {
        self.sent.lock().clone()
    }

    /// Total value sent to `to`.
    pub fn total_to(&self, to: &Address) -> Wei {
        self.sent
            .lock()
            .iter()
            .filter(|(dest, _)| dest == to)
            .fold(Wei::ZERO, |acc, (_, amt)| acc + *amt)
    }
}

impl ValueTransfer for RecordingTransfer {
    fn send_value(&self, to: Address, amount: Wei) -> Result<(), TransferError> {
        self.sent.lock().push((to, amount));
        Ok(())
    }
}

/// Rejects every transfer, like a receiver that reverts.
#[derive(Debug, Default)]
pub struct FailingTransfer;

impl ValueTransfer for FailingTransfer {
    fn send_value(&self, to: Address, amount: Wei) -> Result<(), TransferError> {
        Err(TransferError::new(to, amount, "receiver rejected value"))
    }
}
