use lbc_primitives::{Address, Wei};
use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger related error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Tried to take more than the account holds.
    #[error("insufficient balance for {account}: requested {requested}, available {available}")]
    InsufficientBalance {
        account: Address,
        requested: Wei,
        available: Wei,
    },

    /// Crediting would push a balance (or the ledger total) past the maximum.
    #[error("balance overflow for {0}")]
    BalanceOverflow(Address),
}
