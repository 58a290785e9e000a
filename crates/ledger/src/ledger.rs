use std::collections::HashMap;

use lbc_primitives::{Address, Wei};

use crate::{
    coin::Coin,
    errors::{LedgerError, LedgerResult},
};

/// Balance book keyed by identity.
///
/// Accounts spring into existence on their first credit and are never removed;
/// an identity that was never credited simply reads as zero.
#[derive(Clone, Debug, Default)]
pub struct CollateralLedger {
    balances: HashMap<Address, Wei>,

    /// Sum of every balance, kept in step with `balances`.
    total_locked: Wei,
}

impl CollateralLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of `account`, zero if it was never credited.
    pub fn get_collateral(&self, account: &Address) -> Wei {
        self.balances.get(account).copied().unwrap_or(Wei::ZERO)
    }

    /// Sum of all balances held by the ledger.
    pub fn total_locked(&self) -> Wei {
        self.total_locked
    }

    /// Whether `account` holds at least `minimum`.
    pub fn is_bonded(&self, account: &Address, minimum: Wei) -> bool {
        self.get_collateral(account) >= minimum
    }

    /// Number of accounts that were ever credited.
    pub fn num_accounts(&self) -> usize {
        self.balances.len()
    }

    /// Books a coin into the account it is owed to: the sender of the call it
    /// came with, or the account a failed payout was debited from.  Zero-value
    /// deposits succeed and still create the account.
    pub fn deposit(&mut self, coin: Coin) -> LedgerResult<Wei> {
        self.credit(coin.owed_to(), coin)
    }

    /// Takes value out of `account` so it can be paid back to it.
    ///
    /// The balance is reduced before the returned coin leaves the ledger, so
    /// anything observing the ledger while the payout is in flight already sees
    /// the reduced balance.
    pub fn withdraw(&mut self, account: Address, amt: Wei) -> LedgerResult<Coin> {
        self.debit(account, amt)
    }

    /// Adds a coin to an account's balance.
    ///
    /// Both the account balance and the ledger-wide total must stay
    /// representable.  On overflow nothing is booked and the value is treated
    /// as never having entered the ledger.
    pub fn credit(&mut self, account: Address, coin: Coin) -> LedgerResult<Wei> {
        let amt = coin.amt();
        let cur = self.get_collateral(&account);

        let (Some(new_bal), Some(new_total)) =
            (cur.checked_add(amt), self.total_locked.checked_add(amt))
        else {
            // Value never entered the ledger, the caller's call reverts.
            coin.booked();
            return Err(LedgerError::BalanceOverflow(account));
        };

        self.balances.insert(account, new_bal);
        self.total_locked = new_total;
        coin.booked();
        Ok(new_bal)
    }

    /// Takes a coin from an account's balance, if funds are available.
    pub fn debit(&mut self, account: Address, amt: Wei) -> LedgerResult<Coin> {
        let cur = self.get_collateral(&account);
        let Some(new_bal) = cur.checked_sub(amt) else {
            return Err(LedgerError::InsufficientBalance {
                account,
                requested: amt,
                available: cur,
            });
        };

        // Total is the sum of balances including `cur`, so this can't clamp.
        self.total_locked = self.total_locked.saturating_sub(amt);
        // An absent account can only get here for a zero debit.
        if let Some(bal) = self.balances.get_mut(&account) {
            *bal = new_bal;
        }
        Ok(Coin::debited(account, amt))
    }
}
