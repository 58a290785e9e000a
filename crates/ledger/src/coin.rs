//! Value in flight between the ledger and the outside world.

use std::{mem, thread};

use lbc_primitives::{Address, CallContext, Wei};

/// Value that has left one place and not yet arrived at another.
///
/// A coin always knows the account it is owed to: the sender for value
/// attached to a call, the debited account for value taken out of the ledger.
/// [`CollateralLedger::deposit`](crate::CollateralLedger::deposit) books it
/// there, so value that bounces can only go back where it came from.
///
/// A coin must end up either booked into the ledger or handed to a recipient
/// with [`Coin::paid_out`].  Dropping it any other way panics.
#[must_use = "a coin must be booked or paid out"]
#[derive(Debug, Eq, PartialEq)]
pub struct Coin {
    owed_to: Address,
    amt: Wei,
}

impl Coin {
    /// The value attached to an incoming call, owed to its sender.
    pub fn attached(ctx: &CallContext) -> Self {
        Self {
            owed_to: ctx.sender(),
            amt: ctx.value(),
        }
    }

    /// Value just debited from `account`.
    pub(crate) fn debited(account: Address, amt: Wei) -> Self {
        Self {
            owed_to: account,
            amt,
        }
    }

    pub fn owed_to(&self) -> Address {
        self.owed_to
    }

    pub fn amt(&self) -> Wei {
        self.amt
    }

    /// Retires the coin after its value was delivered to an external
    /// recipient.
    pub fn paid_out(self) {
        mem::forget(self);
    }

    /// Retires the coin once its value sits in a ledger balance.
    pub(crate) fn booked(self) {
        mem::forget(self);
    }
}

impl Drop for Coin {
    fn drop(&mut self) {
        // A second panic while unwinding would abort the process.
        if !thread::panicking() {
            panic!(
                "coin: {} wei owed to {} was neither booked nor paid out",
                self.amt, self.owed_to
            );
        }
    }
}
