use std::mem;

use lbc_ledger::{Coin, CollateralLedger, ValueTransfer};
use lbc_primitives::{Address, CallContext, Digest, ProviderId, U256, Wei};
use lbc_quote::{ConsumedQuoteStore, Quote, hash_quote};
use lbc_registry::{ProviderRecord, ProviderRegistry, RegisterProvider};
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, error, info};

use crate::{
    errors::{BridgeError, BridgeResult},
    events::{
        BalanceIncrease, BridgeEvent, OwnershipTransferred, ProviderStatusSet, Registered,
        Withdrawal,
    },
    params::InitParams,
};

/// Everything the bridge owns once it has been initialized.
#[derive(Debug)]
pub(crate) struct BridgeState {
    pub(crate) params: InitParams,
    pub(crate) ledger: CollateralLedger,
    pub(crate) registry: ProviderRegistry,
    pub(crate) events: Vec<BridgeEvent>,
}

impl BridgeState {
    fn new(params: InitParams) -> Self {
        Self {
            params,
            ledger: CollateralLedger::new(),
            registry: ProviderRegistry::new(),
            events: Vec::new(),
        }
    }

    pub(crate) fn emit(&mut self, ev: impl Into<BridgeEvent>) {
        self.events.push(ev.into());
    }
}

/// The liquidity bridge.
///
/// Operations take `&self`, state is serialized by an internal lock that is
/// never held across a [`ValueTransfer`] call.
#[derive(Debug, Default)]
pub struct LiquidityBridge {
    state: Mutex<Option<BridgeState>>,
}

impl LiquidityBridge {
    /// Creates an uninitialized bridge.  Every operation other than
    /// [`initialize`](Self::initialize) fails until it's called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bridge and initializes it in one step.
    pub fn with_params(params: InitParams) -> BridgeResult<Self> {
        let bridge = Self::new();
        bridge.initialize(params)?;
        Ok(bridge)
    }

    /// Installs the deployment parameters.  Only succeeds once.
    pub fn initialize(&self, params: InitParams) -> BridgeResult<()> {
        if params.owner.is_zero() {
            return Err(BridgeError::ZeroAddress);
        }

        let mut guard = self.state.lock();
        if guard.is_some() {
            return Err(BridgeError::AlreadyInitialized);
        }

        info!(
            owner = %params.owner,
            bridge = %params.bridge_address,
            minimum_collateral = %params.minimum_collateral,
            "initialized bridge"
        );
        *guard = Some(BridgeState::new(params));
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().is_some()
    }

    /// Locks state, failing if the bridge was never initialized.
    pub(crate) fn lock(&self) -> BridgeResult<StateGuard<'_>> {
        let guard = self.state.lock();
        if guard.is_none() {
            return Err(BridgeError::NotInitialized);
        }
        Ok(StateGuard(guard))
    }

    fn read<T>(&self, f: impl FnOnce(&BridgeState) -> T) -> BridgeResult<T> {
        let guard = self.lock()?;
        Ok(f(guard.get()))
    }

    pub fn params(&self) -> BridgeResult<InitParams> {
        self.read(|s| s.params)
    }

    pub fn owner(&self) -> BridgeResult<Address> {
        self.read(|s| s.params.owner)
    }

    pub fn minimum_collateral(&self) -> BridgeResult<Wei> {
        self.read(|s| s.params.minimum_collateral)
    }

    pub fn bridge_address(&self) -> BridgeResult<Address> {
        self.read(|s| s.params.bridge_address)
    }

    /// Hands administrative ownership to `new_owner`.
    pub fn transfer_ownership(&self, ctx: &CallContext, new_owner: Address) -> BridgeResult<()> {
        let mut guard = self.lock()?;
        let state = guard.get_mut();

        let previous_owner = state.params.owner;
        if ctx.sender() != previous_owner {
            return Err(BridgeError::NotOwner {
                caller: ctx.sender(),
            });
        }

        if new_owner.is_zero() {
            return Err(BridgeError::ZeroAddress);
        }

        state.params.owner = new_owner;
        state.emit(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        info!(%previous_owner, %new_owner, "transferred bridge ownership");
        Ok(())
    }

    /// Books the value attached to the call as collateral of the sender.
    /// Returns the new balance.
    pub fn deposit(&self, ctx: &CallContext) -> BridgeResult<Wei> {
        let mut guard = self.lock()?;
        let state = guard.get_mut();

        let dest = ctx.sender();
        let amount = ctx.value();
        let balance = state.ledger.deposit(Coin::attached(ctx))?;
        state.emit(BalanceIncrease { dest, amount });

        debug!(%dest, %amount, %balance, "deposited collateral");
        Ok(balance)
    }

    /// Pays `amount` of the sender's collateral back to the sender.
    ///
    /// The balance is reduced and the lock released before `transfer` runs.  If
    /// the transfer fails the debit is restored and `TransferFailed` returned.
    pub fn withdraw(
        &self,
        ctx: &CallContext,
        amount: Wei,
        transfer: &dyn ValueTransfer,
    ) -> BridgeResult<()> {
        let from = ctx.sender();
        let coin = {
            let mut guard = self.lock()?;
            guard.get_mut().ledger.withdraw(from, amount)?
        };

        self.pay_out(from, coin, transfer, None)?;

        let mut guard = self.lock()?;
        guard.get_mut().emit(Withdrawal { from, amount });
        debug!(%from, %amount, "withdrew collateral");
        Ok(())
    }

    /// Sends `coin` to `to` outside the lock.
    ///
    /// If the transfer fails, or the recipient panics, the coin is booked back
    /// to the account it was debited from and the `consumed` quote digest is
    /// released.
    pub(crate) fn pay_out<'a>(
        &'a self,
        to: Address,
        coin: Coin,
        transfer: &dyn ValueTransfer,
        consumed: Option<(&'a dyn ConsumedQuoteStore, Digest)>,
    ) -> BridgeResult<()> {
        let amount = coin.amt();
        let pending = PendingPayout {
            bridge: self,
            coin: Some(coin),
            consumed,
        };

        match transfer.send_value(to, amount) {
            Ok(()) => {
                pending.confirm();
                Ok(())
            }
            Err(e) => {
                drop(pending);
                debug!(%to, %amount, err = %e, "value transfer failed, debit restored");
                Err(BridgeError::TransferFailed(e))
            }
        }
    }

    /// Books a coin that never reached its recipient back into the ledger.
    fn restore(&self, coin: Coin) {
        let owed_to = coin.owed_to();
        let amount = coin.amt();
        // Coins only exist once the bridge is initialized, and it never goes
        // back.
        let mut guard = self.state.lock();
        let Some(state) = guard.as_mut() else {
            unreachable!("payout pending on an uninitialized bridge");
        };
        if let Err(err) = state.ledger.deposit(coin) {
            // Only reachable if reentrant deposits filled the account while
            // the payout was in flight.
            error!(%owed_to, %amount, %err, "failed to restore debit after failed payout");
        }
    }

    /// Collateral currently held for `account`.
    pub fn get_collateral(&self, account: &Address) -> BridgeResult<Wei> {
        self.read(|s| s.ledger.get_collateral(account))
    }

    pub fn total_locked(&self) -> BridgeResult<Wei> {
        self.read(|s| s.ledger.total_locked())
    }

    /// Registers the sender as a liquidity provider.  The value attached to
    /// the call is the bond.
    pub fn register(&self, ctx: &CallContext, req: &RegisterProvider) -> BridgeResult<ProviderId> {
        let mut guard = self.lock()?;
        let state = guard.get_mut();

        let minimum = state.params.minimum_collateral;
        let id = state
            .registry
            .register(&mut state.ledger, ctx, req, minimum)?;

        let owner = ctx.sender();
        let bond_amount = ctx.value();
        state.emit(Registered {
            id: U256::from(id.into_inner()),
            owner,
            bond_amount,
        });

        info!(%id, %owner, %bond_amount, name = %req.name, "registered provider");
        Ok(id)
    }

    /// Changes the status of a provider owned by the sender.
    pub fn set_provider_status(
        &self,
        ctx: &CallContext,
        id: ProviderId,
        status: bool,
    ) -> BridgeResult<()> {
        let mut guard = self.lock()?;
        let state = guard.get_mut();

        state
            .registry
            .set_provider_status(ctx.sender(), id, status)?;
        state.emit(ProviderStatusSet {
            id: U256::from(id.into_inner()),
            status,
        });

        debug!(%id, %status, "set provider status");
        Ok(())
    }

    pub fn get_provider(&self, id: ProviderId) -> BridgeResult<Option<ProviderRecord>> {
        self.read(|s| s.registry.get_provider(id).cloned())
    }

    pub fn provider_by_owner(&self, owner: &Address) -> BridgeResult<Option<ProviderRecord>> {
        self.read(|s| s.registry.provider_by_owner(owner).cloned())
    }

    /// All providers in id order.
    pub fn get_providers(&self) -> BridgeResult<Vec<ProviderRecord>> {
        self.read(|s| s.registry.providers().cloned().collect())
    }

    pub fn provider_count(&self) -> BridgeResult<usize> {
        self.read(|s| s.registry.provider_count())
    }

    /// Registered, active and bonded at least the minimum collateral.
    pub fn is_operational(&self, owner: &Address) -> BridgeResult<bool> {
        self.read(|s| {
            s.registry
                .is_operational(&s.ledger, owner, s.params.minimum_collateral)
        })
    }

    /// Canonical digest a provider signs to commit to `quote`.
    pub fn hash_quote(&self, quote: &Quote) -> Digest {
        hash_quote(quote)
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> BridgeResult<Vec<BridgeEvent>> {
        self.read(|s| s.events.clone())
    }

    /// Removes and returns the events emitted so far.
    pub fn drain_events(&self) -> BridgeResult<Vec<BridgeEvent>> {
        let mut guard = self.lock()?;
        Ok(mem::take(&mut guard.get_mut().events))
    }
}

/// Lock guard over initialized state.
/// A payout handed to a [`ValueTransfer`] and not yet confirmed.
///
/// Dropping it unconfirmed undoes the payout, on the error path as well as
/// when the recipient unwinds.
struct PendingPayout<'a> {
    bridge: &'a LiquidityBridge,
    coin: Option<Coin>,
    consumed: Option<(&'a dyn ConsumedQuoteStore, Digest)>,
}

impl PendingPayout<'_> {
    fn confirm(mut self) {
        self.consumed = None;
        if let Some(coin) = self.coin.take() {
            coin.paid_out();
        }
    }
}

impl Drop for PendingPayout<'_> {
    fn drop(&mut self) {
        if let Some(coin) = self.coin.take() {
            self.bridge.restore(coin);
        }
        if let Some((store, digest)) = self.consumed.take() {
            store.release(&digest);
        }
    }
}

pub(crate) struct StateGuard<'a>(MutexGuard<'a, Option<BridgeState>>);

impl StateGuard<'_> {
    pub(crate) fn get(&self) -> &BridgeState {
        match self.0.as_ref() {
            Some(state) => state,
            None => unreachable!("guard only constructed over initialized state"),
        }
    }

    pub(crate) fn get_mut(&mut self) -> &mut BridgeState {
        match self.0.as_mut() {
            Some(state) => state,
            None => unreachable!("guard only constructed over initialized state"),
        }
    }
}
