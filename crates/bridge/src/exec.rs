use lbc_ledger::{Coin, ValueTransfer};
use lbc_primitives::{Address, CallContext, Digest, Wei};
use lbc_quote::{AuthPolicy, ConsumedQuoteStore, Quote, QuoteError, authorize};
use tracing::{debug, instrument, warn};

use crate::{
    bridge::{BridgeState, LiquidityBridge},
    errors::{BridgeError, BridgeResult},
    events::QuoteExecuted,
};

/// Outcome of an executed quote.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QuoteReceipt {
    /// Digest the provider signed.
    pub digest: Digest,

    /// Owner of the provider whose collateral was touched.
    pub provider: Address,

    /// Amount that moved.  For pegins this left the provider's balance, for
    /// pegouts it is the payment credited to it.
    pub amount: Wei,

    /// Provider balance right after the ledger update.
    pub provider_balance: Wei,
}

/// Payout owed once the lock is released.
struct Payout {
    to: Address,
    coin: Coin,
}

impl LiquidityBridge {
    fn policy(state: &BridgeState, ctx: &CallContext) -> AuthPolicy {
        AuthPolicy {
            bridge_address: state.params.bridge_address,
            now: ctx.timestamp(),
        }
    }

    /// Runs the authorization checks without moving any funds.  Returns the
    /// quote digest on success.
    pub fn authorize_quote(
        &self,
        ctx: &CallContext,
        quote: &Quote,
        signature: &[u8],
    ) -> BridgeResult<Digest> {
        let guard = self.lock()?;
        let state = guard.get();
        let authorized = authorize(&state.registry, quote, signature, &Self::policy(state, ctx))
            .inspect_err(|e| warn!(provider = %quote.liquidity_provider(), %e, "rejected quote"))?;
        Ok(authorized.digest())
    }

    /// Authorizes `quote` and applies its effect to the provider's collateral.
    ///
    /// Pegins debit the quoted value from the provider and send it to the quote
    /// destination after the lock is released.  Pegouts credit the payment
    /// attached to the call to the provider.
    ///
    /// Nothing stops the same quote from being executed twice, see
    /// [`execute_quote_once`](Self::execute_quote_once).
    pub fn execute_quote(
        &self,
        ctx: &CallContext,
        quote: &Quote,
        signature: &[u8],
        transfer: &dyn ValueTransfer,
    ) -> BridgeResult<QuoteReceipt> {
        self.execute_inner(ctx, quote, signature, None, transfer)
    }

    /// Like [`execute_quote`](Self::execute_quote), but consumes the quote
    /// digest in `store` so the quote can only be used once.  The digest is
    /// released again if execution fails.
    pub fn execute_quote_once(
        &self,
        ctx: &CallContext,
        quote: &Quote,
        signature: &[u8],
        store: &dyn ConsumedQuoteStore,
        transfer: &dyn ValueTransfer,
    ) -> BridgeResult<QuoteReceipt> {
        self.execute_inner(ctx, quote, signature, Some(store), transfer)
    }

    #[instrument(skip_all, fields(kind = %quote.kind(), provider = %quote.liquidity_provider()))]
    fn execute_inner(
        &self,
        ctx: &CallContext,
        quote: &Quote,
        signature: &[u8],
        store: Option<&dyn ConsumedQuoteStore>,
        transfer: &dyn ValueTransfer,
    ) -> BridgeResult<QuoteReceipt> {
        let (receipt, payout) = {
            let mut guard = self.lock()?;
            let state = guard.get_mut();

            let policy = Self::policy(state, ctx);
            let authorized = authorize(&state.registry, quote, signature, &policy)
                .inspect_err(|e| warn!(%e, "rejected quote"))?;
            let digest = authorized.digest();
            let provider = authorized.provider().owner();

            if let Some(store) = store {
                if !store.try_consume(&digest) {
                    warn!(%digest, "rejected replayed quote");
                    return Err(QuoteError::QuoteAlreadyConsumed(digest).into());
                }
            }

            match apply_effect(state, ctx, quote, digest, provider) {
                Ok(v) => v,
                Err(e) => {
                    if let Some(store) = store {
                        store.release(&digest);
                    }
                    return Err(e);
                }
            }
        };

        if let Some(Payout { to, coin }) = payout {
            let consumed = store.map(|store| (store, receipt.digest));
            self.pay_out(to, coin, transfer, consumed)?;
        }

        let mut guard = self.lock()?;
        guard.get_mut().emit(QuoteExecuted {
            quote_hash: receipt.digest,
            provider: receipt.provider,
            value: receipt.amount,
        });
        debug!(digest = %receipt.digest, amount = %receipt.amount, "executed quote");
        Ok(receipt)
    }
}

/// Applies the ledger side of an authorized quote.  Either fully applies or
/// leaves the ledger untouched.
fn apply_effect(
    state: &mut BridgeState,
    ctx: &CallContext,
    quote: &Quote,
    digest: Digest,
    provider: Address,
) -> BridgeResult<(QuoteReceipt, Option<Payout>)> {
    match quote {
        Quote::PegIn(q) => {
            let coin = state.ledger.debit(provider, q.value)?;
            let receipt = QuoteReceipt {
                digest,
                provider,
                amount: q.value,
                provider_balance: state.ledger.get_collateral(&provider),
            };
            let payout = Payout {
                to: q.destination,
                coin,
            };
            Ok((receipt, Some(payout)))
        }

        Quote::PegOut(q) => {
            let provided = ctx.value();
            // An unpayable total can never be met, report it as the maximum.
            let required = q.total_due().unwrap_or(Wei::MAX);
            if provided < required {
                return Err(BridgeError::InsufficientPayment { required, provided });
            }

            let balance = state.ledger.credit(provider, Coin::attached(ctx))?;
            let receipt = QuoteReceipt {
                digest,
                provider,
                amount: provided,
                provider_balance: balance,
            };
            Ok((receipt, None))
        }
    }
}
