//! Events emitted by the bridge.
//!
//! Defined as ABI events so consumers that index logs can decode them the same
//! way as any other contract log.

use alloy_primitives::LogData;
use alloy_sol_types::{SolEvent, sol};

sol! {
    #![sol(all_derives)]

    event BalanceIncrease(address dest, uint256 amount);

    event Registered(uint256 id, address indexed owner, uint256 bond_amount);

    event Withdrawal(address from, uint256 amount);

    event ProviderStatusSet(uint256 id, bool status);

    event QuoteExecuted(bytes32 indexed quote_hash, address indexed provider, uint256 value);

    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
}

/// Any event the bridge emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeEvent {
    BalanceIncrease(BalanceIncrease),
    Registered(Registered),
    Withdrawal(Withdrawal),
    ProviderStatusSet(ProviderStatusSet),
    QuoteExecuted(QuoteExecuted),
    OwnershipTransferred(OwnershipTransferred),
}

impl BridgeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeEvent::BalanceIncrease(_) => "BalanceIncrease",
            BridgeEvent::Registered(_) => "Registered",
            BridgeEvent::Withdrawal(_) => "Withdrawal",
            BridgeEvent::ProviderStatusSet(_) => "ProviderStatusSet",
            BridgeEvent::QuoteExecuted(_) => "QuoteExecuted",
            BridgeEvent::OwnershipTransferred(_) => "OwnershipTransferred",
        }
    }

    /// Renders the event as log topics and data.
    pub fn to_log_data(&self) -> LogData {
        match self {
            BridgeEvent::BalanceIncrease(e) => e.encode_log_data(),
            BridgeEvent::Registered(e) => e.encode_log_data(),
            BridgeEvent::Withdrawal(e) => e.encode_log_data(),
            BridgeEvent::ProviderStatusSet(e) => e.encode_log_data(),
            BridgeEvent::QuoteExecuted(e) => e.encode_log_data(),
            BridgeEvent::OwnershipTransferred(e) => e.encode_log_data(),
        }
    }
}

macro_rules! impl_event_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for BridgeEvent {
                fn from(value: $variant) -> Self {
                    BridgeEvent::$variant(value)
                }
            }
        )*
    };
}

impl_event_from!(
    BalanceIncrease,
    Registered,
    Withdrawal,
    ProviderStatusSet,
    QuoteExecuted,
    OwnershipTransferred,
);
