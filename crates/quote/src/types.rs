use alloy_primitives::{Address, Bytes, FixedBytes};
use lbc_primitives::{Digest, QuoteKind, Wei};
use serde::{Deserialize, Serialize};

use crate::hash::{hash_pegin_quote, hash_pegout_quote};

/// Quote for moving value from the BTC side into the bridge's chain.
///
/// The provider fronts `value` out of its bonded balance to `destination`
/// before the user's BTC deposit has been proven.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PegInQuote {
    /// Federation address the user deposits BTC into.
    pub fed_btc_address: FixedBytes<20>,
    pub bridge_address: Address,
    pub liquidity_provider: Address,
    pub btc_refund_address: Bytes,
    pub rsk_refund_address: Address,
    pub lp_btc_address: Bytes,
    pub call_fee: Wei,
    pub penalty_fee: Wei,
    /// Receiver of the fronted value.
    pub destination: Address,
    pub data: Bytes,
    pub gas_limit: u32,
    pub nonce: i64,
    pub value: Wei,
    pub agreement_timestamp: u32,
    pub time_for_deposit: u32,
    pub call_time: u32,
    pub deposit_confirmations: u16,
    pub call_on_register: bool,
    pub product_fee_amount: Wei,
    pub gas_fee: Wei,
}

impl PegInQuote {
    /// Last timestamp at which the quote may still be executed.
    pub fn deadline(&self) -> u64 {
        u64::from(self.agreement_timestamp) + u64::from(self.time_for_deposit)
    }

    pub fn hash(&self) -> Digest {
        hash_pegin_quote(self)
    }
}

/// Quote for moving value out to the BTC side.
///
/// The user pays the bridge, the provider later delivers BTC to
/// `btc_destination`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PegOutQuote {
    pub bridge_address: Address,
    pub liquidity_provider: Address,
    pub lp_btc_address: Bytes,
    pub rsk_refund_address: Address,
    pub btc_destination: Bytes,
    pub call_fee: Wei,
    pub penalty_fee: Wei,
    pub nonce: i64,
    pub deposit_address: Bytes,
    pub value: Wei,
    pub agreement_timestamp: u32,
    pub deposit_date_limit: u32,
    pub deposit_confirmations: u16,
    pub transfer_confirmations: u16,
    pub transfer_time: u32,
    pub expire_date: u32,
    pub expire_block: u32,
    pub product_fee_amount: Wei,
    pub gas_fee: Wei,
}

impl PegOutQuote {
    pub fn deadline(&self) -> u64 {
        u64::from(self.expire_date)
    }

    /// What the user has to pay for the quote to be honored, `None` on
    /// overflow.
    pub fn total_due(&self) -> Option<Wei> {
        self.value
            .checked_add(self.call_fee)?
            .checked_add(self.gas_fee)?
            .checked_add(self.product_fee_amount)
    }

    pub fn hash(&self) -> Digest {
        hash_pegout_quote(self)
    }
}

/// Either kind of quote.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Quote {
    PegIn(PegInQuote),
    PegOut(PegOutQuote),
}

impl Quote {
    pub fn kind(&self) -> QuoteKind {
        match self {
            Quote::PegIn(_) => QuoteKind::PegIn,
            Quote::PegOut(_) => QuoteKind::PegOut,
        }
    }

    pub fn liquidity_provider(&self) -> Address {
        match self {
            Quote::PegIn(q) => q.liquidity_provider,
            Quote::PegOut(q) => q.liquidity_provider,
        }
    }

    pub fn bridge_address(&self) -> Address {
        match self {
            Quote::PegIn(q) => q.bridge_address,
            Quote::PegOut(q) => q.bridge_address,
        }
    }

    pub fn value(&self) -> Wei {
        match self {
            Quote::PegIn(q) => q.value,
            Quote::PegOut(q) => q.value,
        }
    }

    pub fn deadline(&self) -> u64 {
        match self {
            Quote::PegIn(q) => q.deadline(),
            Quote::PegOut(q) => q.deadline(),
        }
    }

    pub fn hash(&self) -> Digest {
        match self {
            Quote::PegIn(q) => q.hash(),
            Quote::PegOut(q) => q.hash(),
        }
    }
}

impl From<PegInQuote> for Quote {
    fn from(value: PegInQuote) -> Self {
        Quote::PegIn(value)
    }
}

impl From<PegOutQuote> for Quote {
    fn from(value: PegOutQuote) -> Self {
        Quote::PegOut(value)
    }
}
