//! Version 1 canonical layouts of the quotes.
//!
//! Field order here is the hashing order and must never change.  A new layout
//! gets a new struct and a new domain tag.

use alloy_sol_types::sol;

use crate::types::{PegInQuote, PegOutQuote};

sol! {
    struct PegInQuoteV1 {
        bytes20 fed_btc_address;
        address bridge_address;
        address liquidity_provider;
        bytes btc_refund_address;
        address rsk_refund_address;
        bytes lp_btc_address;
        uint256 call_fee;
        uint256 penalty_fee;
        address destination;
        bytes data;
        uint32 gas_limit;
        int64 nonce;
        uint256 value;
        uint32 agreement_timestamp;
        uint32 time_for_deposit;
        uint32 call_time;
        uint16 deposit_confirmations;
        bool call_on_register;
        uint256 product_fee_amount;
        uint256 gas_fee;
    }

    struct PegOutQuoteV1 {
        address bridge_address;
        address liquidity_provider;
        bytes lp_btc_address;
        address rsk_refund_address;
        bytes btc_destination;
        uint256 call_fee;
        uint256 penalty_fee;
        int64 nonce;
        bytes deposit_address;
        uint256 value;
        uint32 agreement_timestamp;
        uint32 deposit_date_limit;
        uint16 deposit_confirmations;
        uint16 transfer_confirmations;
        uint32 transfer_time;
        uint32 expire_date;
        uint32 expire_block;
        uint256 product_fee_amount;
        uint256 gas_fee;
    }
}

impl From<&PegInQuote> for PegInQuoteV1 {
    fn from(q: &PegInQuote) -> Self {
        Self {
            fed_btc_address: q.fed_btc_address,
            bridge_address: q.bridge_address,
            liquidity_provider: q.liquidity_provider,
            btc_refund_address: q.btc_refund_address.clone(),
            rsk_refund_address: q.rsk_refund_address,
            lp_btc_address: q.lp_btc_address.clone(),
            call_fee: q.call_fee,
            penalty_fee: q.penalty_fee,
            destination: q.destination,
            data: q.data.clone(),
            gas_limit: q.gas_limit,
            nonce: q.nonce,
            value: q.value,
            agreement_timestamp: q.agreement_timestamp,
            time_for_deposit: q.time_for_deposit,
            call_time: q.call_time,
            deposit_confirmations: q.deposit_confirmations,
            call_on_register: q.call_on_register,
            product_fee_amount: q.product_fee_amount,
            gas_fee: q.gas_fee,
        }
    }
}

impl From<&PegOutQuote> for PegOutQuoteV1 {
    fn from(q: &PegOutQuote) -> Self {
        Self {
            bridge_address: q.bridge_address,
            liquidity_provider: q.liquidity_provider,
            lp_btc_address: q.lp_btc_address.clone(),
            rsk_refund_address: q.rsk_refund_address,
            btc_destination: q.btc_destination.clone(),
            call_fee: q.call_fee,
            penalty_fee: q.penalty_fee,
            nonce: q.nonce,
            deposit_address: q.deposit_address.clone(),
            value: q.value,
            agreement_timestamp: q.agreement_timestamp,
            deposit_date_limit: q.deposit_date_limit,
            deposit_confirmations: q.deposit_confirmations,
            transfer_confirmations: q.transfer_confirmations,
            transfer_time: q.transfer_time,
            expire_date: q.expire_date,
            expire_block: q.expire_block,
            product_fee_amount: q.product_fee_amount,
            gas_fee: q.gas_fee,
        }
    }
}
