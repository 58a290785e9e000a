//! Sample quotes for tests and tooling.

use alloy_primitives::{Address, Bytes, FixedBytes};
use lbc_primitives::Wei;

use crate::types::{PegInQuote, PegOutQuote};

/// Agreement timestamp used by the sample quotes.
pub const SAMPLE_AGREEMENT_TIMESTAMP: u32 = 1_700_000_000;

/// A pegin quote for `lp` on bridge `bridge`, fronting 0.1 of a unit.
pub fn sample_pegin_quote(bridge: Address, lp: Address) -> PegInQuote {
    PegInQuote {
        fed_btc_address: FixedBytes::repeat_byte(0x0f),
        bridge_address: bridge,
        liquidity_provider: lp,
        btc_refund_address: Bytes::from_static(b"mfWxJ45yp2SFn7UciZyNpvDKrzbhyfKrY8"),
        rsk_refund_address: Address::repeat_byte(0x0a),
        lp_btc_address: Bytes::from_static(b"mnYcQxCZBbmLzNfE9BhV7E8E2u7amdz5y6"),
        call_fee: Wei::from(100_000_000_000_000u64),
        penalty_fee: Wei::from(10_000_000_000_000u64),
        destination: Address::repeat_byte(0x0d),
        data: Bytes::new(),
        gas_limit: 21_000,
        nonce: 8_373_381_263_192_041_574,
        value: Wei::from(100_000_000_000_000_000u64),
        agreement_timestamp: SAMPLE_AGREEMENT_TIMESTAMP,
        time_for_deposit: 3_600,
        call_time: 7_200,
        deposit_confirmations: 10,
        call_on_register: false,
        product_fee_amount: Wei::ZERO,
        gas_fee: Wei::from(21_000_000_000_000u64),
    }
}

/// A pegout quote for `lp` on bridge `bridge`.
pub fn sample_pegout_quote(bridge: Address, lp: Address) -> PegOutQuote {
    PegOutQuote {
        bridge_address: bridge,
        liquidity_provider: lp,
        lp_btc_address: Bytes::from_static(b"mnYcQxCZBbmLzNfE9BhV7E8E2u7amdz5y6"),
        rsk_refund_address: Address::repeat_byte(0x0a),
        btc_destination: Bytes::from_static(b"mfWxJ45yp2SFn7UciZyNpvDKrzbhyfKrY8"),
        call_fee: Wei::from(100_000_000_000_000u64),
        penalty_fee: Wei::from(10_000_000_000_000u64),
        nonce: 5_482_209_471_103_952_311,
        deposit_address: Bytes::from_static(b"2N5muMepJizJE1gR7FbHJU6CD18V3BpNF9p"),
        value: Wei::from(100_000_000_000_000_000u64),
        agreement_timestamp: SAMPLE_AGREEMENT_TIMESTAMP,
        deposit_date_limit: SAMPLE_AGREEMENT_TIMESTAMP + 3_600,
        deposit_confirmations: 10,
        transfer_confirmations: 2,
        transfer_time: 3_600,
        expire_date: SAMPLE_AGREEMENT_TIMESTAMP + 7_200,
        expire_block: 5_000,
        product_fee_amount: Wei::ZERO,
        gas_fee: Wei::from(21_000_000_000_000u64),
    }
}
