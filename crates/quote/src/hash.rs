//! Canonical quote digests.
//!
//! `digest = keccak256(abi_encode((keccak256(domain), quote_v1)))`
//!
//! The domain tag separates quote kinds and layout versions, so a pegin quote
//! can never hash the same as a pegout quote, and a future layout can never
//! collide with this one.  The ABI encoding length-prefixes every dynamic field
//! which keeps the encoding injective.

use alloy_sol_types::{SolType, sol_data};
use lbc_crypto::keccak;
use lbc_primitives::Digest;

use crate::{
    abi::{PegInQuoteV1, PegOutQuoteV1},
    types::{PegInQuote, PegOutQuote, Quote},
};

/// Version of the canonical layout implemented here.
pub const QUOTE_HASH_VERSION: u8 = 1;

/// Domain tag for pegin quote digests.
pub const PEGIN_QUOTE_DOMAIN: &[u8] = b"lbc.pegin-quote.v1";

/// Domain tag for pegout quote digests.
pub const PEGOUT_QUOTE_DOMAIN: &[u8] = b"lbc.pegout-quote.v1";

type PegInPreimage = (sol_data::FixedBytes<32>, PegInQuoteV1);
type PegOutPreimage = (sol_data::FixedBytes<32>, PegOutQuoteV1);

pub fn hash_pegin_quote(quote: &PegInQuote) -> Digest {
    let domain = keccak(PEGIN_QUOTE_DOMAIN);
    let encoded = PegInPreimage::abi_encode(&(domain, PegInQuoteV1::from(quote)));
    keccak(encoded)
}

pub fn hash_pegout_quote(quote: &PegOutQuote) -> Digest {
    let domain = keccak(PEGOUT_QUOTE_DOMAIN);
    let encoded = PegOutPreimage::abi_encode(&(domain, PegOutQuoteV1::from(quote)));
    keccak(encoded)
}

/// Digest binding every field of `quote`.
pub fn hash_quote(quote: &Quote) -> Digest {
    match quote {
        Quote::PegIn(q) => hash_pegin_quote(q),
        Quote::PegOut(q) => hash_pegout_quote(q),
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, Bytes};
    use lbc_primitives::Wei;
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::{sample_pegin_quote, sample_pegout_quote};

    #[test]
    fn test_hash_is_deterministic() {
        let q = sample_pegin_quote(Address::repeat_byte(1), Address::repeat_byte(2));
        assert_eq!(hash_pegin_quote(&q), hash_pegin_quote(&q.clone()));
        assert_eq!(hash_quote(&Quote::PegIn(q.clone())), q.hash());
    }

    #[test]
    fn test_kinds_are_domain_separated() {
        let lbc = Address::repeat_byte(1);
        let lp = Address::repeat_byte(2);
        let pegin = Quote::from(sample_pegin_quote(lbc, lp));
        let pegout = Quote::from(sample_pegout_quote(lbc, lp));
        assert_ne!(pegin.hash(), pegout.hash());
    }

    /// Every field feeds the digest.
    #[test]
    fn test_every_pegin_field_is_bound() {
        let base = sample_pegin_quote(Address::repeat_byte(1), Address::repeat_byte(2));
        let h = base.hash();

        let mutations: Vec<Box<dyn Fn(&mut PegInQuote)>> = vec![
            Box::new(|q| q.fed_btc_address = [9u8; 20].into()),
            Box::new(|q| q.bridge_address = Address::repeat_byte(9)),
            Box::new(|q| q.liquidity_provider = Address::repeat_byte(9)),
            Box::new(|q| q.btc_refund_address = Bytes::from_static(b"other")),
            Box::new(|q| q.rsk_refund_address = Address::repeat_byte(9)),
            Box::new(|q| q.lp_btc_address = Bytes::from_static(b"other")),
            Box::new(|q| q.call_fee += Wei::from(1u64)),
            Box::new(|q| q.penalty_fee += Wei::from(1u64)),
            Box::new(|q| q.destination = Address::repeat_byte(9)),
            Box::new(|q| q.data = Bytes::from_static(b"\x01")),
            Box::new(|q| q.gas_limit += 1),
            Box::new(|q| q.nonce += 1),
            Box::new(|q| q.value += Wei::from(1u64)),
            Box::new(|q| q.agreement_timestamp += 1),
            Box::new(|q| q.time_for_deposit += 1),
            Box::new(|q| q.call_time += 1),
            Box::new(|q| q.deposit_confirmations += 1),
            Box::new(|q| q.call_on_register = !q.call_on_register),
            Box::new(|q| q.product_fee_amount += Wei::from(1u64)),
            Box::new(|q| q.gas_fee += Wei::from(1u64)),
        ];

        for (i, mutate) in mutations.iter().enumerate() {
            let mut q = base.clone();
            mutate(&mut q);
            assert_ne!(q.hash(), h, "field #{i} not bound by digest");
        }
    }

    #[test]
    fn test_every_pegout_field_is_bound() {
        let base = sample_pegout_quote(Address::repeat_byte(1), Address::repeat_byte(2));
        let h = base.hash();

        let mutations: Vec<Box<dyn Fn(&mut PegOutQuote)>> = vec![
            Box::new(|q| q.bridge_address = Address::repeat_byte(9)),
            Box::new(|q| q.liquidity_provider = Address::repeat_byte(9)),
            Box::new(|q| q.lp_btc_address = Bytes::from_static(b"other")),
            Box::new(|q| q.rsk_refund_address = Address::repeat_byte(9)),
            Box::new(|q| q.btc_destination = Bytes::from_static(b"other")),
            Box::new(|q| q.call_fee += Wei::from(1u64)),
            Box::new(|q| q.penalty_fee += Wei::from(1u64)),
            Box::new(|q| q.nonce += 1),
            Box::new(|q| q.deposit_address = Bytes::from_static(b"other")),
            Box::new(|q| q.value += Wei::from(1u64)),
            Box::new(|q| q.agreement_timestamp += 1),
            Box::new(|q| q.deposit_date_limit += 1),
            Box::new(|q| q.deposit_confirmations += 1),
            Box::new(|q| q.transfer_confirmations += 1),
            Box::new(|q| q.transfer_time += 1),
            Box::new(|q| q.expire_date += 1),
            Box::new(|q| q.expire_block += 1),
            Box::new(|q| q.product_fee_amount += Wei::from(1u64)),
            Box::new(|q| q.gas_fee += Wei::from(1u64)),
        ];

        for (i, mutate) in mutations.iter().enumerate() {
            let mut q = base.clone();
            mutate(&mut q);
            assert_ne!(q.hash(), h, "field #{i} not bound by digest");
        }
    }

    /// Moving bytes between adjacent dynamic fields must change the digest.
    #[test]
    fn test_dynamic_field_boundaries_are_bound() {
        let mut a = sample_pegin_quote(Address::repeat_byte(1), Address::repeat_byte(2));
        a.btc_refund_address = Bytes::from_static(b"ab");
        a.lp_btc_address = Bytes::from_static(b"c");

        let mut b = a.clone();
        b.btc_refund_address = Bytes::from_static(b"a");
        b.lp_btc_address = Bytes::from_static(b"bc");

        assert_ne!(a.hash(), b.hash());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn proptest_distinct_pegin_quotes_do_not_collide(
            v1 in any::<u64>(),
            v2 in any::<u64>(),
            n1 in any::<i64>(),
            n2 in any::<i64>(),
            d1 in prop::collection::vec(any::<u8>(), 0..40),
            d2 in prop::collection::vec(any::<u8>(), 0..40),
        ) {
            let base = sample_pegin_quote(Address::repeat_byte(1), Address::repeat_byte(2));
            let mut a = base.clone();
            a.value = Wei::from(v1);
            a.nonce = n1;
            a.data = d1.into();
            let mut b = base;
            b.value = Wei::from(v2);
            b.nonce = n2;
            b.data = d2.into();

            prop_assert_eq!(a == b, a.hash() == b.hash());
        }
    }
}
