//! Bridging quotes and their authorization.
//!
//! A quote is negotiated off-chain between a user and a liquidity provider and
//! reaches the bridge together with the provider's signature over its
//! canonical digest.  This crate owns the canonical encoding, the digest, and
//! the checks that must pass before the quote is allowed to move bonded funds.

mod abi;
mod authorize;
mod errors;
mod hash;
mod replay;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use authorize::{AuthPolicy, AuthorizedQuote, authorize};
pub use errors::{QuoteError, QuoteResult};
pub use hash::{
    PEGIN_QUOTE_DOMAIN, PEGOUT_QUOTE_DOMAIN, QUOTE_HASH_VERSION, hash_pegin_quote,
    hash_pegout_quote, hash_quote,
};
pub use replay::{ConsumedQuoteStore, InMemoryConsumedQuotes};
pub use types::{PegInQuote, PegOutQuote, Quote};
