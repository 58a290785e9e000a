use lbc_crypto::verify;
use lbc_primitives::{Address, Digest};
use lbc_registry::{ProviderRecord, ProviderRegistry};

use crate::{
    errors::{QuoteError, QuoteResult},
    hash::hash_quote,
    types::Quote,
};

/// Environment-dependent checks applied to an otherwise valid quote.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AuthPolicy {
    /// Address of the bridge evaluating the quote.
    pub bridge_address: Address,

    /// Timestamp the call executes at.
    pub now: u64,
}

/// A quote that passed every check and may now move funds.
#[derive(Clone, Debug)]
pub struct AuthorizedQuote<'r> {
    digest: Digest,
    provider: &'r ProviderRecord,
}

impl<'r> AuthorizedQuote<'r> {
    pub fn digest(&self) -> Digest {
        self.digest
    }

    pub fn provider(&self) -> &'r ProviderRecord {
        self.provider
    }
}

/// Authorizes `quote` against the provider it names.
///
/// 1. the provider must be registered and active,
/// 2. the signature over the canonical digest must recover to its owner,
/// 3. the quote must be for this bridge, unexpired, and of a kind the provider
///    services.
///
/// Pure with respect to bridge state.
pub fn authorize<'r>(
    registry: &'r ProviderRegistry,
    quote: &Quote,
    signature: &[u8],
    policy: &AuthPolicy,
) -> QuoteResult<AuthorizedQuote<'r>> {
    let provider = registry.resolve_active(&quote.liquidity_provider())?;

    let digest = hash_quote(quote);

    if !verify(provider.owner(), &digest, signature)? {
        return Err(QuoteError::InvalidSignature {
            digest,
            provider: provider.owner(),
        });
    }

    if quote.bridge_address() != policy.bridge_address {
        return Err(QuoteError::WrongBridge {
            expected: policy.bridge_address,
            got: quote.bridge_address(),
        });
    }

    let deadline = quote.deadline();
    if policy.now > deadline {
        return Err(QuoteError::QuoteExpired {
            deadline,
            now: policy.now,
        });
    }

    if !provider.provider_type().serves(quote.kind()) {
        return Err(QuoteError::UnsupportedQuoteKind {
            id: provider.id(),
            provider_type: provider.provider_type(),
            kind: quote.kind(),
        });
    }

    Ok(AuthorizedQuote { digest, provider })
}

#[cfg(test)]
mod tests {
    use lbc_crypto::CryptoError;
    use lbc_ledger::CollateralLedger;
    use lbc_primitives::{CallContext, ProviderId, ProviderType, QuoteKind, Wei};
    use lbc_registry::{ProviderLookup, RegisterProvider, RegistryError};
    use lbc_test_utils::keys::TestKey;

    use super::*;
    use crate::test_utils::{sample_pegin_quote, sample_pegout_quote};

    const MIN: u64 = 1_000;

    struct Fixture {
        registry: ProviderRegistry,
        lp: TestKey,
        bridge: Address,
        policy: AuthPolicy,
    }

    fn fixture(provider_type: &str) -> Fixture {
        let mut registry = ProviderRegistry::new();
        let mut ledger = CollateralLedger::new();
        let lp = TestKey::from_seed(1);
        let bridge = Address::repeat_byte(0xb1);

        let ctx = CallContext::direct(lp.address()).with_value(Wei::from(MIN));
        let req = RegisterProvider::new("lp", "http://lp", true, provider_type);
        registry
            .register(&mut ledger, &ctx, &req, Wei::from(MIN))
            .unwrap();

        Fixture {
            registry,
            lp,
            bridge,
            policy: AuthPolicy {
                bridge_address: bridge,
                now: 0,
            },
        }
    }

    fn signed(f: &Fixture, quote: &Quote) -> Vec<u8> {
        f.lp.sign(&quote.hash()).to_vec()
    }

    #[test]
    fn test_authorize_valid_pegin() {
        let f = fixture("both");
        let quote = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));
        let sig = signed(&f, &quote);

        let auth = authorize(&f.registry, &quote, &sig, &f.policy).unwrap();
        assert_eq!(auth.digest(), quote.hash());
        assert_eq!(auth.provider().id(), ProviderId::FIRST);
    }

    #[test]
    fn test_unknown_provider() {
        let f = fixture("both");
        let stranger = TestKey::from_seed(2);
        let quote = Quote::from(sample_pegin_quote(f.bridge, stranger.address()));
        let sig = stranger.sign(&quote.hash());

        let err = authorize(&f.registry, &quote, &sig, &f.policy).unwrap_err();
        assert_eq!(
            err,
            QuoteError::Provider(RegistryError::UnknownProvider(ProviderLookup::Owner(
                stranger.address()
            )))
        );
    }

    #[test]
    fn test_inactive_provider() {
        let mut f = fixture("both");
        f.registry
            .set_provider_status(f.lp.address(), ProviderId::FIRST, false)
            .unwrap();
        let quote = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));
        let sig = signed(&f, &quote);

        let err = authorize(&f.registry, &quote, &sig, &f.policy).unwrap_err();
        assert_eq!(
            err,
            QuoteError::Provider(RegistryError::ProviderInactive(ProviderId::FIRST))
        );
    }

    #[test]
    fn test_signature_from_someone_else() {
        let f = fixture("both");
        let quote = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));
        let sig = TestKey::from_seed(3).sign(&quote.hash());

        let err = authorize(&f.registry, &quote, &sig, &f.policy).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidSignature { .. }));
    }

    #[test]
    fn test_signature_over_other_quote() {
        let f = fixture("both");
        let quote = sample_pegin_quote(f.bridge, f.lp.address());
        let mut tampered = quote.clone();
        tampered.value += Wei::from(1u64);

        let sig = f.lp.sign(&quote.hash());
        let err = authorize(&f.registry, &Quote::from(tampered), &sig, &f.policy).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidSignature { .. }));
    }

    #[test]
    fn test_short_signature_is_invalid() {
        let f = fixture("both");
        let quote = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));

        let err = authorize(&f.registry, &quote, &[1, 2, 3], &f.policy).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidSignature { .. }));
    }

    #[test]
    fn test_impossible_recovery_byte_is_malformed() {
        let f = fixture("both");
        let quote = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));
        let mut sig = signed(&f, &quote);
        sig[64] = 5;

        let err = authorize(&f.registry, &quote, &sig, &f.policy).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::MalformedSignature(CryptoError::MalformedSignature(_))
        ));
    }

    #[test]
    fn test_wrong_bridge() {
        let f = fixture("both");
        let other = Address::repeat_byte(0xee);
        let quote = Quote::from(sample_pegin_quote(other, f.lp.address()));
        let sig = signed(&f, &quote);

        let err = authorize(&f.registry, &quote, &sig, &f.policy).unwrap_err();
        assert_eq!(
            err,
            QuoteError::WrongBridge {
                expected: f.bridge,
                got: other
            }
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let f = fixture("both");
        let quote = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));
        let sig = signed(&f, &quote);
        let deadline = quote.deadline();

        let at_deadline = AuthPolicy {
            now: deadline,
            ..f.policy
        };
        assert!(authorize(&f.registry, &quote, &sig, &at_deadline).is_ok());

        let past = AuthPolicy {
            now: deadline + 1,
            ..f.policy
        };
        let err = authorize(&f.registry, &quote, &sig, &past).unwrap_err();
        assert_eq!(
            err,
            QuoteError::QuoteExpired {
                deadline,
                now: deadline + 1
            }
        );
    }

    #[test]
    fn test_provider_type_gates_kind() {
        let f = fixture("pegin");
        let quote = Quote::from(sample_pegout_quote(f.bridge, f.lp.address()));
        let sig = signed(&f, &quote);

        let err = authorize(&f.registry, &quote, &sig, &f.policy).unwrap_err();
        assert_eq!(
            err,
            QuoteError::UnsupportedQuoteKind {
                id: ProviderId::FIRST,
                provider_type: ProviderType::PegIn,
                kind: QuoteKind::PegOut,
            }
        );

        let pegin = Quote::from(sample_pegin_quote(f.bridge, f.lp.address()));
        let sig = signed(&f, &pegin);
        assert!(authorize(&f.registry, &pegin, &sig, &f.policy).is_ok());
    }
}
