//! Deterministic and random signing identities.

use lbc_crypto::{address_from_secret, keccak, sign_digest, SecretKey, SIGNATURE_LEN};
use lbc_primitives::{Address, Digest};
use rand::{rngs::OsRng, Rng};

/// A secp256k1 key together with the address it controls.
#[derive(Clone, Debug)]
pub struct TestKey {
    sk: SecretKey,
    address: Address,
}

impl TestKey {
    /// Derives a key from a small seed.  The same seed always yields the same
    /// key, different seeds yield different keys.
    pub fn from_seed(seed: u8) -> Self {
        let material = keccak([b"lbc-test-key".as_slice(), &[seed]].concat());
        let sk = SecretKey::from_slice(material.as_slice()).expect("test: derived key in range");
        Self::from_secret(sk)
    }

    /// Fresh random key.
    pub fn random() -> Self {
        loop {
            let bytes: [u8; 32] = OsRng.gen();
            if let Ok(sk) = SecretKey::from_slice(&bytes) {
                return Self::from_secret(sk);
            }
        }
    }

    pub fn from_secret(sk: SecretKey) -> Self {
        Self {
            address: address_from_secret(&sk),
            sk,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn secret(&self) -> &SecretKey {
        &self.sk
    }

    /// Signs a digest the way a provider signs a quote.
    pub fn sign(&self, digest: &Digest) -> [u8; SIGNATURE_LEN] {
        sign_digest(&self.sk, digest)
    }
}
