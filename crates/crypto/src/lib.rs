//! Cryptographic primitives: hashing and message-prefixed ECDSA signatures.
//!
//! Identities are addresses derived from secp256k1 public keys, so verifying a
//! signature means recovering the public key and comparing the derived address
//! against the one we expected.

mod ecdsa;
mod errors;
mod hash;

pub use ecdsa::{
    address_from_pubkey, address_from_secret, recover_signer, sign_digest, verify,
    SIGNATURE_LEN,
};
pub use errors::{CryptoError, CryptoResult};
pub use hash::{keccak, personal_message_hash};
pub use secp256k1::{PublicKey, SecretKey};
