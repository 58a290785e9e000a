use alloy_primitives::{eip191_hash_message, keccak256};
use lbc_primitives::Digest;

/// Keccak-256 over arbitrary bytes.
pub fn keccak(data: impl AsRef<[u8]>) -> Digest {
    keccak256(data)
}

/// Applies the personal-message prefix (`"\x19Ethereum Signed Message:\n32"`)
/// to a digest and hashes the result.  This is what wallets actually sign when
/// asked to sign a 32-byte digest.
pub fn personal_message_hash(digest: &Digest) -> Digest {
    eip191_hash_message(digest.as_slice())
}
