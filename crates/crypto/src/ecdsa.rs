//! Recoverable ECDSA signatures over personal-message-prefixed digests.

use alloy_primitives::{keccak256, Address};
use lbc_primitives::Digest;
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, PublicKey, SecretKey, SECP256K1,
};

use crate::{
    errors::{CryptoError, CryptoResult},
    hash::personal_message_hash,
};

/// Length of a `r || s || v` signature.
pub const SIGNATURE_LEN: usize = 65;

/// Offset added to the recovery id by wallets producing "legacy" `v` values.
const LEGACY_V_OFFSET: u8 = 27;

/// Derives the account address of a public key, the low 20 bytes of the
/// keccak hash of the uncompressed point without its `0x04` tag.
pub fn address_from_pubkey(pk: &PublicKey) -> Address {
    let uncompressed = pk.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    Address::from_slice(&hash[12..])
}

/// Derives the account address controlled by a secret key.
pub fn address_from_secret(sk: &SecretKey) -> Address {
    address_from_pubkey(&sk.public_key(SECP256K1))
}

/// Signs a digest, returning a `r || s || v` signature with `v` in `{27, 28}`.
pub fn sign_digest(sk: &SecretKey, digest: &Digest) -> [u8; SIGNATURE_LEN] {
    let prefixed = personal_message_hash(digest);
    let msg = Message::from_digest(prefixed.0);
    let sig = SECP256K1.sign_ecdsa_recoverable(&msg, sk);
    let (recid, compact) = sig.serialize_compact();

    let mut out = [0u8; SIGNATURE_LEN];
    out[..64].copy_from_slice(&compact);
    // recovery ids are always in 0..=3
    out[64] = recid.to_i32() as u8 + LEGACY_V_OFFSET;
    out
}

/// Splits a raw signature into its compact part and recovery id.
///
/// A signature of the wrong length can't be from anyone and parses to `None`.
/// A recovery byte no signer produces is a malformed encoding.
fn parse_signature(sig: &[u8]) -> CryptoResult<Option<([u8; 64], RecoveryId)>> {
    if sig.len() != SIGNATURE_LEN {
        return Ok(None);
    }

    let v = sig[64];
    let raw_recid = match v {
        0 | 1 => v,
        27 | 28 => v - LEGACY_V_OFFSET,
        _ => return Err(CryptoError::MalformedSignature("invalid recovery byte")),
    };
    let recid = RecoveryId::from_i32(i32::from(raw_recid))
        .map_err(|_| CryptoError::MalformedSignature("invalid recovery byte"))?;

    let mut compact = [0u8; 64];
    compact.copy_from_slice(&sig[..64]);
    Ok(Some((compact, recid)))
}

/// Recovers the address that signed `digest`.
///
/// Returns `Ok(None)` when the signature has the wrong length or does not
/// recover to any key (bad `r`/`s` scalars, point not on curve, ...).
pub fn recover_signer(digest: &Digest, sig: &[u8]) -> CryptoResult<Option<Address>> {
    let Some((compact, recid)) = parse_signature(sig)? else {
        return Ok(None);
    };

    let recoverable = match RecoverableSignature::from_compact(&compact, recid) {
        Ok(sig) => sig,
        Err(_) => return Ok(None),
    };

    let prefixed = personal_message_hash(digest);
    let msg = Message::from_digest(prefixed.0);

    match SECP256K1.recover_ecdsa(&msg, &recoverable) {
        Ok(pk) => Ok(Some(address_from_pubkey(&pk))),
        Err(_) => Ok(None),
    }
}

/// Checks that `sig` over `digest` was produced by `claimed_signer`.
pub fn verify(claimed_signer: Address, digest: &Digest, sig: &[u8]) -> CryptoResult<bool> {
    Ok(recover_signer(digest, sig)? == Some(claimed_signer))
}
