//! Hex key files.

use std::{fs, path::Path};

use anyhow::Context;
use lbc_crypto::SecretKey;
use rand::{rngs::OsRng, Rng};

/// Generates a fresh secp256k1 secret key.
pub(crate) fn generate_secret() -> SecretKey {
    loop {
        let bytes: [u8; 32] = OsRng.gen();
        // Out of range values are astronomically rare, just draw again.
        if let Ok(sk) = SecretKey::from_slice(&bytes) {
            return sk;
        }
    }
}

/// Parses a 32 byte hex secret key, with or without `0x`.
pub(crate) fn parse_secret(s: &str) -> anyhow::Result<SecretKey> {
    let s = s.trim();
    let raw = hex::decode(s.strip_prefix("0x").unwrap_or(s)).context("secret key is not hex")?;
    SecretKey::from_slice(&raw).context("invalid secp256k1 secret key")
}

pub(crate) fn read_secret(path: &Path) -> anyhow::Result<SecretKey> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading key file {}", path.display()))?;
    parse_secret(&raw)
}

pub(crate) fn encode_secret(sk: &SecretKey) -> String {
    hex::encode(sk.secret_bytes())
}

#[cfg(test)]
mod tests {
    use lbc_crypto::address_from_secret;

    use super::*;

    #[test]
    fn test_secret_hex_roundtrip() {
        let sk = generate_secret();
        let enc = encode_secret(&sk);
        assert_eq!(enc.len(), 64);
        assert_eq!(parse_secret(&enc).unwrap(), sk);
        assert_eq!(parse_secret(&format!("0x{enc}\n")).unwrap(), sk);
    }

    #[test]
    fn test_parse_secret_rejects_garbage() {
        assert!(parse_secret("zz").is_err());
        assert!(parse_secret(&"00".repeat(32)).is_err());
        assert!(parse_secret("0102").is_err());
    }

    #[test]
    fn test_read_secret_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lp.key");
        let one = format!("{}01", "00".repeat(31));
        fs::write(&path, &one).unwrap();

        let sk = read_secret(&path).unwrap();
        assert_eq!(
            address_from_secret(&sk).to_string(),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
        assert!(read_secret(&dir.path().join("missing.key")).is_err());
    }
}
