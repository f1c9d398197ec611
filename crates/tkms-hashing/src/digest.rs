//! # Digest Engine
//!
//! SHA-256 over canonical bytes. One algorithm, everywhere: every hashing
//! entry point in this crate uses the same digest primitive, because nodes
//! cross-verify digests produced by independent implementations and a
//! per-entry-point algorithm choice would fork the verification contract.
//!
//! ## Security Invariant
//!
//! [`sha256_digest()`] accepts only `&CanonicalBytes`, never raw `&[u8]`.
//! This makes it a compile error to hash bytes that bypassed the
//! canonicalization pipeline.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A condition-tree digest: 32 opaque bytes, compared only by exact byte
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionDigest([u8; 32]);

impl ConditionDigest {
    /// Wrap raw digest bytes. Prefer [`sha256_digest()`].
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes, for embedding in on-chain condition hashes
    /// and signed payloads.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex: no prefix, two hex characters per byte, in
    /// byte order. This exact encoding is a wire-compatibility contract
    /// with downstream signature verification; 64 characters for the
    /// 256-bit digest.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ConditionDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for ConditionDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Compute the SHA-256 digest of canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ConditionDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ConditionDigest::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digest_is_deterministic() {
        let cb = CanonicalBytes::new(&json!({"a": 1})).unwrap();
        assert_eq!(sha256_digest(&cb), sha256_digest(&cb));
    }

    #[test]
    fn hex_is_lowercase_and_64_chars() {
        let cb = CanonicalBytes::new(&json!(["x"])).unwrap();
        let hex = sha256_digest(&cb).to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn known_vector_empty_array() {
        // SHA-256 of the two-byte string "[]".
        let cb = CanonicalBytes::new(&json!([])).unwrap();
        assert_eq!(
            sha256_digest(&cb).to_hex(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }

    #[test]
    fn display_matches_to_hex() {
        let cb = CanonicalBytes::new(&json!({"k": "v"})).unwrap();
        let d = sha256_digest(&cb);
        assert_eq!(format!("{d}"), d.to_hex());
    }
}
