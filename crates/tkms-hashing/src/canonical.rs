//! # Canonical Byte Production
//!
//! Defines [`CanonicalBytes`], the sole construction path for bytes that
//! enter digest computation.
//!
//! ## Security Invariant
//!
//! The inner buffer is private and the only constructor is
//! [`CanonicalBytes::new()`], which serializes via RFC 8785 (JSON
//! Canonicalization Scheme): lexicographically sorted keys, compact
//! separators, UTF-8 output. Any function that computes a digest must take
//! `&CanonicalBytes`, so no code path can hash a non-canonical encoding.
//!
//! ## Float Rejection
//!
//! Floats are rejected before serialization. The network's other condition
//! encoders run on JS engines whose float formatting has edge cases RFC
//! 8785 implementations disagree on in practice; integer and string values
//! round-trip identically everywhere, so those are the only numeric forms
//! admitted into a digest.

use serde::Serialize;
use serde_json::Value;

use crate::error::HashingError;

/// Bytes produced exclusively by RFC 8785 canonical serialization of a
/// float-free value tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Serialize a value into canonical bytes.
    ///
    /// This is the ONLY way to construct `CanonicalBytes`; every digest in
    /// this crate flows through it.
    ///
    /// # Errors
    ///
    /// [`HashingError::FloatRejected`] if the value contains a
    /// non-integral number, [`HashingError::Serialization`] if JSON
    /// serialization fails.
    pub fn new(value: &impl Serialize) -> Result<Self, HashingError> {
        let tree = serde_json::to_value(value)?;
        check_no_floats(&tree)?;
        let text = serde_jcs::to_string(&tree)?;
        Ok(Self(text.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The canonical serialization as text. Always valid UTF-8; used for
    /// diagnostic logging of the pre-hash payload.
    pub fn as_text(&self) -> &str {
        // Constructed from a String in new(); the buffer is UTF-8.
        std::str::from_utf8(&self.0).unwrap_or("<non-utf8 canonical bytes>")
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk a JSON value tree and reject any non-integral number.
fn check_no_floats(value: &Value) -> Result<(), HashingError> {
    match value {
        Value::Number(n) if n.is_f64() && !n.is_i64() && !n.is_u64() => {
            Err(HashingError::FloatRejected(n.as_f64().unwrap_or(f64::NAN)))
        }
        Value::Array(items) => items.iter().try_for_each(check_no_floats),
        Value::Object(map) => map.values().try_for_each(check_no_floats),
        _ => Ok(()),
    }
}
