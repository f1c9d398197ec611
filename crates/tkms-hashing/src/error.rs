//! # Error Types
//!
//! Failures of the hashing pipeline. All errors use `thiserror`.
//!
//! There are deliberately few: canonicalizers are total over the typed
//! condition shapes (malformed trees are rejected earlier, at the
//! `tkms-conditions` ingestion boundary), so the only way a hash call fails
//! is a value the deterministic encoding cannot represent. Failures are
//! never retried — the inputs are pure values, so a failing call fails
//! identically forever — and never partial: either a digest over the whole
//! sequence is returned or the call errors as a whole.

use thiserror::Error;

/// Error producing the canonical byte encoding of a condition tree.
#[derive(Error, Debug)]
pub enum HashingError {
    /// A float appeared in a condition value. RFC 8785 number serialization
    /// has float edge cases that differ across ES/JSON implementations, so
    /// numeric condition values must be integers or strings.
    #[error("float values are not permitted in condition trees; use a string or integer: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("canonical serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
