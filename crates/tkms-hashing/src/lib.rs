//! # tkms-hashing — Deterministic Condition Hashing
//!
//! Computes the content digests that bind access control condition trees to
//! encrypted payloads and signing requests across the TKMS network. Every
//! node, in every process, on every platform, must derive the identical
//! digest for a semantically identical condition tree, because signatures
//! are later verified against these digests by parties that never exchanged
//! the serialized form.
//!
//! ## Pipeline
//!
//! ```text
//! ConditionSequence ──▶ Canonicalizer ──▶ CanonicalBytes ──▶ SHA-256 ──▶ ConditionDigest
//!   (per item,           (per-dialect       (RFC 8785,                      (32 bytes,
//!    order kept)          canonical form)    UTF-8)                          hex on demand)
//! ```
//!
//! ## Security Invariant
//!
//! [`ConditionDigest`] can only be computed from [`CanonicalBytes`], and
//! `CanonicalBytes` can only be constructed through the canonicalization
//! pipeline. Function signatures make it a compile error to hash bytes that
//! bypassed canonicalization, so the "wrong serialization path" defect class
//! is structurally impossible.
//!
//! Sequence order is semantic (it encodes operator precedence positionally)
//! and is preserved exactly; canonicalization normalizes *within* each item,
//! never across the sequence.
//!
//! ## Crate Policy
//!
//! - No shared mutable state; every entry point is a pure function plus an
//!   optional `tracing` diagnostic that cannot affect the result.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod form;
pub mod formatter;
pub mod hash;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ConditionDigest};
pub use error::HashingError;
pub use form::{CanonicalCondition, CanonicalResourceId};
pub use hash::{
    hash_access_control_conditions, hash_evm_contract_conditions, hash_resource_id,
    hash_resource_id_for_signing, hash_sol_rpc_conditions, hash_unified_access_control_conditions,
};
