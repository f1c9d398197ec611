//! # Error Types
//!
//! Failures surfaced when ingesting untyped condition JSON. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The typed shapes in this crate make malformed trees unrepresentable, so
//! these errors can only arise at the JSON boundary. They are never retried:
//! a malformed condition tree stays malformed, and silently skipping an
//! unrecognized item would break the collision-resistance guarantee of the
//! downstream digest.

use thiserror::Error;

/// Error ingesting an untyped condition tree.
#[derive(Error, Debug)]
pub enum ConditionError {
    /// A unified leaf carries a `conditionType` no dialect claims. Hard
    /// error: routing an item to the wrong canonicalizer, or to none, must
    /// never silently pass through.
    #[error("unknown conditionType {got:?}; expected one of \"evmBasic\", \"evmContract\", \"solRpc\"")]
    UnknownConditionType {
        /// The discriminant found on the item.
        got: String,
    },

    /// An item is neither an operator node, a group, nor a recognizable
    /// leaf shape.
    #[error("condition item has no recognizable shape: {0}")]
    UnknownShape(String),

    /// An item matched a known variant but its fields do not conform.
    #[error("malformed condition: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The top-level value is not an array.
    #[error("condition sequence must be a JSON array, got {0}")]
    NotASequence(String),
}
