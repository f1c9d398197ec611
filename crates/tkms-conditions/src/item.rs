//! # Condition Sequence Items
//!
//! A condition sequence is a flat, ordered list. Leaves and boolean
//! operators are *siblings* in that list (`[leaf, {"operator":"and"}, leaf]`),
//! not separate tree levels; a nested list forms a parenthesized group.
//!
//! Sequence order is load-bearing: it encodes operator precedence
//! positionally, and the hashing pipeline in `tkms-hashing` preserves it
//! exactly. Reordering two items is a semantic change and produces a
//! different digest.

use serde::{Deserialize, Serialize};

use crate::evm::{AccessControlCondition, EvmContractCondition};
use crate::sol::SolRpcCondition;
use crate::unified::UnifiedCondition;

/// Boolean connective joining the two adjacent items of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOperator {
    /// Both neighbors must be satisfied.
    And,
    /// Either neighbor may be satisfied.
    Or,
}

impl BooleanOperator {
    /// Returns the wire identifier (`"and"` / `"or"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// An operator node as it appears on the wire: `{"operator": "and"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorNode {
    /// The boolean connective.
    pub operator: BooleanOperator,
}

/// One entry of a condition sequence: a leaf condition of dialect `C`, a
/// boolean operator, or a nested group.
///
/// Untagged on the wire. Deserialization distinguishes the variants by
/// shape: an object with only an `operator` field is an operator node, an
/// array is a group, and any other object is a leaf of `C`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionItem<C> {
    /// Boolean connective between the adjacent siblings.
    Operator(OperatorNode),
    /// A leaf condition.
    Condition(C),
    /// A nested sub-sequence (parenthesized group).
    Group(Vec<ConditionItem<C>>),
}

impl<C> ConditionItem<C> {
    /// Convenience constructor for an operator item.
    pub fn operator(op: BooleanOperator) -> Self {
        Self::Operator(OperatorNode { operator: op })
    }
}

/// Ordered sequence of EVM-basic condition items.
pub type AccessControlConditions = Vec<ConditionItem<AccessControlCondition>>;

/// Ordered sequence of EVM custom-contract condition items.
pub type EvmContractConditions = Vec<ConditionItem<EvmContractCondition>>;

/// Ordered sequence of Solana RPC condition items.
pub type SolRpcConditions = Vec<ConditionItem<SolRpcCondition>>;

/// Ordered sequence of mixed-dialect condition items, each leaf tagged with
/// its `conditionType` discriminant.
pub type UnifiedAccessControlConditions = Vec<ConditionItem<UnifiedCondition>>;
