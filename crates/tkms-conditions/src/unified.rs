//! # Unified Mixed-Chain Conditions
//!
//! A unified sequence mixes leaves of different dialects in one ordered
//! list. Each leaf carries a `conditionType` discriminant (`"evmBasic"`,
//! `"evmContract"`, `"solRpc"`) that routes it to its dialect's
//! canonicalizer. The enum is closed: routing is an exhaustive match, and
//! an unknown discriminant is a hard error at the ingestion boundary, never
//! a silent pass-through.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConditionError;
use crate::evm::{AccessControlCondition, EvmContractCondition};
use crate::item::{ConditionItem, UnifiedAccessControlConditions};
use crate::sol::SolRpcCondition;

/// A leaf of a unified sequence, tagged with its dialect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "conditionType", rename_all = "camelCase")]
pub enum UnifiedCondition {
    /// EVM-basic condition (`"conditionType": "evmBasic"`).
    EvmBasic(AccessControlCondition),
    /// EVM custom-contract condition (`"conditionType": "evmContract"`).
    EvmContract(EvmContractCondition),
    /// Solana RPC condition (`"conditionType": "solRpc"`).
    SolRpc(SolRpcCondition),
}

impl UnifiedCondition {
    /// Returns the wire discriminant for this leaf's dialect.
    pub fn condition_type(&self) -> &'static str {
        match self {
            Self::EvmBasic(_) => "evmBasic",
            Self::EvmContract(_) => "evmContract",
            Self::SolRpc(_) => "solRpc",
        }
    }
}

const KNOWN_CONDITION_TYPES: [&str; 3] = ["evmBasic", "evmContract", "solRpc"];

/// Parse a unified condition sequence from untyped JSON.
///
/// Routing failures are reported precisely: an unknown `conditionType`
/// yields [`ConditionError::UnknownConditionType`] rather than a generic
/// deserialization error, and an object that is neither an operator node
/// nor a discriminated leaf yields [`ConditionError::UnknownShape`].
pub fn unified_conditions_from_value(
    value: &Value,
) -> Result<UnifiedAccessControlConditions, ConditionError> {
    let Some(items) = value.as_array() else {
        return Err(ConditionError::NotASequence(json_kind(value).to_string()));
    };
    items.iter().map(unified_item_from_value).collect()
}

fn unified_item_from_value(value: &Value) -> Result<ConditionItem<UnifiedCondition>, ConditionError> {
    match value {
        Value::Array(items) => Ok(ConditionItem::Group(
            items
                .iter()
                .map(unified_item_from_value)
                .collect::<Result<_, _>>()?,
        )),
        Value::Object(map) => {
            if map.contains_key("operator") {
                return Ok(ConditionItem::Operator(serde_json::from_value(
                    value.clone(),
                )?));
            }
            match map.get("conditionType") {
                Some(Value::String(tag)) if KNOWN_CONDITION_TYPES.contains(&tag.as_str()) => Ok(
                    ConditionItem::Condition(serde_json::from_value(value.clone())?),
                ),
                Some(Value::String(tag)) => Err(ConditionError::UnknownConditionType {
                    got: tag.clone(),
                }),
                Some(other) => Err(ConditionError::UnknownShape(format!(
                    "conditionType must be a string, got {}",
                    json_kind(other)
                ))),
                None => Err(ConditionError::UnknownShape(
                    "object is neither an operator node nor a tagged leaf".to_string(),
                )),
            }
        }
        other => Err(ConditionError::UnknownShape(json_kind(other).to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
