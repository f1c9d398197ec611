//! # Canonical Forms
//!
//! The explicit discriminated-union output of the canonicalizers. A
//! canonical form has the same structural shape as its input item but a
//! *closed* field set: exactly the fields declared here enter the digest,
//! in the serialization order RFC 8785 assigns them, with dialect-specific
//! value normalization already applied. Fields a client may attach beyond
//! these (tooling annotations, ABI `internalType`, and so on) never reach
//! the digest.
//!
//! Canonical forms are serialize-only. They are produced by
//! [`crate::formatter`], consumed by [`crate::canonical::CanonicalBytes`],
//! and discarded; nothing deserializes one.

use serde::Serialize;
use serde_json::Value;

use tkms_conditions::BooleanOperator;

/// Canonical form of one condition item. Untagged: operators, leaves, and
/// groups are distinguished by shape, exactly as on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalCondition {
    /// Boolean connective.
    Operator(CanonicalOperator),
    /// EVM-basic leaf.
    EvmBasic(CanonicalEvmBasic),
    /// EVM custom-contract leaf.
    EvmContract(CanonicalEvmContract),
    /// Solana RPC leaf.
    SolRpc(CanonicalSolRpc),
    /// Nested sub-sequence, order preserved.
    Group(Vec<CanonicalCondition>),
}

/// Canonical operator node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanonicalOperator {
    /// The boolean connective.
    pub operator: BooleanOperator,
}

/// Canonical EVM-basic leaf. `contract_address` is lowercased.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEvmBasic {
    /// Dialect discriminant; present only on unified-sequence leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<&'static str>,
    /// Lowercased contract address.
    pub contract_address: String,
    /// Chain identifier.
    pub chain: String,
    /// Standard contract type.
    pub standard_contract_type: String,
    /// Method name.
    pub method: String,
    /// Method parameters, order preserved.
    pub parameters: Vec<String>,
    /// Return value comparison.
    pub return_value_test: CanonicalReturnValueTest,
}

/// Canonical `{comparator, value}` comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalReturnValueTest {
    /// Comparison operator.
    pub comparator: String,
    /// Expected value.
    pub value: String,
}

/// Canonical `{key, comparator, value}` comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalKeyedReturnValueTest {
    /// Key path into the returned value.
    pub key: String,
    /// Comparison operator.
    pub comparator: String,
    /// Expected value.
    pub value: String,
}

/// Canonical EVM custom-contract leaf. `contract_address` is lowercased and
/// the ABI is reduced to the fields that determine the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalEvmContract {
    /// Dialect discriminant; present only on unified-sequence leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<&'static str>,
    /// Lowercased contract address.
    pub contract_address: String,
    /// Function name.
    pub function_name: String,
    /// Call arguments, order preserved.
    pub function_params: Vec<Value>,
    /// Reduced ABI fragment.
    pub function_abi: CanonicalFunctionAbi,
    /// Chain identifier.
    pub chain: String,
    /// Return value comparison.
    pub return_value_test: CanonicalKeyedReturnValueTest,
}

/// Canonical ABI fragment: name, parameter names/types, the legacy
/// `constant` flag when the source ABI carried one, and state mutability.
/// `internalType` annotations are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalFunctionAbi {
    /// Function name.
    pub name: String,
    /// Input parameters.
    pub inputs: Vec<CanonicalAbiParam>,
    /// Output parameters.
    pub outputs: Vec<CanonicalAbiParam>,
    /// Legacy constant flag, kept only when present on input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    /// State mutability.
    pub state_mutability: String,
}

/// Canonical ABI parameter: name and Solidity type only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalAbiParam {
    /// Parameter name.
    pub name: String,
    /// Solidity type.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Canonical Solana RPC leaf. Base58 values are case-significant and pass
/// through byte-for-byte; PDA fields appear only when the source condition
/// carried them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSolRpc {
    /// Dialect discriminant; present only on unified-sequence leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<&'static str>,
    /// RPC method.
    pub method: String,
    /// Method parameters, order preserved.
    pub params: Vec<Value>,
    /// PDA derivation seeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_params: Option<Vec<Value>>,
    /// PDA account data layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_interface: Option<CanonicalPdaInterface>,
    /// PDA program key (base58, untouched).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_key: Option<String>,
    /// Chain identifier.
    pub chain: String,
    /// Return value comparison.
    pub return_value_test: CanonicalKeyedReturnValueTest,
}

/// Canonical PDA layout descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalPdaInterface {
    /// Byte offset into the account data.
    pub offset: u64,
    /// Borsh field layout descriptor.
    pub fields: String,
}

/// Canonical signing-resource record: exactly these five fields, nothing
/// else, values untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResourceId {
    /// Base URL.
    pub base_url: String,
    /// Resource path.
    pub path: String,
    /// Organization identifier.
    pub org_id: String,
    /// Requested role.
    pub role: String,
    /// Extra data bound into the digest.
    pub extra_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_serializes_like_wire_node() {
        let op = CanonicalCondition::Operator(CanonicalOperator {
            operator: BooleanOperator::And,
        });
        assert_eq!(
            serde_json::to_string(&op).unwrap(),
            r#"{"operator":"and"}"#
        );
    }

    #[test]
    fn absent_discriminant_is_omitted() {
        let leaf = CanonicalEvmBasic {
            condition_type: None,
            contract_address: String::new(),
            chain: "ethereum".into(),
            standard_contract_type: String::new(),
            method: "eth_getBalance".into(),
            parameters: vec![":userAddress".into()],
            return_value_test: CanonicalReturnValueTest {
                comparator: ">=".into(),
                value: "0".into(),
            },
        };
        let v = serde_json::to_value(&leaf).unwrap();
        assert!(v.get("conditionType").is_none());
    }

    #[test]
    fn present_discriminant_is_emitted() {
        let leaf = CanonicalSolRpc {
            condition_type: Some("solRpc"),
            method: "getBalance".into(),
            params: vec![],
            pda_params: None,
            pda_interface: None,
            pda_key: None,
            chain: "solana".into(),
            return_value_test: CanonicalKeyedReturnValueTest {
                key: String::new(),
                comparator: ">".into(),
                value: "0".into(),
            },
        };
        let v = serde_json::to_value(&leaf).unwrap();
        assert_eq!(v["conditionType"], "solRpc");
        assert!(v.get("pdaKey").is_none());
    }
}
