//! # Hashing Entry Points
//!
//! The public surface: one hasher per condition dialect, one for unified
//! mixed sequences, and two for signing resource identifiers. Each call is
//! independent and stateless: canonicalize every item in sequence order,
//! serialize the ordered list of canonical forms through
//! [`CanonicalBytes`], digest with SHA-256.
//!
//! An empty sequence is not an error; it serializes to `[]` and hashes to
//! the fixed digest
//! `4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945`.
//!
//! The pre-hash payload is emitted at `debug` level through `tracing` for
//! cross-implementation debugging. The log is evaluated lazily, cannot
//! fail, and never influences the digest.

use tkms_conditions::{
    AccessControlConditions, EvmContractConditions, ResourceId, SolRpcConditions,
    UnifiedAccessControlConditions,
};

use crate::canonical::CanonicalBytes;
use crate::digest::{sha256_digest, ConditionDigest};
use crate::error::HashingError;
use crate::form::CanonicalCondition;
use crate::formatter::{
    canonical_access_control_condition, canonical_evm_contract_condition, canonical_resource_id,
    canonical_sol_rpc_condition, canonical_unified_condition,
};

/// Hash an EVM-basic condition sequence.
pub fn hash_access_control_conditions(
    conditions: &AccessControlConditions,
) -> Result<ConditionDigest, HashingError> {
    let canonical: Vec<CanonicalCondition> = conditions
        .iter()
        .map(canonical_access_control_condition)
        .collect();
    digest_sequence("access control conditions", &canonical)
}

/// Hash an EVM custom-contract condition sequence.
pub fn hash_evm_contract_conditions(
    conditions: &EvmContractConditions,
) -> Result<ConditionDigest, HashingError> {
    let canonical: Vec<CanonicalCondition> = conditions
        .iter()
        .map(canonical_evm_contract_condition)
        .collect();
    digest_sequence("evm contract conditions", &canonical)
}

/// Hash a Solana RPC condition sequence.
pub fn hash_sol_rpc_conditions(
    conditions: &SolRpcConditions,
) -> Result<ConditionDigest, HashingError> {
    let canonical: Vec<CanonicalCondition> =
        conditions.iter().map(canonical_sol_rpc_condition).collect();
    digest_sequence("sol rpc conditions", &canonical)
}

/// Hash a unified mixed-dialect condition sequence.
///
/// Every leaf is routed to its dialect's canonicalizer by its
/// `conditionType` discriminant, and the digest is computed over the
/// canonical forms. The discriminant is part of the hashed payload, so the
/// same logical check expressed in two dialects never collides.
pub fn hash_unified_access_control_conditions(
    conditions: &UnifiedAccessControlConditions,
) -> Result<ConditionDigest, HashingError> {
    let canonical: Vec<CanonicalCondition> = conditions
        .iter()
        .map(canonical_unified_condition)
        .collect();
    digest_sequence("unified access control conditions", &canonical)
}

/// Hash a signing resource identifier.
pub fn hash_resource_id(resource: &ResourceId) -> Result<ConditionDigest, HashingError> {
    let canonical = canonical_resource_id(resource);
    let bytes = CanonicalBytes::new(&canonical)?;
    tracing::debug!(payload = bytes.as_text(), "hashing resource id");
    Ok(sha256_digest(&bytes))
}

/// Hash a signing resource identifier and render the digest as lowercase
/// hex (unprefixed, 64 characters), the exact encoding signing requests
/// embed and signature verification recomputes.
pub fn hash_resource_id_for_signing(resource: &ResourceId) -> Result<String, HashingError> {
    Ok(hash_resource_id(resource)?.to_hex())
}

fn digest_sequence(
    kind: &'static str,
    canonical: &[CanonicalCondition],
) -> Result<ConditionDigest, HashingError> {
    let bytes = CanonicalBytes::new(&canonical)?;
    tracing::debug!(kind, payload = bytes.as_text(), "hashing condition sequence");
    Ok(sha256_digest(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tkms_conditions::{
        AccessControlCondition, BooleanOperator, ConditionItem, KeyedReturnValueTest,
        ReturnValueTest, SolRpcCondition, UnifiedCondition,
    };

    const EMPTY_SEQUENCE_HEX: &str =
        "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945";

    fn eth_balance_leaf(value: &str) -> AccessControlCondition {
        AccessControlCondition {
            contract_address: String::new(),
            chain: "ethereum".into(),
            standard_contract_type: String::new(),
            method: "eth_getBalance".into(),
            parameters: vec![":userAddress".into(), "latest".into()],
            return_value_test: ReturnValueTest {
                comparator: ">=".into(),
                value: value.into(),
            },
        }
    }

    fn sol_balance_leaf() -> SolRpcCondition {
        SolRpcCondition {
            method: "getBalance".into(),
            params: vec![json!(":userAddress")],
            pda_params: None,
            pda_interface: None,
            pda_key: None,
            chain: "solana".into(),
            return_value_test: KeyedReturnValueTest {
                key: String::new(),
                comparator: ">=".into(),
                value: "100000000".into(),
            },
        }
    }

    #[test]
    fn empty_sequences_hash_to_the_documented_constant() {
        assert_eq!(
            hash_access_control_conditions(&vec![]).unwrap().to_hex(),
            EMPTY_SEQUENCE_HEX
        );
        assert_eq!(
            hash_evm_contract_conditions(&vec![]).unwrap().to_hex(),
            EMPTY_SEQUENCE_HEX
        );
        assert_eq!(
            hash_sol_rpc_conditions(&vec![]).unwrap().to_hex(),
            EMPTY_SEQUENCE_HEX
        );
        assert_eq!(
            hash_unified_access_control_conditions(&vec![])
                .unwrap()
                .to_hex(),
            EMPTY_SEQUENCE_HEX
        );
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let seq = vec![
            ConditionItem::Condition(eth_balance_leaf("10000000000000")),
            ConditionItem::operator(BooleanOperator::Or),
            ConditionItem::Condition(eth_balance_leaf("0")),
        ];
        let a = hash_access_control_conditions(&seq).unwrap();
        let b = hash_access_control_conditions(&seq).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn adjacent_swap_changes_the_digest() {
        let ab = vec![
            ConditionItem::Condition(eth_balance_leaf("1")),
            ConditionItem::operator(BooleanOperator::And),
            ConditionItem::Condition(eth_balance_leaf("2")),
        ];
        let ba = vec![
            ConditionItem::Condition(eth_balance_leaf("2")),
            ConditionItem::operator(BooleanOperator::And),
            ConditionItem::Condition(eth_balance_leaf("1")),
        ];
        assert_ne!(
            hash_access_control_conditions(&ab).unwrap(),
            hash_access_control_conditions(&ba).unwrap()
        );
    }

    #[test]
    fn sequence_length_changes_the_digest() {
        let one = vec![ConditionItem::Condition(eth_balance_leaf("1"))];
        let two = vec![
            ConditionItem::Condition(eth_balance_leaf("1")),
            ConditionItem::Condition(eth_balance_leaf("1")),
        ];
        assert_ne!(
            hash_access_control_conditions(&one).unwrap(),
            hash_access_control_conditions(&two).unwrap()
        );
    }

    #[test]
    fn unified_mixed_sequence_is_order_sensitive() {
        let evm = UnifiedCondition::EvmBasic(eth_balance_leaf("1"));
        let sol = UnifiedCondition::SolRpc(sol_balance_leaf());
        let evm_and_sol = vec![
            ConditionItem::Condition(evm.clone()),
            ConditionItem::operator(BooleanOperator::And),
            ConditionItem::Condition(sol.clone()),
        ];
        let sol_and_evm = vec![
            ConditionItem::Condition(sol),
            ConditionItem::operator(BooleanOperator::And),
            ConditionItem::Condition(evm),
        ];
        let d1 = hash_unified_access_control_conditions(&evm_and_sol).unwrap();
        let d2 = hash_unified_access_control_conditions(&sol_and_evm).unwrap();
        assert_ne!(d1, d2);
        // And each is stable across calls.
        assert_eq!(
            d1,
            hash_unified_access_control_conditions(&evm_and_sol).unwrap()
        );
    }

    #[test]
    fn unified_digest_differs_from_per_dialect_digest() {
        // The discriminant is part of the unified payload, so the same leaf
        // hashed through the unified path must not collide with the
        // per-dialect path.
        let leaf = eth_balance_leaf("1");
        let plain = hash_access_control_conditions(&vec![ConditionItem::Condition(leaf.clone())])
            .unwrap();
        let unified = hash_unified_access_control_conditions(&vec![ConditionItem::Condition(
            UnifiedCondition::EvmBasic(leaf),
        )])
        .unwrap();
        assert_ne!(plain, unified);
    }

    #[test]
    fn float_in_sol_params_is_an_encoding_error() {
        let mut cond = sol_balance_leaf();
        cond.params.push(json!(0.5));
        let err = hash_sol_rpc_conditions(&vec![ConditionItem::Condition(cond)]).unwrap_err();
        assert!(matches!(err, HashingError::FloatRejected(_)));
    }

    #[test]
    fn resource_id_signing_hex_scenario() {
        let resource = ResourceId {
            base_url: "https://example.com".into(),
            path: "/a".into(),
            org_id: String::new(),
            role: String::new(),
            extra_data: String::new(),
        };
        let hex = hash_resource_id_for_signing(&resource).unwrap();
        assert_eq!(hex.len(), 64);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(hex, hash_resource_id_for_signing(&resource).unwrap());
        assert_eq!(hex, hash_resource_id(&resource).unwrap().to_hex());
    }

    #[test]
    fn resource_id_fields_are_all_load_bearing() {
        let base = ResourceId {
            base_url: "https://example.com".into(),
            path: "/a".into(),
            org_id: String::new(),
            role: String::new(),
            extra_data: String::new(),
        };
        let mut other = base.clone();
        other.extra_data = "x".into();
        assert_ne!(
            hash_resource_id(&base).unwrap(),
            hash_resource_id(&other).unwrap()
        );
    }
}
