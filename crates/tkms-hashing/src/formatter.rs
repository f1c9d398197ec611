//! # Canonicalizers
//!
//! One pure function per condition dialect, mapping a wire item to its
//! [`CanonicalCondition`]. Each walks a single item (recursing into
//! groups), copies exactly the declared canonical fields, and applies the
//! dialect's value normalization:
//!
//! - EVM contract addresses are lowercased, so two trees differing only in
//!   the checksum casing of an address hash identically.
//! - Solana base58 values are case-significant and pass through untouched.
//! - ABI `internalType` annotations are dropped.
//!
//! The unified canonicalizer routes each leaf through an exhaustive match
//! on its dialect discriminant and stamps the discriminant into the
//! canonical form, so an EVM leaf and a Solana leaf can never serialize to
//! the same bytes.
//!
//! Canonicalizers never mutate their input and are total over the typed
//! shapes: unknown discriminants and malformed items are unrepresentable
//! here, having been rejected at the `tkms-conditions` ingestion boundary.

use tkms_conditions::{
    AbiParam, AccessControlCondition, ConditionItem, EvmContractCondition, FunctionAbi,
    KeyedReturnValueTest, ResourceId, ReturnValueTest, SolRpcCondition, UnifiedCondition,
};

use crate::form::{
    CanonicalAbiParam, CanonicalCondition, CanonicalEvmBasic, CanonicalEvmContract,
    CanonicalFunctionAbi, CanonicalKeyedReturnValueTest, CanonicalOperator, CanonicalPdaInterface,
    CanonicalResourceId, CanonicalReturnValueTest, CanonicalSolRpc,
};

/// Canonicalize one EVM-basic sequence item.
pub fn canonical_access_control_condition(
    item: &ConditionItem<AccessControlCondition>,
) -> CanonicalCondition {
    match item {
        ConditionItem::Operator(node) => CanonicalCondition::Operator(CanonicalOperator {
            operator: node.operator,
        }),
        ConditionItem::Condition(cond) => {
            CanonicalCondition::EvmBasic(canonical_evm_basic(cond, None))
        }
        ConditionItem::Group(items) => CanonicalCondition::Group(
            items.iter().map(canonical_access_control_condition).collect(),
        ),
    }
}

/// Canonicalize one EVM custom-contract sequence item.
pub fn canonical_evm_contract_condition(
    item: &ConditionItem<EvmContractCondition>,
) -> CanonicalCondition {
    match item {
        ConditionItem::Operator(node) => CanonicalCondition::Operator(CanonicalOperator {
            operator: node.operator,
        }),
        ConditionItem::Condition(cond) => {
            CanonicalCondition::EvmContract(canonical_evm_contract(cond, None))
        }
        ConditionItem::Group(items) => CanonicalCondition::Group(
            items.iter().map(canonical_evm_contract_condition).collect(),
        ),
    }
}

/// Canonicalize one Solana RPC sequence item.
pub fn canonical_sol_rpc_condition(item: &ConditionItem<SolRpcCondition>) -> CanonicalCondition {
    match item {
        ConditionItem::Operator(node) => CanonicalCondition::Operator(CanonicalOperator {
            operator: node.operator,
        }),
        ConditionItem::Condition(cond) => CanonicalCondition::SolRpc(canonical_sol_rpc(cond, None)),
        ConditionItem::Group(items) => {
            CanonicalCondition::Group(items.iter().map(canonical_sol_rpc_condition).collect())
        }
    }
}

/// Canonicalize one unified sequence item, routing each leaf by its
/// dialect discriminant. The match is exhaustive over the closed
/// [`UnifiedCondition`] enum, and every canonical leaf carries its
/// discriminant so cross-dialect collisions are structurally impossible.
pub fn canonical_unified_condition(item: &ConditionItem<UnifiedCondition>) -> CanonicalCondition {
    match item {
        ConditionItem::Operator(node) => CanonicalCondition::Operator(CanonicalOperator {
            operator: node.operator,
        }),
        ConditionItem::Condition(leaf) => match leaf {
            UnifiedCondition::EvmBasic(cond) => {
                CanonicalCondition::EvmBasic(canonical_evm_basic(cond, Some(leaf.condition_type())))
            }
            UnifiedCondition::EvmContract(cond) => CanonicalCondition::EvmContract(
                canonical_evm_contract(cond, Some(leaf.condition_type())),
            ),
            UnifiedCondition::SolRpc(cond) => {
                CanonicalCondition::SolRpc(canonical_sol_rpc(cond, Some(leaf.condition_type())))
            }
        },
        ConditionItem::Group(items) => {
            CanonicalCondition::Group(items.iter().map(canonical_unified_condition).collect())
        }
    }
}

/// Canonicalize a signing resource identifier.
pub fn canonical_resource_id(resource: &ResourceId) -> CanonicalResourceId {
    CanonicalResourceId {
        base_url: resource.base_url.clone(),
        path: resource.path.clone(),
        org_id: resource.org_id.clone(),
        role: resource.role.clone(),
        extra_data: resource.extra_data.clone(),
    }
}

fn canonical_evm_basic(
    cond: &AccessControlCondition,
    condition_type: Option<&'static str>,
) -> CanonicalEvmBasic {
    CanonicalEvmBasic {
        condition_type,
        contract_address: normalize_evm_address(&cond.contract_address),
        chain: cond.chain.clone(),
        standard_contract_type: cond.standard_contract_type.clone(),
        method: cond.method.clone(),
        parameters: cond.parameters.clone(),
        return_value_test: canonical_return_value_test(&cond.return_value_test),
    }
}

fn canonical_evm_contract(
    cond: &EvmContractCondition,
    condition_type: Option<&'static str>,
) -> CanonicalEvmContract {
    CanonicalEvmContract {
        condition_type,
        contract_address: normalize_evm_address(&cond.contract_address),
        function_name: cond.function_name.clone(),
        function_params: cond.function_params.clone(),
        function_abi: canonical_function_abi(&cond.function_abi),
        chain: cond.chain.clone(),
        return_value_test: canonical_keyed_return_value_test(&cond.return_value_test),
    }
}

fn canonical_sol_rpc(
    cond: &SolRpcCondition,
    condition_type: Option<&'static str>,
) -> CanonicalSolRpc {
    CanonicalSolRpc {
        condition_type,
        method: cond.method.clone(),
        params: cond.params.clone(),
        pda_params: cond.pda_params.clone(),
        pda_interface: cond.pda_interface.as_ref().map(|i| CanonicalPdaInterface {
            offset: i.offset,
            fields: i.fields.clone(),
        }),
        pda_key: cond.pda_key.clone(),
        chain: cond.chain.clone(),
        return_value_test: canonical_keyed_return_value_test(&cond.return_value_test),
    }
}

fn canonical_function_abi(abi: &FunctionAbi) -> CanonicalFunctionAbi {
    CanonicalFunctionAbi {
        name: abi.name.clone(),
        inputs: abi.inputs.iter().map(canonical_abi_param).collect(),
        outputs: abi.outputs.iter().map(canonical_abi_param).collect(),
        constant: abi.constant,
        state_mutability: abi.state_mutability.clone(),
    }
}

fn canonical_abi_param(param: &AbiParam) -> CanonicalAbiParam {
    // internalType is intentionally not carried over.
    CanonicalAbiParam {
        name: param.name.clone(),
        kind: param.kind.clone(),
    }
}

fn canonical_return_value_test(test: &ReturnValueTest) -> CanonicalReturnValueTest {
    CanonicalReturnValueTest {
        comparator: test.comparator.clone(),
        value: test.value.clone(),
    }
}

fn canonical_keyed_return_value_test(test: &KeyedReturnValueTest) -> CanonicalKeyedReturnValueTest {
    CanonicalKeyedReturnValueTest {
        key: test.key.clone(),
        comparator: test.comparator.clone(),
        value: test.value.clone(),
    }
}

/// Lowercase an EVM hex address. Applied to `contractAddress` fields only;
/// empty addresses (native-balance conditions) pass through unchanged.
fn normalize_evm_address(address: &str) -> String {
    address.to_ascii_lowercase()
}
