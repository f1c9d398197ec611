//! # EVM Condition Shapes
//!
//! Two EVM dialects exist. The basic dialect addresses standard contract
//! types (ERC20/ERC721/ERC1155 balance checks, native ETH balance, and the
//! like) through a small fixed vocabulary of methods. The contract dialect
//! calls an arbitrary view function and therefore carries the function ABI
//! inline so every node resolves the call identically.
//!
//! Field names mirror the client wire format (camelCase).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison applied to the value a node reads back from the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValueTest {
    /// Comparison operator (`"="`, `">"`, `">="`, `"<"`, `"<="`, `"contains"`).
    pub comparator: String,
    /// Expected value, as a string literal.
    pub value: String,
}

/// Comparison against one named key of a structured return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedReturnValueTest {
    /// Key path into the returned object; empty selects the whole value.
    pub key: String,
    /// Comparison operator.
    pub comparator: String,
    /// Expected value, as a string literal.
    pub value: String,
}

/// EVM-basic leaf condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlCondition {
    /// Target contract address; empty for native-balance conditions.
    pub contract_address: String,
    /// Chain identifier (e.g. `"ethereum"`, `"polygon"`).
    pub chain: String,
    /// Standard contract type (`"ERC20"`, `"ERC721"`, ...); empty for
    /// RPC-level methods such as `eth_getBalance`.
    pub standard_contract_type: String,
    /// Method to invoke.
    pub method: String,
    /// Method parameters; `":userAddress"` is substituted by the verifying
    /// node with the authenticated wallet address.
    pub parameters: Vec<String>,
    /// Test applied to the returned value.
    pub return_value_test: ReturnValueTest,
}

/// One parameter of a function ABI.
///
/// `internalType` is accepted on input because wallet tooling emits it, but
/// it is not part of the canonical form: two ABIs differing only in
/// `internalType` describe the same call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    /// Parameter name.
    pub name: String,
    /// Solidity type (`"address"`, `"uint256"`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Compiler-internal type annotation; ignored by canonicalization.
    #[serde(rename = "internalType", skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
}

/// ABI fragment for the view function an [`EvmContractCondition`] calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionAbi {
    /// Function name.
    pub name: String,
    /// Input parameters, in declaration order.
    pub inputs: Vec<AbiParam>,
    /// Output parameters, in declaration order.
    pub outputs: Vec<AbiParam>,
    /// Legacy `constant` flag; present only in pre-0.6 Solidity ABIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,
    /// State mutability (`"view"`, `"pure"`).
    pub state_mutability: String,
}

/// EVM custom-contract leaf condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmContractCondition {
    /// Target contract address.
    pub contract_address: String,
    /// Name of the view function to call.
    pub function_name: String,
    /// Call arguments; heterogeneous (strings, integers, booleans).
    pub function_params: Vec<Value>,
    /// ABI fragment describing the function.
    pub function_abi: FunctionAbi,
    /// Chain identifier.
    pub chain: String,
    /// Test applied to the (possibly structured) returned value.
    pub return_value_test: KeyedReturnValueTest,
}
