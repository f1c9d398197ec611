//! # tkms-conditions — Access Control Condition Shapes
//!
//! Type definitions for the condition trees that gate decryption and signing
//! operations across the TKMS network. A condition sequence is an ordered,
//! flat list of leaf conditions joined by sibling boolean operators, with
//! nested sub-sequences for grouping. The order of the sequence encodes
//! operator precedence positionally and is semantically significant.
//!
//! Four sequence families exist, one per condition dialect:
//!
//! - [`AccessControlConditions`] — EVM-basic conditions (standard contract
//!   types: ERC20/ERC721/ERC1155 balances, ETH balance, and similar).
//! - [`EvmContractConditions`] — arbitrary EVM contract calls with an
//!   explicit function ABI.
//! - [`SolRpcConditions`] — Solana RPC conditions, optionally addressing a
//!   program-derived account.
//! - [`UnifiedAccessControlConditions`] — mixed sequences whose leaves carry
//!   a `conditionType` discriminant selecting their dialect.
//!
//! All wire field names are camelCase; the Rust shapes mirror the JSON that
//! clients submit to nodes verbatim.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tkms-*` crates (leaf of the DAG).
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod error;
pub mod evm;
pub mod item;
pub mod resource;
pub mod sol;
pub mod unified;

pub use error::ConditionError;
pub use evm::{
    AbiParam, AccessControlCondition, EvmContractCondition, FunctionAbi, KeyedReturnValueTest,
    ReturnValueTest,
};
pub use item::{
    AccessControlConditions, BooleanOperator, ConditionItem, EvmContractConditions, OperatorNode,
    SolRpcConditions, UnifiedAccessControlConditions,
};
pub use resource::ResourceId;
pub use sol::{PdaInterface, SolRpcCondition};
pub use unified::{unified_conditions_from_value, UnifiedCondition};
