//! # Solana Condition Shapes
//!
//! Solana conditions call an RPC method (balance lookup, token account
//! query) or read a program-derived account. Base58 values are
//! case-significant; nothing in this dialect is case-normalized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::evm::KeyedReturnValueTest;

/// Layout of the program-derived account a condition reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdaInterface {
    /// Byte offset of the structure within the account data.
    pub offset: u64,
    /// Borsh field layout descriptor, e.g. `"U64:8"`.
    pub fields: String,
}

/// Solana RPC leaf condition.
///
/// The PDA fields are present only for conditions that derive an account
/// address before querying; plain RPC conditions omit all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolRpcCondition {
    /// RPC method to invoke (e.g. `"getBalance"`, `"getTokenAccountBalance"`).
    pub method: String,
    /// Method parameters; heterogeneous per the Solana JSON-RPC spec.
    pub params: Vec<Value>,
    /// Seeds for program-derived address computation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_params: Option<Vec<Value>>,
    /// Layout of the derived account's data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_interface: Option<PdaInterface>,
    /// Program public key the address is derived under (base58).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pda_key: Option<String>,
    /// Chain identifier (`"solana"`, `"solanaDevnet"`, `"solanaTestnet"`).
    pub chain: String,
    /// Test applied to the returned value.
    pub return_value_test: KeyedReturnValueTest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rpc_condition_omits_pda_fields() {
        let json = r#"{
            "method": "getBalance",
            "params": [":userAddress"],
            "chain": "solana",
            "returnValueTest": {"key": "", "comparator": ">=", "value": "100000000"}
        }"#;
        let cond: SolRpcCondition = serde_json::from_str(json).unwrap();
        assert_eq!(cond.pda_params, None);
        assert_eq!(cond.pda_interface, None);
        // Omitted fields stay omitted on re-serialization.
        let out = serde_json::to_value(&cond).unwrap();
        assert!(out.get("pdaParams").is_none());
    }

    #[test]
    fn pda_condition_roundtrip() {
        let json = r#"{
            "method": "getAccountInfo",
            "params": [],
            "pdaParams": [":userAddress"],
            "pdaInterface": {"offset": 8, "fields": "U64:8"},
            "pdaKey": "BPFLoaderUpgradeab1e11111111111111111111111",
            "chain": "solana",
            "returnValueTest": {"key": "balance", "comparator": ">", "value": "0"}
        }"#;
        let cond: SolRpcCondition = serde_json::from_str(json).unwrap();
        assert_eq!(cond.pda_interface.as_ref().unwrap().offset, 8);
        let back: SolRpcCondition =
            serde_json::from_value(serde_json::to_value(&cond).unwrap()).unwrap();
        assert_eq!(back, cond);
    }
}
