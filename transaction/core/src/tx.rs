// Copyright (c) 2023-2026 The Umbra Foundation

//! Payment transaction wire records.

use serde::{Deserialize, Serialize};

use crate::Utxo;

/// A payment transaction before signing: content hashes only.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct UnsignedPaymentTx {
    /// Content hashes of the consumed UTXOs.
    pub inputs: Vec<String>,
    /// Content hashes of the produced UTXOs.
    pub outputs: Vec<String>,
    /// Fee in base units, as a `0x`-hex string.
    pub fee: String,
}

/// A payment transaction with its MLSAG attached.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignedPaymentTx {
    /// The signed content.
    #[serde(flatten)]
    pub tx: UnsignedPaymentTx,
    /// MLSAG signature, hex-wrapped JSON.
    pub signature: String,
}

/// Everything a verifier needs: the signed hashes plus the full records
/// they commit to.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TxToVerify {
    /// The signed transaction.
    pub tx: SignedPaymentTx,
    /// Full records of the consumed UTXOs.
    pub inputs: Vec<Utxo>,
    /// Full records of the produced UTXOs.
    pub outputs: Vec<Utxo>,
}

/// Render a fee as its `0x`-hex wire form.
pub fn fee_to_hex(fee: u64) -> String {
    format!("0x{fee:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_renders_as_hex() {
        assert_eq!(fee_to_hex(10), "0xa");
        assert_eq!(fee_to_hex(0), "0x0");
        assert_eq!(fee_to_hex(255), "0xff");
    }

    #[test]
    fn signature_field_is_flattened() {
        let signed = SignedPaymentTx {
            tx: UnsignedPaymentTx {
                inputs: vec!["0xaa".to_string()],
                outputs: vec!["0xbb".to_string()],
                fee: "0xa".to_string(),
            },
            signature: "0xsig".to_string(),
        };
        let json = serde_json::to_string(&signed).unwrap();
        assert!(json.contains("\"inputs\""));
        assert!(json.contains("\"signature\""));
        assert!(!json.contains("\"tx\""));
        let back: SignedPaymentTx = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signed);
    }
}
