// Copyright (c) 2023-2026 The Umbra Foundation

//! HTTP client for an Umbra node.

use serde::{Deserialize, Serialize};
use umbra_transaction_core::Utxo;

use crate::WalletError;

/// The `/ringct` submission body, wire contract v1.
///
/// `hash` is the Keccak content hash of the signed transaction JSON;
/// `inputs` and `outputs` are the full records the signed hashes commit to,
/// so the node can recompute them; `fee` is the `0x`-hex fee and
/// `signature` the hex-encoded MLSAG.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RingCtSubmission {
    /// Content hash of the signed transaction.
    pub hash: String,
    /// Full records of the consumed outputs.
    pub inputs: Vec<Utxo>,
    /// Full records of the produced outputs.
    pub outputs: Vec<Utxo>,
    /// Fee as a `0x`-hex string.
    pub fee: String,
    /// Hex-encoded MLSAG.
    pub signature: String,
}

#[derive(Deserialize)]
struct BlockHeader {
    block_number: u64,
}

#[derive(Deserialize)]
struct LastBlock {
    header: BlockHeader,
}

/// A thin JSON/HTTP client against a node's public API.
#[derive(Clone, Debug)]
pub struct NodeClient {
    base_url: String,
    client: reqwest::Client,
}

impl NodeClient {
    /// A client for the node at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the network's current UTXO set.
    pub async fn utxo_set(&self) -> Result<Vec<Utxo>, WalletError> {
        let url = format!("{}/utxo/set", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Index of the last sealed block.
    pub async fn last_block_index(&self) -> Result<u64, WalletError> {
        let url = format!("{}/block/last", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let last: LastBlock = response.json().await?;
        Ok(last.header.block_number)
    }

    /// Submit a signed RingCT transaction; returns the node's transaction
    /// id.
    pub async fn submit_ring_ct(
        &self,
        submission: &RingCtSubmission,
    ) -> Result<String, WalletError> {
        let url = format!("{}/ringct", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_wire_shape_is_stable() {
        let submission = RingCtSubmission {
            hash: "0xaa".to_string(),
            inputs: vec![],
            outputs: vec![],
            fee: "0xa".to_string(),
            signature: "0xsig".to_string(),
        };
        let json = serde_json::to_string(&submission).unwrap();
        for field in ["\"hash\"", "\"inputs\"", "\"outputs\"", "\"fee\"", "\"signature\""] {
            assert!(json.contains(field));
        }
    }
}
