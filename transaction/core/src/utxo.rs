// Copyright (c) 2023-2026 The Umbra Foundation

//! The UTXO wire records and their variant-detecting enum.

use serde::{Deserialize, Serialize};
use umbra_crypto_curve::keccak256;

use crate::{Error, RangeProof};

/// A confidential payment output.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaymentUtxo {
    /// Hex version tag.
    pub version: String,
    /// Content hash of the transaction that produced this output.
    pub transaction_hash: String,
    /// Index of this output within its transaction.
    pub output_index: u64,
    /// One-time public key of the owner, compressed.
    pub public_key: String,
    /// Timestamp before which this output cannot be spent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_time: Option<u64>,
    /// Masked amount, a 64-character binary string.
    pub amount: String,
    /// Cleartext currency code.
    pub currency: String,
    /// Pedersen commitment to the amount, compressed.
    pub commitment: String,
    /// Range proof of the amount.
    #[serde(rename = "rangeProof")]
    pub range_proof: RangeProof,
    /// The sender's ephemeral public key `G * r`, compressed.
    #[serde(rename = "rG")]
    pub r_g: String,
}

/// A block-reward output; its amount is public.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CoinbaseUtxo {
    /// Hex version tag.
    pub version: String,
    /// Content hash of the transaction that produced this output.
    pub transaction_hash: String,
    /// Index of this output within its transaction.
    pub output_index: u64,
    /// One-time public key of the owner, compressed.
    pub public_key: String,
    /// Timestamp before which this output cannot be spent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_time: Option<u64>,
    /// Cleartext decimal amount.
    pub amount: String,
    /// Cleartext currency code.
    pub currency: String,
    /// Pedersen commitment to the amount, compressed.
    pub commitment: String,
    /// The sender's ephemeral public key `G * r`, compressed.
    #[serde(rename = "rG")]
    pub r_g: String,
}

/// An output exiting to another chain.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExitUtxo {
    /// Hex version tag.
    pub version: String,
    /// Content hash of the transaction that produced this output.
    pub transaction_hash: String,
    /// Index of this output within its transaction.
    pub output_index: u64,
    /// One-time public key of the owner, compressed.
    pub public_key: String,
    /// Timestamp before which this output cannot be spent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_time: Option<u64>,
    /// Masked amount, a 64-character binary string.
    pub amount: String,
    /// Cleartext currency code.
    pub currency: String,
    /// Pedersen commitment to the amount, compressed.
    pub commitment: String,
    /// Destination chain identifier.
    #[serde(rename = "exitChain")]
    pub exit_chain: String,
}

/// Any output the node can hold.
///
/// The wire form carries no explicit tag; the variant is recognized by
/// shape, so `Payment` (which requires `rangeProof` and `rG`) must be tried
/// before `Coinbase`, and `Exit` is the only variant with `exitChain`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Utxo {
    /// A confidential payment output.
    Payment(PaymentUtxo),
    /// An output exiting to another chain.
    Exit(ExitUtxo),
    /// A block-reward output.
    Coinbase(CoinbaseUtxo),
}

impl Utxo {
    /// The one-time public key, compressed.
    pub fn public_key(&self) -> &str {
        match self {
            Utxo::Payment(u) => &u.public_key,
            Utxo::Exit(u) => &u.public_key,
            Utxo::Coinbase(u) => &u.public_key,
        }
    }

    /// The index this output had within its transaction.
    pub fn output_index(&self) -> u64 {
        match self {
            Utxo::Payment(u) => u.output_index,
            Utxo::Exit(u) => u.output_index,
            Utxo::Coinbase(u) => u.output_index,
        }
    }

    /// The amount field in its variant-specific encoding.
    pub fn amount(&self) -> &str {
        match self {
            Utxo::Payment(u) => &u.amount,
            Utxo::Exit(u) => &u.amount,
            Utxo::Coinbase(u) => &u.amount,
        }
    }

    /// The currency code.
    pub fn currency(&self) -> &str {
        match self {
            Utxo::Payment(u) => &u.currency,
            Utxo::Exit(u) => &u.currency,
            Utxo::Coinbase(u) => &u.currency,
        }
    }

    /// The amount commitment, compressed.
    pub fn commitment(&self) -> &str {
        match self {
            Utxo::Payment(u) => &u.commitment,
            Utxo::Exit(u) => &u.commitment,
            Utxo::Coinbase(u) => &u.commitment,
        }
    }

    /// The sender's ephemeral public key, absent on exit outputs.
    pub fn ephemeral_key(&self) -> Option<&str> {
        match self {
            Utxo::Payment(u) => Some(&u.r_g),
            Utxo::Coinbase(u) => Some(&u.r_g),
            Utxo::Exit(_) => None,
        }
    }

    /// Keccak-256 content hash of the record's JSON form.
    pub fn content_hash(&self) -> Result<String, Error> {
        Ok(keccak256(&serde_json::to_string(self)?))
    }
}
