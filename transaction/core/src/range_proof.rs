// Copyright (c) 2023-2026 The Umbra Foundation

//! Range-proof wire record.
//!
//! Only the shape is carried today; the node does not yet check proofs and
//! the wallet fills every field with a placeholder. The record exists so the
//! payment UTXO wire form is stable when real proofs land.

use serde::{Deserialize, Serialize};

/// One inner-product round of a range proof.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndRow {
    /// Left commitment of the round.
    #[serde(rename = "L")]
    pub l: String,
    /// Right commitment of the round.
    #[serde(rename = "R")]
    pub r: String,
}

/// A Bulletproof-shaped range proof record.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RangeProof {
    /// Value commitment.
    #[serde(rename = "V")]
    pub v: String,
    /// Bit commitment.
    #[serde(rename = "A")]
    pub a: String,
    /// Blinding commitment.
    #[serde(rename = "S")]
    pub s: String,
    /// First polynomial commitment.
    #[serde(rename = "T1")]
    pub t1: String,
    /// Second polynomial commitment.
    #[serde(rename = "T2")]
    pub t2: String,
    /// Polynomial evaluation.
    pub tx: String,
    /// Evaluation blinding.
    pub txbf: String,
    /// Synthetic challenge.
    pub e: String,
    /// Folded vector head, left.
    pub a0: String,
    /// Folded vector head, right.
    pub b0: String,
    /// Inner-product rounds.
    pub ind: Vec<IndRow>,
}

impl RangeProof {
    /// The placeholder proof the wallet attaches to every payment output.
    pub fn placeholder() -> Self {
        let s = || "string".to_string();
        Self {
            v: s(),
            a: s(),
            s: s(),
            t1: s(),
            t2: s(),
            tx: s(),
            txbf: s(),
            e: s(),
            a0: s(),
            b0: s(),
            ind: vec![IndRow { l: s(), r: s() }],
        }
    }
}
