// Copyright (c) 2023-2026 The Umbra Foundation

//! RingCT transaction assembly.
//!
//! Takes the wallet's local outputs and a list of payment requests and
//! produces a signed transaction: greedy input selection, stealth output
//! construction with masked amounts and Pedersen commitments, and one MLSAG
//! that proves input ownership and commitment balance together.

#![deny(missing_docs)]

mod error;
mod input_selection;
mod ring_ct;
mod signer;

pub use error::Error;
pub use input_selection::select_inputs;
pub use ring_ct::{setup_ring_ct, OutputRequest, RingCtSetup};
pub use signer::{commitment_private_key, sign_ring_ct_tx, stealth_input_keys, SigningKeys};
