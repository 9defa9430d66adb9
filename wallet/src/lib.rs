// Copyright (c) 2023-2026 The Umbra Foundation

//! The Umbra wallet: key custody, output scanning, local storage and RingCT
//! submission.
//!
//! Everything that touches the outside world goes through two seams: a
//! [`WalletHost`] supplies entropy, persisted state and user confirmation,
//! and a [`NodeClient`] talks to an Umbra node over HTTP. The wallet logic
//! in between is host-agnostic and fully testable in memory.

mod error;
mod host;
mod node_api;
mod scan;
mod store;
mod submit;

pub use error::WalletError;
pub use host::{FileHost, MemoryHost, WalletHost};
pub use node_api::{NodeClient, RingCtSubmission};
pub use scan::{balances, input_amount, select_owned_utxos};
pub use store::UtxoStore;
pub use submit::{Wallet, DECOY_RING_ROWS};
