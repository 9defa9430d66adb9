// Copyright (c) 2023-2026 The Umbra Foundation

//! MLSAG ring signatures.
//!
//! An MLSAG (Multilayered Linkable Spontaneous Anonymous Group) signature
//! proves that one row of a matrix of public keys is fully owned by the
//! signer without revealing which, and binds a deterministic key image to
//! each owned key so double-spends are linkable. Umbra uses one MLSAG per
//! transaction: the first column carries the commitment-balance key and the
//! remaining columns the spent one-time UTXO keys.

#![deny(missing_docs)]

mod encoding;
mod error;
mod hash_to_point;
mod key_image;
mod mlsag;

pub use error::Error;
pub use hash_to_point::hash_to_point;
pub use key_image::key_image;
pub use mlsag::Mlsag;
