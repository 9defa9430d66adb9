// Copyright (c) 2023-2026 The Umbra Foundation

//! Umbra transaction primitives.
//!
//! The records and derivations every layer above the curve shares: spend and
//! view key pairs with their `um:` address form, one-time stealth output
//! keys, Diffie-Hellman masked amounts, Pedersen commitments and the UTXO
//! wire records the node understands.

#![deny(missing_docs)]

mod amount;
mod commitment;
mod error;
mod keys;
mod range_proof;
mod tx;
mod utxo;

pub use amount::{amount_from_string, amount_to_string, mask_amount, unmask_amount};
pub use commitment::{blinding_factor, commit, pedersen_h, PEDERSEN_H_SCALAR};
pub use error::Error;
pub use keys::{
    address_from_public_keys, derive_scalar, is_address_valid, owns_output,
    public_keys_from_address, stealth_private_key, stealth_public_key, UserKeys,
    ADDRESS_LENGTH, ADDRESS_PREFIX,
};
pub use range_proof::{IndRow, RangeProof};
pub use tx::{fee_to_hex, SignedPaymentTx, TxToVerify, UnsignedPaymentTx};
pub use utxo::{CoinbaseUtxo, ExitUtxo, PaymentUtxo, Utxo};

/// The only currency the payment flow accepts today.
pub const CURRENCY: &str = "ETH";

/// Fixed-point decimals of [`CURRENCY`].
pub const DECIMALS: u32 = 18;

/// Version tag stamped on every produced UTXO.
pub const VERSION: &str = "0x00";
