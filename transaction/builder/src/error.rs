// Copyright (c) 2023-2026 The Umbra Foundation

//! Errors which can occur while assembling or signing a transaction.

use displaydoc::Display;

/// An error which can occur while assembling or signing a transaction.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Error {
    /// Insufficient funds: needed {0} base units, have {1}
    InsufficientFunds(u64, u64),
    /// Unsupported currency: {0}
    UnsupportedCurrency(String),
    /// The recipient address is malformed
    InvalidAddress,
    /// The input carries no ephemeral key, so its blinding factor cannot be derived
    UnspendableInput,
    /// The requested amounts overflow 64 bits
    AmountOverflow,
    /// Transaction primitive failed: {0}
    Tx(umbra_transaction_core::Error),
    /// Ring signature failed: {0}
    Ring(umbra_crypto_ring_signature::Error),
    /// Curve arithmetic failed: {0}
    Curve(umbra_crypto_curve::Error),
}

impl From<umbra_transaction_core::Error> for Error {
    fn from(src: umbra_transaction_core::Error) -> Self {
        Self::Tx(src)
    }
}

impl From<umbra_crypto_ring_signature::Error> for Error {
    fn from(src: umbra_crypto_ring_signature::Error) -> Self {
        Self::Ring(src)
    }
}

impl From<umbra_crypto_curve::Error> for Error {
    fn from(src: umbra_crypto_curve::Error) -> Self {
        Self::Curve(src)
    }
}

impl From<serde_json::Error> for Error {
    fn from(src: serde_json::Error) -> Self {
        Self::Tx(src.into())
    }
}

impl std::error::Error for Error {}
