// Copyright (c) 2023-2026 The Umbra Foundation

//! Errors which can occur when building transaction primitives.

use displaydoc::Display;

/// An error which can occur when building transaction primitives.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Error {
    /// The amount does not fit in 64 bits
    AmountTooLarge,
    /// The amount string carries more fractional digits than the currency allows
    DecimalPrecisionExceeded,
    /// The amount string is not a decimal number
    InvalidAmount,
    /// The masked amount is not a 64-character binary string
    InvalidMask,
    /// The address is not `um:` followed by two compressed points
    InvalidAddress,
    /// A record could not be serialized: {0}
    Serialization(String),
    /// Curve arithmetic failed: {0}
    Curve(umbra_crypto_curve::Error),
}

impl From<umbra_crypto_curve::Error> for Error {
    fn from(src: umbra_crypto_curve::Error) -> Self {
        Self::Curve(src)
    }
}

impl From<serde_json::Error> for Error {
    fn from(src: serde_json::Error) -> Self {
        Self::Serialization(src.to_string())
    }
}

impl std::error::Error for Error {}
