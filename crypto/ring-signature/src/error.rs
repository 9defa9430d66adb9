// Copyright (c) 2023-2026 The Umbra Foundation

//! Errors which can occur when producing or checking a ring signature.

use displaydoc::Display;

/// An error which can occur when producing or checking a ring signature.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Error {
    /// The ring, responses and key images do not form a consistent matrix
    MalformedRing,
    /// The challenge chain does not close over the ring
    InvalidSignature,
    /// The signature encoding is not hex-wrapped JSON in the expected shape
    InvalidEncoding,
    /// Curve arithmetic failed: {0}
    Curve(umbra_crypto_curve::Error),
}

impl From<umbra_crypto_curve::Error> for Error {
    fn from(src: umbra_crypto_curve::Error) -> Self {
        Self::Curve(src)
    }
}

impl std::error::Error for Error {}
