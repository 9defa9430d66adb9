// Copyright (c) 2023-2026 The Umbra Foundation

//! Errors which can occur during curve arithmetic and point decoding.

use displaydoc::Display;

/// An error which can occur during curve arithmetic and point decoding.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Error {
    /// The encoding is not a valid compressed point
    InvalidEncoding,
    /// The coordinates do not satisfy the curve equation
    PointNotOnCurve,
    /// The scalar is zero modulo the group order
    InvalidScalar,
    /// The element has no modular inverse
    NoInverse,
}

impl std::error::Error for Error {}
