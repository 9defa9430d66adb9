// Copyright (c) 2023-2026 The Umbra Foundation

//! secp256k1 arithmetic built from first principles.
//!
//! Umbra's confidential-transaction protocol runs over secp256k1 with a
//! hex-string wire format, so this crate implements the curve directly on
//! arbitrary-precision integers rather than binding an external curve
//! library: field helpers over any modulus, the complete Renes-Costello-
//! Batina group law in projective coordinates, compressed point encoding,
//! and the Keccak-256 string hashing the protocol uses everywhere.
//!
//! All operations take an explicit [`CurveContext`] carrying the curve
//! parameters; there is no global curve state.

#![deny(missing_docs)]

mod context;
mod error;
mod hash;
mod point;
mod rand;

pub mod field;

pub use context::CurveContext;
pub use error::Error;
pub use hash::{keccak256, keccak256_scalar};
pub use point::Point;
pub use rand::{random_below, random_index};

pub use num_bigint::BigUint;
