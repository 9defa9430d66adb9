// Copyright (c) 2023-2026 The Umbra Foundation

//! Keccak-256 over UTF-8 strings, the protocol's single hashing convention.

use num_bigint::BigUint;
use sha3::{Digest, Keccak256};

/// Keccak-256 of the UTF-8 bytes of `input`, rendered as `0x` + 64 lowercase
/// hex digits.
///
/// Every hash on the wire uses this form, and derived hashes are computed
/// over the rendered string of an earlier hash, never over raw digest bytes.
pub fn keccak256(input: &str) -> String {
    format!("0x{}", hex::encode(Keccak256::digest(input.as_bytes())))
}

/// Keccak-256 of the UTF-8 bytes of `input`, interpreted as a big-endian
/// 256-bit integer.
///
/// The result is unreduced; callers reduce modulo the order they need.
pub fn keccak256_scalar(input: &str) -> BigUint {
    BigUint::from_bytes_be(&Keccak256::digest(input.as_bytes()))
}
