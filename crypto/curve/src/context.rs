// Copyright (c) 2023-2026 The Umbra Foundation

//! Curve parameters, passed explicitly to every group operation.

use num_bigint::BigUint;

use crate::Point;

/// The parameters of a short-Weierstrass curve `y^2 = x^3 + ax + b` over the
/// prime field `F_p`, with a base point of prime order `n`.
///
/// A context is built once and threaded by reference through all arithmetic,
/// so callers never depend on hidden global curve state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveContext {
    p: BigUint,
    n: BigUint,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
}

impl CurveContext {
    /// The secp256k1 parameters.
    pub fn secp256k1() -> Self {
        Self {
            p: parse_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
            n: parse_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
            a: BigUint::from(0u32),
            b: BigUint::from(7u32),
            gx: parse_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            gy: parse_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        }
    }

    /// The field modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The order of the base point.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The curve coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// The curve coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The base point `G`.
    pub fn generator(&self) -> Point {
        Point::new_unchecked(self.gx.clone(), self.gy.clone())
    }
}

/// Parse a hard-coded hexadecimal curve constant.
fn parse_hex(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 16).expect("hard-coded constant is valid hex")
}
