// Copyright (c) 2023-2026 The Umbra Foundation

//! Modular arithmetic over arbitrary-precision integers.
//!
//! Every helper takes the modulus explicitly, so the same code serves both
//! the coordinate field (mod `p`) and the scalar group (mod `n`).

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::Error;

/// Reduce a signed integer into `[0, m)`.
pub fn modulo(a: &BigInt, m: &BigUint) -> BigUint {
    let m_int = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut r = a % &m_int;
    if r.sign() == Sign::Minus {
        r += &m_int;
    }
    r.magnitude().clone()
}

/// `(a + b) mod m`
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, wrapping into `[0, m)`.
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// `(a * b) mod m`
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// `base^exp mod m`
pub fn mod_pow(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
    base.modpow(exp, m)
}

/// The multiplicative inverse of `a` modulo `m`, by the extended Euclidean
/// algorithm.
///
/// Returns [`Error::NoInverse`] when `gcd(a, m) != 1`, including `a == 0`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, Error> {
    if a.is_zero() || m.is_zero() {
        return Err(Error::NoInverse);
    }
    let mut r0 = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut r1 = BigInt::from_biguint(Sign::Plus, a % m);
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();
    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        let t2 = &t0 - &q * &t1;
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }
    if !r0.is_one() {
        return Err(Error::NoInverse);
    }
    Ok(modulo(&t0, m))
}
