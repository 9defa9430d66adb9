// Copyright (c) 2023-2026 The Umbra Foundation

//! Uniform sampling of scalars and indices from an injected RNG.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;

/// Sample a uniform nonzero integer below `bound` by rejection over 32-byte
/// draws.
///
/// `bound` must fit in 256 bits; both curve moduli do.
pub fn random_below(bound: &BigUint, rng: &mut dyn CryptoRngCore) -> BigUint {
    loop {
        let mut buf = [0u8; 32];
        rng.fill_bytes(&mut buf);
        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && &candidate < bound {
            return candidate;
        }
    }
}

/// Sample a uniform index in `[0, len)` without modulo bias.
///
/// `len` must be nonzero and fit in a `u32`.
pub fn random_index(len: usize, rng: &mut dyn CryptoRngCore) -> usize {
    debug_assert!(len > 0 && len <= u32::MAX as usize);
    let len = len as u32;
    let limit = u32::MAX - u32::MAX % len;
    loop {
        let draw = rng.next_u32();
        if draw < limit {
            return (draw % len) as usize;
        }
    }
}
