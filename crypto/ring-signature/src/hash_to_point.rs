// Copyright (c) 2023-2026 The Umbra Foundation

//! Deterministic mapping from strings to curve points.

use umbra_crypto_curve::{keccak256_scalar, CurveContext, Error as CurveError, Point};

/// Map a string to a curve point as `G * keccak256(data)`.
///
/// WARNING: the discrete log of the result with respect to `G` is public,
/// so this construction does not provide the unlinkability a true
/// hash-to-curve would give key images. It is kept because the deployed
/// network verifies against it; replacing it (behind this same signature)
/// is a prerequisite for any production use.
pub fn hash_to_point(ctx: &CurveContext, data: &str) -> Result<Point, CurveError> {
    ctx.generator().mul(ctx, &keccak256_scalar(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic_and_input_sensitive() {
        let ctx = CurveContext::secp256k1();
        let a = hash_to_point(&ctx, "input").unwrap();
        let b = hash_to_point(&ctx, "input").unwrap();
        let c = hash_to_point(&ctx, "other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_identity());
    }
}
