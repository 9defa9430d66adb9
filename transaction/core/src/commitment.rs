// Copyright (c) 2023-2026 The Umbra Foundation

//! Pedersen commitments to output amounts.

use num_bigint::BigUint;
use umbra_crypto_curve::{keccak256, keccak256_scalar, CurveContext, Error as CurveError, Point};

/// Discrete log of the value generator `H` with respect to `G`.
///
/// NOT SECURE: a known `log_G H` lets anyone open a commitment to any value.
/// The deployed network commits with this generator, so it is kept until a
/// coordinated migration to a nothing-up-my-sleeve point.
pub const PEDERSEN_H_SCALAR: u64 = 123;

/// The value generator `H = G * 123`.
pub fn pedersen_h(ctx: &CurveContext) -> Result<Point, CurveError> {
    ctx.generator().mul(ctx, &BigUint::from(PEDERSEN_H_SCALAR))
}

/// Commit to `value` with blinding factor `blinding`: `G*bf + H*value`.
///
/// A zero value cannot be committed; the curve layer rejects the zero
/// scalar, and no output with value zero is ever built.
pub fn commit(ctx: &CurveContext, value: u64, blinding: &BigUint) -> Result<Point, CurveError> {
    let g_part = ctx.generator().mul(ctx, blinding)?;
    let h_part = pedersen_h(ctx)?.mul(ctx, &BigUint::from(value))?;
    Ok(g_part.add(ctx, &h_part))
}

/// The deterministic blinding factor shared between sender and receiver for
/// the output at `output_index`, derived from the Diffie-Hellman point
/// `view_pub * r`.
pub fn blinding_factor(shared_point: &Point, output_index: u64) -> BigUint {
    keccak256_scalar(&format!(
        "commitment mask{}{output_index}",
        keccak256(&shared_point.compress())
    ))
}
