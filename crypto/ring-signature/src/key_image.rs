// Copyright (c) 2023-2026 The Umbra Foundation

//! Key images, the linkability tags of an MLSAG.

use num_bigint::BigUint;
use umbra_crypto_curve::{CurveContext, Error as CurveError, Point};

use crate::hash_to_point;

/// The key image `I = Hp(compress(G * private_key)) * private_key`.
///
/// The image is a deterministic function of the private key alone, so two
/// signatures spending the same key carry the same image and a ledger can
/// reject the second.
pub fn key_image(ctx: &CurveContext, private_key: &BigUint) -> Result<Point, CurveError> {
    let public_key = ctx.generator().mul(ctx, private_key)?;
    hash_to_point(ctx, &public_key.compress())?.mul(ctx, private_key)
}
