// Copyright (c) 2023-2026 The Umbra Foundation

//! Diffie-Hellman amount masking and the fixed-point decimal codec.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use umbra_crypto_curve::{keccak256, keccak256_scalar, CurveContext, Point};

use crate::Error;

/// The low 64 bits of the amount-masking shared secret between one side's
/// private scalar and the other side's view point.
fn shared_mask(ctx: &CurveContext, point: &Point, scalar: &BigUint) -> Result<u64, Error> {
    let shared_point = point.mul(ctx, scalar)?;
    let secret = keccak256_scalar(&format!("amount{}", keccak256(&shared_point.compress())));
    let low = &secret & BigUint::from(u64::MAX);
    // Masked to 64 bits above, so the conversion cannot fail.
    Ok(low.to_u64().unwrap_or_default())
}

/// Mask `amount` so that only the holder of `receiver_view_pub`'s private
/// key can recover it, given the sender's ephemeral public key.
///
/// Returns a 64-character binary string. A negative amount yields the
/// all-zero mask rather than an error; callers have come to rely on that
/// quirk, so it is preserved and must not be tightened silently.
pub fn mask_amount(
    ctx: &CurveContext,
    receiver_view_pub: &Point,
    sender_priv: &BigUint,
    amount: i128,
) -> Result<String, Error> {
    if amount > u64::MAX as i128 {
        return Err(Error::AmountTooLarge);
    }
    if amount < 0 {
        return Ok("0".repeat(64));
    }
    let mask = shared_mask(ctx, receiver_view_pub, sender_priv)?;
    Ok(format!("{:064b}", amount as u64 ^ mask))
}

/// Recover a masked amount with the receiver's view private key and the
/// sender's ephemeral public key (`rG`, compressed).
///
/// Inputs shorter than 64 characters are left-padded with zeros before
/// unmasking, mirroring the masking side's fixed width.
pub fn unmask_amount(
    ctx: &CurveContext,
    sender_pub: &str,
    receiver_view_priv: &BigUint,
    masked: &str,
) -> Result<u64, Error> {
    let sender_point = Point::decompress(ctx, sender_pub)?;
    if masked.len() > 64 || masked.chars().any(|c| c != '0' && c != '1') {
        return Err(Error::InvalidMask);
    }
    let bits = u64::from_str_radix(masked, 2).map_err(|_| Error::InvalidMask)?;
    let mask = shared_mask(ctx, &sender_point, receiver_view_priv)?;
    Ok(bits ^ mask)
}

/// Render a base-unit amount as a human-readable decimal string.
pub fn amount_to_string(amount: u64, decimals: u32) -> String {
    let base = amount.to_string();
    let (integer, fraction) = if base.len() <= decimals as usize {
        ("0".to_string(), format!("{base:0>width$}", width = decimals as usize))
    } else {
        let split = base.len() - decimals as usize;
        (base[..split].to_string(), base[split..].to_string())
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Parse a human-readable decimal string into base units.
pub fn amount_from_string(text: &str, decimals: u32) -> Result<u64, Error> {
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text, ""),
    };
    if fraction.len() > decimals as usize {
        return Err(Error::DecimalPrecisionExceeded);
    }
    if integer.is_empty() && fraction.is_empty() {
        return Err(Error::InvalidAmount);
    }
    let mut digits = String::with_capacity(integer.len() + decimals as usize);
    digits.push_str(if integer.is_empty() { "0" } else { integer });
    digits.push_str(fraction);
    for _ in fraction.len()..decimals as usize {
        digits.push('0');
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidAmount);
    }
    digits.parse::<u64>().map_err(|_| Error::AmountTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use umbra_crypto_curve::random_below;

    fn ctx() -> CurveContext {
        CurveContext::secp256k1()
    }

    #[test]
    fn mask_then_unmask_recovers_the_amount() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(21);
        let view_priv = random_below(ctx.n(), &mut rng);
        let view_pub = ctx.generator().mul(&ctx, &view_priv).unwrap();
        let r = random_below(ctx.n(), &mut rng);
        let r_g = ctx.generator().mul(&ctx, &r).unwrap();

        for amount in [0u64, 1, 100, u64::MAX] {
            let masked = mask_amount(&ctx, &view_pub, &r, amount as i128).unwrap();
            assert_eq!(masked.len(), 64);
            assert!(masked.chars().all(|c| c == '0' || c == '1'));
            assert_eq!(
                unmask_amount(&ctx, &r_g.compress(), &view_priv, &masked).unwrap(),
                amount
            );
        }
    }

    #[test]
    fn oversized_amount_is_rejected() {
        let ctx = ctx();
        let view_pub = ctx.generator().double(&ctx);
        assert_eq!(
            mask_amount(&ctx, &view_pub, &BigUint::from(7u32), u64::MAX as i128 + 1),
            Err(Error::AmountTooLarge)
        );
    }

    #[test]
    fn negative_amount_yields_the_zero_mask() {
        let ctx = ctx();
        let view_pub = ctx.generator().double(&ctx);
        assert_eq!(
            mask_amount(&ctx, &view_pub, &BigUint::from(7u32), -1).unwrap(),
            "0".repeat(64)
        );
    }

    #[test]
    fn short_masks_are_padded() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(22);
        let view_priv = random_below(ctx.n(), &mut rng);
        let view_pub = ctx.generator().mul(&ctx, &view_priv).unwrap();
        let r = random_below(ctx.n(), &mut rng);
        let r_g = ctx.generator().mul(&ctx, &r).unwrap();

        let masked = mask_amount(&ctx, &view_pub, &r, 42).unwrap();
        let trimmed = masked.trim_start_matches('0');
        let recovered = unmask_amount(&ctx, &r_g.compress(), &view_priv, trimmed).unwrap();
        assert_eq!(recovered, 42);
    }

    #[test]
    fn malformed_masks_are_rejected() {
        let ctx = ctx();
        let r_g = ctx.generator().double(&ctx).compress();
        let priv_key = BigUint::from(9u32);
        assert_eq!(
            unmask_amount(&ctx, &r_g, &priv_key, &"2".repeat(64)),
            Err(Error::InvalidMask)
        );
        assert_eq!(
            unmask_amount(&ctx, &r_g, &priv_key, &"0".repeat(65)),
            Err(Error::InvalidMask)
        );
    }

    #[test]
    fn decimal_rendering_round_trips() {
        assert_eq!(amount_to_string(10_000_000_000_000_000, 18), "0.01");
        assert_eq!(amount_to_string(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(amount_to_string(0, 18), "0");
        assert_eq!(amount_to_string(100, 0), "100");

        assert_eq!(amount_from_string("0.01", 18).unwrap(), 10_000_000_000_000_000);
        assert_eq!(amount_from_string("1.5", 18).unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(amount_from_string("100", 0).unwrap(), 100);
        assert_eq!(amount_from_string("7", 2).unwrap(), 700);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(6))]

        #[test]
        fn any_amount_round_trips_through_the_mask(amount: u64, seed in 1u64..u64::MAX) {
            let ctx = ctx();
            let mut rng = StdRng::seed_from_u64(seed);
            let view_priv = random_below(ctx.n(), &mut rng);
            let view_pub = ctx.generator().mul(&ctx, &view_priv).unwrap();
            let r = random_below(ctx.n(), &mut rng);
            let r_g = ctx.generator().mul(&ctx, &r).unwrap();

            let masked = mask_amount(&ctx, &view_pub, &r, amount as i128).unwrap();
            let recovered = unmask_amount(&ctx, &r_g.compress(), &view_priv, &masked).unwrap();
            prop_assert_eq!(recovered, amount);
        }

        #[test]
        fn any_amount_round_trips_through_the_decimal_codec(amount: u64) {
            let text = amount_to_string(amount, 18);
            prop_assert_eq!(amount_from_string(&text, 18).unwrap(), amount);
        }
    }

    #[test]
    fn decimal_parsing_rejects_bad_input() {
        assert_eq!(
            amount_from_string("1.123", 2),
            Err(Error::DecimalPrecisionExceeded)
        );
        assert_eq!(amount_from_string("abc", 2), Err(Error::InvalidAmount));
        assert_eq!(amount_from_string(".", 2), Err(Error::InvalidAmount));
        assert_eq!(
            amount_from_string("99999999999999999999", 18),
            Err(Error::AmountTooLarge)
        );
    }
}
