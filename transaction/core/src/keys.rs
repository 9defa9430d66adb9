// Copyright (c) 2023-2026 The Umbra Foundation

//! Spend/view key pairs, the `um:` address form and one-time stealth keys.

use num_bigint::BigUint;
use umbra_crypto_curve::{keccak256_scalar, CurveContext, Point};

use crate::Error;

/// Prefix of every Umbra address.
pub const ADDRESS_PREFIX: &str = "um:";

/// Length of a valid address: the prefix plus two compressed points.
pub const ADDRESS_LENGTH: usize = ADDRESS_PREFIX.len() + 2 * 66;

/// Derive a private scalar from seed entropy and a domain label.
pub fn derive_scalar(seed: &str, label: &str) -> BigUint {
    keccak256_scalar(&format!("{seed}{label}"))
}

/// A user's long-lived spend and view key pairs.
///
/// The spend key authorizes outgoing payments; the view key only lets its
/// holder recognize incoming outputs and unmask their amounts.
#[derive(Clone, Debug)]
pub struct UserKeys {
    spend_private: BigUint,
    view_private: BigUint,
    spend_public: Point,
    view_public: Point,
}

impl UserKeys {
    /// Derive both key pairs from seed entropy.
    pub fn from_seed(ctx: &CurveContext, seed: &str) -> Result<Self, Error> {
        let spend_private = derive_scalar(seed, "SPEND");
        let view_private = derive_scalar(seed, "VIEW");
        let generator = ctx.generator();
        Ok(Self {
            spend_public: generator.mul(ctx, &spend_private)?,
            view_public: generator.mul(ctx, &view_private)?,
            spend_private,
            view_private,
        })
    }

    /// Build key pairs from explicit private scalars.
    pub fn from_private_scalars(
        ctx: &CurveContext,
        spend_private: BigUint,
        view_private: BigUint,
    ) -> Result<Self, Error> {
        let generator = ctx.generator();
        Ok(Self {
            spend_public: generator.mul(ctx, &spend_private)?,
            view_public: generator.mul(ctx, &view_private)?,
            spend_private,
            view_private,
        })
    }

    /// The spend private scalar.
    pub fn spend_private(&self) -> &BigUint {
        &self.spend_private
    }

    /// The view private scalar.
    pub fn view_private(&self) -> &BigUint {
        &self.view_private
    }

    /// The spend public point.
    pub fn spend_public(&self) -> &Point {
        &self.spend_public
    }

    /// The view public point.
    pub fn view_public(&self) -> &Point {
        &self.view_public
    }

    /// The user's address.
    pub fn address(&self) -> String {
        address_from_public_keys(&self.spend_public.compress(), &self.view_public.compress())
    }
}

/// Assemble an address from two compressed public keys.
pub fn address_from_public_keys(spend_pub: &str, view_pub: &str) -> String {
    format!("{ADDRESS_PREFIX}{spend_pub}{view_pub}")
}

/// Whether `address` parses into two valid public points.
pub fn is_address_valid(ctx: &CurveContext, address: &str) -> bool {
    public_keys_from_address(ctx, address).is_ok()
}

/// Split an address back into its `(spend, view)` public points.
pub fn public_keys_from_address(
    ctx: &CurveContext,
    address: &str,
) -> Result<(Point, Point), Error> {
    if !address.starts_with(ADDRESS_PREFIX) || address.len() != ADDRESS_LENGTH {
        return Err(Error::InvalidAddress);
    }
    let spend = Point::decompress(ctx, &address[3..69]).map_err(|_| Error::InvalidAddress)?;
    let view = Point::decompress(ctx, &address[69..135]).map_err(|_| Error::InvalidAddress)?;
    Ok((spend, view))
}

/// The one-time public key of an output paid to `(spend_pub, view_pub)` with
/// the ephemeral scalar `r`: `G * keccak(compress(view_pub * r)) + spend_pub`.
pub fn stealth_public_key(
    ctx: &CurveContext,
    recipient_spend_pub: &Point,
    recipient_view_pub: &Point,
    r: &BigUint,
) -> Result<Point, Error> {
    let shared = recipient_view_pub.mul(ctx, r)?;
    let tweak = keccak256_scalar(&shared.compress());
    Ok(ctx.generator().mul(ctx, &tweak)?.add(ctx, recipient_spend_pub))
}

/// The private key matching [`stealth_public_key`], recoverable by the
/// recipient from the sender's `rG`.
pub fn stealth_private_key(
    ctx: &CurveContext,
    r_g: &Point,
    view_priv: &BigUint,
    spend_priv: &BigUint,
) -> Result<BigUint, Error> {
    let shared = r_g.mul(ctx, view_priv)?;
    let tweak = keccak256_scalar(&shared.compress());
    Ok((tweak + spend_priv) % ctx.n())
}

/// Whether an output with one-time key `output_pub` and ephemeral key `r_g`
/// belongs to the holder of `view_priv` whose spend public key is
/// `spend_pub`.
pub fn owns_output(
    ctx: &CurveContext,
    output_pub: &Point,
    r_g: &Point,
    view_priv: &BigUint,
    spend_pub: &Point,
) -> Result<bool, Error> {
    let shared = r_g.mul(ctx, view_priv)?;
    let tweak = keccak256_scalar(&shared.compress());
    let tweak_point = ctx.generator().mul(ctx, &tweak)?;
    Ok(output_pub.add(ctx, &tweak_point.negate(ctx)) == *spend_pub)
}
