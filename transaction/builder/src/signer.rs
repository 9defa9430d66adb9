// Copyright (c) 2023-2026 The Umbra Foundation

//! Transaction signing: one MLSAG over ownership and commitment balance.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use umbra_crypto_curve::{field::sub_mod, CurveContext, Point};
use umbra_crypto_ring_signature::{Error as RingError, Mlsag};
use umbra_transaction_core::{blinding_factor, stealth_private_key, Utxo};

use crate::Error;

/// The private material a transaction signature needs.
#[derive(Clone, Debug)]
pub struct SigningKeys {
    /// One-time private key of each consumed output.
    pub utxo_private_keys: Vec<BigUint>,
    /// Balance key: sum of input blindings minus sum of output blindings.
    pub commitment_key: BigUint,
}

/// Recover the one-time private keys of the wallet's own inputs.
pub fn stealth_input_keys(
    ctx: &CurveContext,
    inputs: &[Utxo],
    view_priv: &BigUint,
    spend_priv: &BigUint,
) -> Result<Vec<BigUint>, Error> {
    inputs
        .iter()
        .map(|input| {
            let r_g = input.ephemeral_key().ok_or(Error::UnspendableInput)?;
            let r_g = Point::decompress(ctx, r_g)?;
            Ok(stealth_private_key(ctx, &r_g, view_priv, spend_priv)?)
        })
        .collect()
}

/// The commitment balance key: `sum(input blindings) - sum(output
/// blindings)` modulo the group order.
///
/// Each input's blinding factor is re-derived from its Diffie-Hellman share
/// and its own output index, the same derivation its sender used.
pub fn commitment_private_key(
    ctx: &CurveContext,
    inputs: &[Utxo],
    view_priv: &BigUint,
    output_blindings: &[BigUint],
) -> Result<BigUint, Error> {
    let n = ctx.n();
    let mut input_sum = BigUint::from(0u32);
    for input in inputs {
        let r_g = input.ephemeral_key().ok_or(Error::UnspendableInput)?;
        let shared = Point::decompress(ctx, r_g)?.mul(ctx, view_priv)?;
        input_sum = (input_sum + blinding_factor(&shared, input.output_index())) % n;
    }
    let output_sum = output_blindings
        .iter()
        .fold(BigUint::from(0u32), |acc, bf| (acc + bf) % n);
    Ok(sub_mod(&input_sum, &output_sum, n))
}

/// Sign transaction content with an MLSAG that proves ownership of every
/// consumed output and balance of the commitments at once.
///
/// The commitment public key `G * commitment_key` is prepended as column 0
/// of every ring row, and the signature is produced with
/// `[commitment_key, utxo keys...]`. Returns the hex-encoded wire form.
pub fn sign_ring_ct_tx(
    ctx: &CurveContext,
    message: &str,
    keys: &SigningKeys,
    decoys: &[Vec<Point>],
    rng: &mut dyn CryptoRngCore,
) -> Result<String, Error> {
    if keys.utxo_private_keys.is_empty() {
        return Err(Error::Ring(RingError::MalformedRing));
    }
    if decoys
        .iter()
        .any(|row| row.len() != keys.utxo_private_keys.len())
    {
        return Err(Error::Ring(RingError::MalformedRing));
    }

    let commitment_pub = ctx.generator().mul(ctx, &keys.commitment_key)?;
    let widened: Vec<Vec<Point>> = decoys
        .iter()
        .map(|row| {
            let mut full = Vec::with_capacity(row.len() + 1);
            full.push(commitment_pub.clone());
            full.extend_from_slice(row);
            full
        })
        .collect();

    let mut all_keys = Vec::with_capacity(keys.utxo_private_keys.len() + 1);
    all_keys.push(keys.commitment_key.clone());
    all_keys.extend_from_slice(&keys.utxo_private_keys);

    Ok(Mlsag::sign(ctx, message, &all_keys, &widened, rng)?.encode()?)
}
