// Copyright (c) 2023-2026 The Umbra Foundation

//! MLSAG signing and verification.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use umbra_crypto_curve::{
    keccak256_scalar, random_below, random_index, CurveContext, Point,
};

use crate::{hash_to_point, Error};

/// An MLSAG signature over a matrix of public keys.
///
/// Row `pi` of `ring` is the signer's; the other rows are decoys. Column `j`
/// of every row plays the same role (Umbra puts the commitment key in column
/// 0 and spent UTXO keys after it), and `key_images[j]` is the linkability
/// tag of the signer's key in column `j`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mlsag {
    /// The signed message.
    pub message: String,
    /// The ring matrix, signer row included.
    pub ring: Vec<Vec<Point>>,
    /// The row-0 challenge the verification chain must wrap back to.
    pub challenge: BigUint,
    /// One response scalar per ring entry.
    pub responses: Vec<Vec<BigUint>>,
    /// One key image per column.
    pub key_images: Vec<Point>,
}

impl Mlsag {
    /// Sign `message` with `private_keys`, hiding their public keys among
    /// `decoys`.
    ///
    /// Each decoy row must be as wide as `private_keys`. The signer row is
    /// inserted at a uniformly random index, so the returned ring has
    /// `decoys.len() + 1` rows.
    pub fn sign(
        ctx: &CurveContext,
        message: &str,
        private_keys: &[BigUint],
        decoys: &[Vec<Point>],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Self, Error> {
        if private_keys.is_empty() {
            return Err(Error::MalformedRing);
        }
        if decoys.iter().any(|row| row.len() != private_keys.len()) {
            return Err(Error::MalformedRing);
        }

        let generator = ctx.generator();
        let public_keys = private_keys
            .iter()
            .map(|key| generator.mul(ctx, key))
            .collect::<Result<Vec<_>, _>>()?;

        let key_images = private_keys
            .iter()
            .zip(&public_keys)
            .map(|(key, public_key)| {
                hash_to_point(ctx, &public_key.compress())?.mul(ctx, key)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pi = if decoys.is_empty() {
            0
        } else {
            random_index(decoys.len(), rng)
        };
        let mut ring: Vec<Vec<Point>> = Vec::with_capacity(decoys.len() + 1);
        ring.extend_from_slice(&decoys[..pi]);
        ring.push(public_keys.clone());
        ring.extend_from_slice(&decoys[pi..]);
        let rows = ring.len();
        let columns = private_keys.len();

        let mut responses: Vec<Vec<BigUint>> = ring
            .iter()
            .map(|row| row.iter().map(|_| random_below(ctx.p(), rng)).collect())
            .collect();
        let alpha: Vec<BigUint> = (0..columns).map(|_| random_below(ctx.p(), rng)).collect();

        // Challenge for the row after the signer, from the commitments alone.
        let mut key_points = Vec::with_capacity(columns);
        let mut image_points = Vec::with_capacity(columns);
        for j in 0..columns {
            key_points.push(generator.mul(ctx, &alpha[j])?);
            image_points
                .push(hash_to_point(ctx, &public_keys[j].compress())?.mul(ctx, &alpha[j])?);
        }
        let challenge_after_pi = challenge_hash(message, &key_points, &image_points);

        let mut challenges = vec![BigUint::zero(); rows];
        for step in (pi + 1)..(rows + pi + 1) {
            let index = step % rows;
            let prev = (index + rows - 1) % rows;
            if index == (pi + 1) % rows {
                challenges[index] = challenge_after_pi.clone();
                continue;
            }
            challenges[index] = chain_challenge(
                ctx,
                message,
                &ring[prev],
                &responses[prev],
                &challenges[prev],
                &key_images,
            )?;
        }

        // Close the ring: resp = alpha - c_pi * priv (mod n).
        let n = ctx.n();
        responses[pi] = alpha
            .iter()
            .zip(private_keys)
            .map(|(a, key)| {
                let product = (&challenges[pi] * key) % n;
                ((a % n) + n - product) % n
            })
            .collect();

        Ok(Self {
            message: message.to_string(),
            ring,
            challenge: challenges[0].clone(),
            responses,
            key_images,
        })
    }

    /// Recompute the challenge chain from the stored row-0 challenge and
    /// accept iff it wraps back to the same value.
    pub fn verify(&self, ctx: &CurveContext) -> Result<(), Error> {
        let rows = self.ring.len();
        let columns = self.key_images.len();
        if rows == 0 || columns == 0 {
            return Err(Error::MalformedRing);
        }
        if self.ring.iter().any(|row| row.len() != columns)
            || self.responses.len() != rows
            || self.responses.iter().any(|row| row.len() != columns)
        {
            return Err(Error::MalformedRing);
        }

        let mut challenge = self.challenge.clone();
        for i in 0..rows {
            challenge = chain_challenge(
                ctx,
                &self.message,
                &self.ring[i],
                &self.responses[i],
                &challenge,
                &self.key_images,
            )?;
        }
        if challenge == self.challenge {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}

/// The challenge contributed by one ring row:
/// `keccak(message || G*resp_j + P_j*c || Hp(P_j)*resp_j + I_j*c)`.
fn chain_challenge(
    ctx: &CurveContext,
    message: &str,
    row: &[Point],
    row_responses: &[BigUint],
    challenge: &BigUint,
    key_images: &[Point],
) -> Result<BigUint, Error> {
    let generator = ctx.generator();
    let mut key_points = Vec::with_capacity(row.len());
    let mut image_points = Vec::with_capacity(row.len());
    for (j, member) in row.iter().enumerate() {
        key_points.push(
            generator
                .mul(ctx, &row_responses[j])?
                .add(ctx, &member.mul(ctx, challenge)?),
        );
        image_points.push(
            hash_to_point(ctx, &member.compress())?
                .mul(ctx, &row_responses[j])?
                .add(ctx, &key_images[j].mul(ctx, challenge)?),
        );
    }
    Ok(challenge_hash(message, &key_points, &image_points))
}

fn challenge_hash(message: &str, key_points: &[Point], image_points: &[Point]) -> BigUint {
    let mut data = String::from(message);
    for point in key_points {
        data.push_str(&point.compress());
    }
    for point in image_points {
        data.push_str(&point.compress());
    }
    keccak256_scalar(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_image;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn ctx() -> CurveContext {
        CurveContext::secp256k1()
    }

    fn random_keys(ctx: &CurveContext, count: usize, rng: &mut StdRng) -> Vec<BigUint> {
        (0..count).map(|_| random_below(ctx.n(), rng)).collect()
    }

    fn random_decoys(
        ctx: &CurveContext,
        rows: usize,
        columns: usize,
        rng: &mut StdRng,
    ) -> Vec<Vec<Point>> {
        (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| {
                        ctx.generator()
                            .mul(ctx, &random_below(ctx.n(), rng))
                            .unwrap()
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn single_row_ring_verifies() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(1);
        let keys = random_keys(&ctx, 2, &mut rng);
        let signature = Mlsag::sign(&ctx, "lone signer", &keys, &[], &mut rng).unwrap();
        assert_eq!(signature.ring.len(), 1);
        signature.verify(&ctx).unwrap();
    }

    #[test]
    fn signer_key_images_match_standalone_computation() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(2);
        let keys = random_keys(&ctx, 3, &mut rng);
        let decoys = random_decoys(&ctx, 2, 3, &mut rng);
        let signature = Mlsag::sign(&ctx, "images", &keys, &decoys, &mut rng).unwrap();
        for (key, image) in keys.iter().zip(&signature.key_images) {
            assert_eq!(&key_image(&ctx, key).unwrap(), image);
        }
    }

    #[test]
    fn key_images_are_stable_across_signatures() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(3);
        let keys = random_keys(&ctx, 2, &mut rng);
        let decoys = random_decoys(&ctx, 3, 2, &mut rng);
        let first = Mlsag::sign(&ctx, "first", &keys, &decoys, &mut rng).unwrap();
        let second = Mlsag::sign(&ctx, "second", &keys, &decoys, &mut rng).unwrap();
        assert_eq!(first.key_images, second.key_images);
    }

    #[test]
    fn empty_key_set_is_rejected() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            Mlsag::sign(&ctx, "empty", &[], &[], &mut rng),
            Err(Error::MalformedRing)
        );
    }

    #[test]
    fn mismatched_decoy_width_is_rejected() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(5);
        let keys = random_keys(&ctx, 2, &mut rng);
        let decoys = random_decoys(&ctx, 1, 3, &mut rng);
        assert_eq!(
            Mlsag::sign(&ctx, "bad width", &keys, &decoys, &mut rng),
            Err(Error::MalformedRing)
        );
    }

    #[test]
    fn truncated_key_images_are_rejected() {
        let ctx = ctx();
        let mut rng = StdRng::seed_from_u64(6);
        let keys = random_keys(&ctx, 2, &mut rng);
        let decoys = random_decoys(&ctx, 2, 2, &mut rng);
        let mut signature = Mlsag::sign(&ctx, "truncated", &keys, &decoys, &mut rng).unwrap();
        signature.key_images.pop();
        assert_eq!(signature.verify(&ctx), Err(Error::MalformedRing));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(6))]

        #[test]
        fn sign_then_verify(seed: u64, rows in 1usize..4, columns in 1usize..4) {
            let ctx = ctx();
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = random_keys(&ctx, columns, &mut rng);
            let decoys = random_decoys(&ctx, rows, columns, &mut rng);
            let signature =
                Mlsag::sign(&ctx, "valid transaction", &keys, &decoys, &mut rng).unwrap();
            prop_assert_eq!(signature.ring.len(), rows + 1);
            prop_assert!(signature.verify(&ctx).is_ok());
        }

        #[test]
        fn tampered_message_fails(seed: u64) {
            let ctx = ctx();
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = random_keys(&ctx, 2, &mut rng);
            let decoys = random_decoys(&ctx, 2, 2, &mut rng);
            let mut signature =
                Mlsag::sign(&ctx, "original", &keys, &decoys, &mut rng).unwrap();
            signature.message = "altered".to_string();
            prop_assert_eq!(signature.verify(&ctx), Err(Error::InvalidSignature));
        }

        #[test]
        fn tampered_challenge_fails(seed: u64) {
            let ctx = ctx();
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = random_keys(&ctx, 2, &mut rng);
            let decoys = random_decoys(&ctx, 2, 2, &mut rng);
            let mut signature =
                Mlsag::sign(&ctx, "original", &keys, &decoys, &mut rng).unwrap();
            signature.challenge ^= BigUint::from(1u32);
            prop_assert_eq!(signature.verify(&ctx), Err(Error::InvalidSignature));
        }

        #[test]
        fn tampered_response_fails(seed: u64) {
            let ctx = ctx();
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = random_keys(&ctx, 2, &mut rng);
            let decoys = random_decoys(&ctx, 2, 2, &mut rng);
            let mut signature =
                Mlsag::sign(&ctx, "original", &keys, &decoys, &mut rng).unwrap();
            signature.responses[0][0] += 1u32;
            prop_assert_eq!(signature.verify(&ctx), Err(Error::InvalidSignature));
        }

        #[test]
        fn swapped_ring_member_fails(seed: u64) {
            let ctx = ctx();
            let mut rng = StdRng::seed_from_u64(seed);
            let keys = random_keys(&ctx, 2, &mut rng);
            let decoys = random_decoys(&ctx, 2, 2, &mut rng);
            let mut signature =
                Mlsag::sign(&ctx, "original", &keys, &decoys, &mut rng).unwrap();
            let replacement = ctx
                .generator()
                .mul(&ctx, &random_below(ctx.n(), &mut rng))
                .unwrap();
            signature.ring[0][0] = replacement;
            prop_assert_eq!(signature.verify(&ctx), Err(Error::InvalidSignature));
        }
    }
}
