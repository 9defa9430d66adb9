// Copyright (c) 2023-2026 The Umbra Foundation

//! Ownership scanning over the network's UTXO set.

use std::collections::BTreeMap;

use umbra_crypto_curve::{CurveContext, Point};
use umbra_transaction_core::{owns_output, unmask_amount, UserKeys, Utxo};

use crate::WalletError;

/// Filter the outputs spendable by `keys` out of a UTXO set.
///
/// Exit outputs carry no ephemeral key and can never be spent from here, so
/// they are never selected.
pub fn select_owned_utxos(
    ctx: &CurveContext,
    utxos: &[Utxo],
    keys: &UserKeys,
) -> Result<Vec<Utxo>, WalletError> {
    let mut owned = Vec::new();
    for utxo in utxos {
        let r_g = match utxo.ephemeral_key() {
            Some(r_g) => r_g,
            None => continue,
        };
        let output_pub = Point::decompress(ctx, utxo.public_key())?;
        let r_g = Point::decompress(ctx, r_g)?;
        if owns_output(
            ctx,
            &output_pub,
            &r_g,
            keys.view_private(),
            keys.spend_public(),
        )? {
            owned.push(utxo.clone());
        }
    }
    Ok(owned)
}

/// The cleartext value of one owned output.
pub fn input_amount(ctx: &CurveContext, keys: &UserKeys, utxo: &Utxo) -> Result<u64, WalletError> {
    match utxo {
        Utxo::Payment(u) => {
            Ok(unmask_amount(ctx, &u.r_g, keys.view_private(), &u.amount)?)
        }
        Utxo::Coinbase(u) => u
            .amount
            .parse()
            .map_err(|_| WalletError::Storage(format!("bad coinbase amount: {}", u.amount))),
        Utxo::Exit(_) => Err(WalletError::Storage(
            "exit outputs have no spendable amount".to_string(),
        )),
    }
}

/// Per-currency balance of the outputs `keys` owns in `utxos`.
pub fn balances(
    ctx: &CurveContext,
    utxos: &[Utxo],
    keys: &UserKeys,
) -> Result<BTreeMap<String, u64>, WalletError> {
    let mut totals = BTreeMap::new();
    for utxo in select_owned_utxos(ctx, utxos, keys)? {
        let amount = input_amount(ctx, keys, &utxo)?;
        let entry = totals.entry(utxo.currency().to_string()).or_insert(0u64);
        *entry = entry
            .checked_add(amount)
            .ok_or_else(|| WalletError::Storage("balance overflow".to_string()))?;
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use umbra_crypto_curve::random_below;
    use umbra_transaction_core::{
        blinding_factor, commit, mask_amount, stealth_public_key, PaymentUtxo, RangeProof,
        CURRENCY, VERSION,
    };

    fn payment_for(ctx: &CurveContext, owner: &UserKeys, value: u64, rng: &mut StdRng) -> Utxo {
        let r = random_below(ctx.n(), rng);
        let shared = owner.view_public().mul(ctx, &r).unwrap();
        let bf = blinding_factor(&shared, 0);
        Utxo::Payment(PaymentUtxo {
            version: VERSION.to_string(),
            transaction_hash: "0xparent".to_string(),
            output_index: 0,
            public_key: stealth_public_key(ctx, owner.spend_public(), owner.view_public(), &r)
                .unwrap()
                .compress(),
            unlock_time: None,
            amount: mask_amount(ctx, owner.view_public(), &r, value as i128).unwrap(),
            currency: CURRENCY.to_string(),
            commitment: commit(ctx, value, &bf).unwrap().compress(),
            range_proof: RangeProof::placeholder(),
            r_g: ctx.generator().mul(ctx, &r).unwrap().compress(),
        })
    }

    #[test]
    fn scan_finds_only_owned_outputs() {
        let ctx = CurveContext::secp256k1();
        let mut rng = StdRng::seed_from_u64(81);
        let me = UserKeys::from_seed(&ctx, "me").unwrap();
        let them = UserKeys::from_seed(&ctx, "them").unwrap();

        let set = vec![
            payment_for(&ctx, &me, 100, &mut rng),
            payment_for(&ctx, &them, 70, &mut rng),
            payment_for(&ctx, &me, 30, &mut rng),
        ];
        let owned = select_owned_utxos(&ctx, &set, &me).unwrap();
        assert_eq!(owned.len(), 2);
        for utxo in &owned {
            assert_eq!(input_amount(&ctx, &me, utxo).unwrap() % 10, 0);
        }
    }

    #[test]
    fn balances_sum_per_currency() {
        let ctx = CurveContext::secp256k1();
        let mut rng = StdRng::seed_from_u64(82);
        let me = UserKeys::from_seed(&ctx, "me").unwrap();
        let them = UserKeys::from_seed(&ctx, "them").unwrap();

        let set = vec![
            payment_for(&ctx, &me, 100, &mut rng),
            payment_for(&ctx, &me, 30, &mut rng),
            payment_for(&ctx, &them, 999, &mut rng),
        ];
        let totals = balances(&ctx, &set, &me).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[CURRENCY], 130);
    }

    #[test]
    fn empty_set_has_no_balances() {
        let ctx = CurveContext::secp256k1();
        let me = UserKeys::from_seed(&ctx, "me").unwrap();
        assert!(balances(&ctx, &[], &me).unwrap().is_empty());
    }
}
