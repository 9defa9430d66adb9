// Copyright (c) 2023-2026 The Umbra Foundation

//! Full payment flow: setup, sign, verify, commitment balance.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use rand::{rngs::StdRng, SeedableRng};
use umbra_crypto_curve::{random_below, CurveContext, Point};
use umbra_crypto_ring_signature::Mlsag;
use umbra_transaction_builder::{
    commitment_private_key, setup_ring_ct, sign_ring_ct_tx, stealth_input_keys, OutputRequest,
    SigningKeys,
};
use umbra_transaction_core::{
    address_from_public_keys, blinding_factor, commit, mask_amount, pedersen_h,
    stealth_public_key, unmask_amount, PaymentUtxo, RangeProof, UserKeys, Utxo, CURRENCY,
    VERSION,
};

fn payment_utxo_for(
    ctx: &CurveContext,
    owner: &UserKeys,
    value: u64,
    rng: &mut StdRng,
) -> Utxo {
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
fn pay_100_with_fee_10_from_a_200_utxo() {
    let ctx = CurveContext::secp256k1();
    let mut rng = StdRng::seed_from_u64(1234);

    let sender = UserKeys::from_private_scalars(
        &ctx,
        BigUint::from(123456888u64),
        BigUint::from(987654321u64),
    )
    .unwrap();
    let recipient_spend = ctx.generator().mul(&ctx, &BigUint::from(12u32)).unwrap();
    let recipient_view = ctx.generator().mul(&ctx, &BigUint::from(11u32)).unwrap();
    let recipient_address =
        address_from_public_keys(&recipient_spend.compress(), &recipient_view.compress());

    let mut available = BTreeMap::new();
    available.insert(200u64, vec![payment_utxo_for(&ctx, &sender, 200, &mut rng)]);

    let setup = setup_ring_ct(
        &ctx,
        &sender,
        &available,
        &[OutputRequest {
            address: recipient_address,
            value: 100,
        }],
        10,
        &mut rng,
    )
    .unwrap();

    // 200 in, 100 paid, 10 fee, 90 change.
    assert_eq!(setup.input_total, 200);
    assert_eq!(setup.outputs.len(), 2);
    let (payment, _) = &setup.outputs[0];
    assert_eq!(
        unmask_amount(&ctx, &payment.r_g, &BigUint::from(11u32), &payment.amount).unwrap(),
        100
    );
    let (change, _) = &setup.outputs[1];
    assert_eq!(
        unmask_amount(&ctx, &change.r_g, sender.view_private(), &change.amount).unwrap(),
        90
    );

    let utxo_private_keys = stealth_input_keys(
        &ctx,
        &setup.inputs,
        sender.view_private(),
        sender.spend_private(),
    )
    .unwrap();
    // The recovered one-time keys must own the inputs' public keys.
    for (key, input) in utxo_private_keys.iter().zip(&setup.inputs) {
        assert_eq!(
            ctx.generator().mul(&ctx, key).unwrap().compress(),
            input.public_key()
        );
    }

    let output_blindings: Vec<BigUint> =
        setup.outputs.iter().map(|(_, bf)| bf.clone()).collect();
    let commitment_key = commitment_private_key(
        &ctx,
        &setup.inputs,
        sender.view_private(),
        &output_blindings,
    )
    .unwrap();

    // sum(inputs) - sum(outputs) - H*fee lands on G*commitment_key.
    let mut balance = Point::identity();
    for input in &setup.inputs {
        balance = balance.add(&ctx, &Point::decompress(&ctx, input.commitment()).unwrap());
    }
    for (output, _) in &setup.outputs {
        balance = balance.add(
            &ctx,
            &Point::decompress(&ctx, &output.commitment)
                .unwrap()
                .negate(&ctx),
        );
    }
    let fee_part = pedersen_h(&ctx)
        .unwrap()
        .mul(&ctx, &BigUint::from(10u32))
        .unwrap();
    balance = balance.add(&ctx, &fee_part.negate(&ctx));
    assert_eq!(
        balance,
        ctx.generator().mul(&ctx, &commitment_key).unwrap()
    );

    let message = serde_json::to_string(&setup.unsigned_tx).unwrap();
    let decoys: Vec<Vec<Point>> = (0..3)
        .map(|_| {
            vec![ctx
                .generator()
                .mul(&ctx, &random_below(ctx.n(), &mut rng))
                .unwrap()]
        })
        .collect();
    let encoded = sign_ring_ct_tx(
        &ctx,
        &message,
        &SigningKeys {
            utxo_private_keys,
            commitment_key,
        },
        &decoys,
        &mut rng,
    )
    .unwrap();

    let signature = Mlsag::decode(&ctx, &encoded).unwrap();
    signature.verify(&ctx).unwrap();
    assert_eq!(signature.message, message);
    assert_eq!(signature.ring.len(), 4);
    assert!(signature.ring.iter().all(|row| row.len() == 2));
    assert_eq!(signature.key_images.len(), 2);
}
