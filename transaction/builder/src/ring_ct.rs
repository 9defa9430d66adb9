// Copyright (c) 2023-2026 The Umbra Foundation

//! RingCT setup: input selection and stealth output construction.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use umbra_crypto_curve::{keccak256, random_below, CurveContext};
use umbra_transaction_core::{
    blinding_factor, commit, fee_to_hex, mask_amount, public_keys_from_address,
    stealth_public_key, PaymentUtxo, RangeProof, UnsignedPaymentTx, UserKeys, Utxo, CURRENCY,
    VERSION,
};

use crate::{input_selection::select_inputs, Error};

/// One requested payment.
#[derive(Clone, Debug)]
pub struct OutputRequest {
    /// Recipient address, `um:` form.
    pub address: String,
    /// Value in base units.
    pub value: u64,
}

/// Everything `setup_ring_ct` produces: the unsigned transaction, the
/// selected inputs and the built outputs with their blinding factors.
#[derive(Clone, Debug, PartialEq)]
pub struct RingCtSetup {
    /// The transaction content to sign.
    pub unsigned_tx: UnsignedPaymentTx,
    /// The consumed local outputs.
    pub inputs: Vec<Utxo>,
    /// Sum of the consumed cleartext amounts.
    pub input_total: u64,
    /// Each produced output with its blinding factor; the change output, if
    /// any, is last.
    pub outputs: Vec<(PaymentUtxo, BigUint)>,
}

/// Assemble an unsigned RingCT payment.
///
/// Selects inputs covering requests plus fee, then builds one stealth output
/// per request and a change output back to the sender when the selection
/// overshoots. Every output gets a fresh ephemeral scalar, a masked amount
/// and a Pedersen commitment whose blinding factor is derived from the
/// Diffie-Hellman share and the output index.
pub fn setup_ring_ct(
    ctx: &CurveContext,
    sender: &UserKeys,
    available: &BTreeMap<u64, Vec<Utxo>>,
    requests: &[OutputRequest],
    fee: u64,
    rng: &mut dyn CryptoRngCore,
) -> Result<RingCtSetup, Error> {
    let mut requested = 0u64;
    for request in requests {
        requested = requested
            .checked_add(request.value)
            .ok_or(Error::AmountOverflow)?;
    }
    let target = requested.checked_add(fee).ok_or(Error::AmountOverflow)?;

    let (inputs, input_total) = select_inputs(available, target)?;
    for input in &inputs {
        if input.currency() != CURRENCY {
            return Err(Error::UnsupportedCurrency(input.currency().to_string()));
        }
    }

    let tx_hash = keccak256(&serde_json::to_string(&inputs)?);

    let mut outputs: Vec<(PaymentUtxo, BigUint)> = Vec::with_capacity(requests.len() + 1);
    for (index, request) in requests.iter().enumerate() {
        let (spend_pub, view_pub) = public_keys_from_address(ctx, &request.address)
            .map_err(|_| Error::InvalidAddress)?;
        outputs.push(build_output(
            ctx,
            &tx_hash,
            index as u64,
            &spend_pub,
            &view_pub,
            request.value,
            rng,
        )?);
    }

    let change = input_total - target;
    if change > 0 {
        outputs.push(build_output(
            ctx,
            &tx_hash,
            requests.len() as u64,
            sender.spend_public(),
            sender.view_public(),
            change,
            rng,
        )?);
    }

    let unsigned_tx = UnsignedPaymentTx {
        inputs: inputs
            .iter()
            .map(|utxo| utxo.content_hash())
            .collect::<Result<_, _>>()?,
        outputs: outputs
            .iter()
            .map(|(utxo, _)| Ok(keccak256(&serde_json::to_string(utxo)?)))
            .collect::<Result<_, Error>>()?,
        fee: fee_to_hex(fee),
    };

    Ok(RingCtSetup {
        unsigned_tx,
        inputs,
        input_total,
        outputs,
    })
}

fn build_output(
    ctx: &CurveContext,
    tx_hash: &str,
    output_index: u64,
    spend_pub: &umbra_crypto_curve::Point,
    view_pub: &umbra_crypto_curve::Point,
    value: u64,
    rng: &mut dyn CryptoRngCore,
) -> Result<(PaymentUtxo, BigUint), Error> {
    let r = random_below(ctx.n(), rng);
    let shared = view_pub.mul(ctx, &r)?;
    let bf = blinding_factor(&shared, output_index);
    let utxo = PaymentUtxo {
        version: VERSION.to_string(),
        transaction_hash: tx_hash.to_string(),
        output_index,
        public_key: stealth_public_key(ctx, spend_pub, view_pub, &r)?.compress(),
        unlock_time: None,
        amount: mask_amount(ctx, view_pub, &r, value as i128)?,
        currency: CURRENCY.to_string(),
        commitment: commit(ctx, value, &bf)?.compress(),
        range_proof: RangeProof::placeholder(),
        r_g: ctx.generator().mul(ctx, &r)?.compress(),
    };
    Ok((utxo, bf))
}
