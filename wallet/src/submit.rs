// Copyright (c) 2023-2026 The Umbra Foundation

//! The wallet facade: sync, balances and the submission flow.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use tracing::{debug, info};
use umbra_crypto_curve::{keccak256, CurveContext, Point, random_index};
use umbra_transaction_builder::{
    commitment_private_key, setup_ring_ct, sign_ring_ct_tx, stealth_input_keys, OutputRequest,
    SigningKeys,
};
use umbra_transaction_core::{
    amount_to_string, SignedPaymentTx, UserKeys, Utxo, CURRENCY, DECIMALS,
};

use crate::{
    input_amount, select_owned_utxos, NodeClient, RingCtSubmission, UtxoStore, WalletError,
    WalletHost,
};

/// Decoy rows sampled into each ring.
pub const DECOY_RING_ROWS: usize = 5;

/// A wallet bound to a host and a node.
pub struct Wallet<H: WalletHost> {
    ctx: CurveContext,
    host: H,
    node: NodeClient,
    keys: UserKeys,
}

impl<H: WalletHost> Wallet<H> {
    /// Derive the wallet's keys from the host's seed entropy.
    pub fn new(host: H, node: NodeClient) -> Result<Self, WalletError> {
        let ctx = CurveContext::secp256k1();
        let seed = host.seed_entropy()?;
        let keys = UserKeys::from_seed(&ctx, &seed)?;
        Ok(Self {
            ctx,
            host,
            node,
            keys,
        })
    }

    /// The wallet's `um:` address.
    pub fn address(&self) -> String {
        self.keys.address()
    }

    /// Refresh the local store from the network's UTXO set.
    ///
    /// The store is rebuilt from scratch, so outputs spent elsewhere
    /// disappear and rescanning is idempotent.
    pub async fn sync(&self) -> Result<usize, WalletError> {
        let block = self.node.last_block_index().await?;
        let set = self.node.utxo_set().await?;
        debug!(block, set_size = set.len(), "fetched utxo set");
        let owned = select_owned_utxos(&self.ctx, &set, &self.keys)?;
        let store = UtxoStore::new(&self.host);
        store.clear()?;
        store.save_utxos(&self.ctx, &self.keys, &owned)?;
        info!(block, owned = owned.len(), "store rebuilt");
        Ok(owned.len())
    }

    /// Per-currency balance of the local store.
    pub fn local_balance(&self) -> Result<BTreeMap<String, u64>, WalletError> {
        let store = UtxoStore::new(&self.host);
        let mut totals: BTreeMap<String, u64> = BTreeMap::new();
        for (amount, bucket) in store.local_utxos()? {
            for utxo in bucket {
                let entry = totals.entry(utxo.currency().to_string()).or_insert(0);
                *entry = entry
                    .checked_add(amount)
                    .ok_or_else(|| WalletError::Storage("balance overflow".to_string()))?;
            }
        }
        Ok(totals)
    }

    /// Build, confirm, sign and broadcast a payment; returns the node's
    /// transaction id.
    ///
    /// The confirmation prompt comes before any network call or store
    /// mutation, and consumed outputs leave the store only after the node
    /// accepts the transaction, so a rejected or failed submission leaves
    /// the wallet exactly as it was.
    pub async fn submit_transaction(
        &self,
        requests: &[OutputRequest],
        fee: u64,
    ) -> Result<String, WalletError> {
        let store = UtxoStore::new(&self.host);
        let available = store.local_utxos()?;
        let mut rng = OsRng;

        let setup = setup_ring_ct(&self.ctx, &self.keys, &available, requests, fee, &mut rng)?;
        let message = serde_json::to_string(&setup.unsigned_tx)?;

        let prompt = render_prompt(requests, fee, &message);
        if !self.host.confirm(&prompt)? {
            info!("transaction rejected at the confirmation prompt");
            return Err(WalletError::UserRejected);
        }

        let utxo_private_keys = stealth_input_keys(
            &self.ctx,
            &setup.inputs,
            self.keys.view_private(),
            self.keys.spend_private(),
        )?;
        let output_blindings: Vec<BigUint> =
            setup.outputs.iter().map(|(_, bf)| bf.clone()).collect();
        let commitment_key = commitment_private_key(
            &self.ctx,
            &setup.inputs,
            self.keys.view_private(),
            &output_blindings,
        )?;

        let set = self.node.utxo_set().await?;
        let decoys = sample_decoys(
            &self.ctx,
            &set,
            &setup.inputs,
            utxo_private_keys.len(),
            &mut rng,
        )?;
        debug!(rows = decoys.len(), "decoy ring sampled");

        let signature = sign_ring_ct_tx(
            &self.ctx,
            &message,
            &SigningKeys {
                utxo_private_keys,
                commitment_key,
            },
            &decoys,
            &mut rng,
        )?;
        let signed = SignedPaymentTx {
            tx: setup.unsigned_tx.clone(),
            signature,
        };

        let submission = RingCtSubmission {
            hash: keccak256(&serde_json::to_string(&signed)?),
            inputs: setup.inputs.clone(),
            outputs: setup
                .outputs
                .iter()
                .map(|(utxo, _)| Utxo::Payment(utxo.clone()))
                .collect(),
            fee: signed.tx.fee.clone(),
            signature: signed.signature.clone(),
        };
        let tx_id = self.node.submit_ring_ct(&submission).await?;
        info!(%tx_id, "transaction accepted");

        // Only now is local state touched.
        let mut spent = Vec::with_capacity(setup.inputs.len());
        for input in &setup.inputs {
            spent.push((input_amount(&self.ctx, &self.keys, input)?, input.clone()));
        }
        store.remove_utxos(&spent)?;
        Ok(tx_id)
    }
}

/// The plain-text breakdown shown before signing.
fn render_prompt(requests: &[OutputRequest], fee: u64, message: &str) -> String {
    let details = requests
        .iter()
        .map(|request| {
            format!(
                "Recipient: {}, Currency: {CURRENCY}, Value: {}",
                request.address,
                amount_to_string(request.value, DECIMALS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are about to sign a transaction. Please review the details and confirm.\n\
         \n\
         Transaction details:\n{details}\n\
         Fee: {} {CURRENCY}\n\
         \n\
         !!! Please note that payments go to one-time addresses; funds sent to them \
         outside this transaction won't be accessible !!!\n\
         \n\
         Message to sign: {message}",
        amount_to_string(fee, DECIMALS)
    )
}

/// Sample decoy rows from the network's UTXO set, skipping the keys being
/// spent. Returns at most [`DECOY_RING_ROWS`] rows; fewer when the set is
/// small.
fn sample_decoys(
    ctx: &CurveContext,
    set: &[Utxo],
    inputs: &[Utxo],
    width: usize,
    rng: &mut dyn CryptoRngCore,
) -> Result<Vec<Vec<Point>>, WalletError> {
    let mut candidates = Vec::new();
    for utxo in set {
        if utxo.ephemeral_key().is_none() {
            continue;
        }
        if inputs.iter().any(|input| input.public_key() == utxo.public_key()) {
            continue;
        }
        candidates.push(Point::decompress(ctx, utxo.public_key())?);
    }

    let rows = DECOY_RING_ROWS.min(candidates.len() / width.max(1));
    let mut decoys = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            row.push(candidates.swap_remove(random_index(candidates.len(), rng)));
        }
        decoys.push(row);
    }
    Ok(decoys)
}
