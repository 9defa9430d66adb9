// Copyright (c) 2023-2026 The Umbra Foundation

//! The amount-bucketed local UTXO store.
//!
//! Persisted state maps a cleartext amount (decimal string) to the JSON
//! array of outputs worth that amount. Amounts are unmasked once, at save
//! time, so spending never needs the network.

use std::collections::BTreeMap;

use umbra_crypto_curve::CurveContext;
use umbra_transaction_core::{unmask_amount, UserKeys, Utxo};

use crate::{WalletError, WalletHost};

/// Typed access to the UTXO buckets persisted on a host.
pub struct UtxoStore<'h, H: WalletHost> {
    host: &'h H,
}

impl<'h, H: WalletHost> UtxoStore<'h, H> {
    /// Wrap a host.
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Unmask and persist outputs the wallet owns.
    ///
    /// Exit outputs are not spendable from this wallet and are skipped.
    pub fn save_utxos(
        &self,
        ctx: &CurveContext,
        keys: &UserKeys,
        utxos: &[Utxo],
    ) -> Result<(), WalletError> {
        let mut state = self.host.get_state()?;
        for utxo in utxos {
            let amount = match cleartext_amount(ctx, keys, utxo)? {
                Some(amount) => amount,
                None => continue,
            };
            let key = amount.to_string();
            let mut bucket: Vec<Utxo> = match state.get(&key) {
                Some(raw) => serde_json::from_str(raw)?,
                None => Vec::new(),
            };
            bucket.push(utxo.clone());
            state.insert(key, serde_json::to_string(&bucket)?);
        }
        self.host.set_state(state)
    }

    /// All stored outputs, bucketed by cleartext amount in ascending order.
    pub fn local_utxos(&self) -> Result<BTreeMap<u64, Vec<Utxo>>, WalletError> {
        let state = self.host.get_state()?;
        let mut utxos = BTreeMap::new();
        for (key, raw) in state {
            let amount: u64 = key
                .parse()
                .map_err(|_| WalletError::Storage(format!("bad amount bucket: {key}")))?;
            utxos.insert(amount, serde_json::from_str::<Vec<Utxo>>(&raw)?);
        }
        Ok(utxos)
    }

    /// Remove spent outputs; empty buckets disappear with them.
    pub fn remove_utxos(&self, spent: &[(u64, Utxo)]) -> Result<(), WalletError> {
        let mut state = self.host.get_state()?;
        for (amount, utxo) in spent {
            let key = amount.to_string();
            let bucket: Vec<Utxo> = match state.get(&key) {
                Some(raw) => serde_json::from_str(raw)?,
                None => continue,
            };
            let remaining: Vec<Utxo> = bucket.into_iter().filter(|u| u != utxo).collect();
            if remaining.is_empty() {
                state.remove(&key);
            } else {
                state.insert(key, serde_json::to_string(&remaining)?);
            }
        }
        self.host.set_state(state)
    }

    /// Drop every stored output.
    pub fn clear(&self) -> Result<(), WalletError> {
        self.host.clear_state()
    }
}

/// The cleartext value of an output the wallet owns, or `None` when the
/// output cannot be spent from here.
fn cleartext_amount(
    ctx: &CurveContext,
    keys: &UserKeys,
    utxo: &Utxo,
) -> Result<Option<u64>, WalletError> {
    match utxo {
        Utxo::Payment(u) => Ok(Some(unmask_amount(
            ctx,
            &u.r_g,
            keys.view_private(),
            &u.amount,
        )?)),
        Utxo::Coinbase(u) => {
            let amount = u
                .amount
                .parse()
                .map_err(|_| WalletError::Storage(format!("bad coinbase amount: {}", u.amount)))?;
            Ok(Some(amount))
        }
        Utxo::Exit(_) => Ok(None),
    }
}
