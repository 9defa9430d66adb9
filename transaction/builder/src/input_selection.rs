// Copyright (c) 2023-2026 The Umbra Foundation

//! Greedy input selection over the wallet's amount-bucketed store.

use std::collections::BTreeMap;

use umbra_transaction_core::Utxo;

use crate::Error;

/// Select outputs to spend until their cleartext amounts reach `target`.
///
/// Buckets are walked in ascending amount order, so small outputs are
/// consumed first. Selection stops at the first output that meets the
/// target; nothing past it is touched.
pub fn select_inputs(
    available: &BTreeMap<u64, Vec<Utxo>>,
    target: u64,
) -> Result<(Vec<Utxo>, u64), Error> {
    if target == 0 {
        return Ok((Vec::new(), 0));
    }
    let mut selected = Vec::new();
    let mut total = 0u64;
    'buckets: for (amount, bucket) in available {
        for utxo in bucket {
            selected.push(utxo.clone());
            total = total.checked_add(*amount).ok_or(Error::AmountOverflow)?;
            if total >= target {
                break 'buckets;
            }
        }
    }
    if total < target {
        return Err(Error::InsufficientFunds(target, total));
    }
    Ok((selected, total))
}
