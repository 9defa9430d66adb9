// Copyright (c) 2023-2026 The Umbra Foundation

//! The wallet's error surface.

use thiserror::Error;

/// An error surfaced by the wallet layer.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The user declined the confirmation prompt. Nothing was sent and
    /// nothing was stored.
    #[error("user rejected the request")]
    UserRejected,

    /// A node request failed. Local state is untouched; retrying is safe.
    #[error("network error: {0}")]
    Network(String),

    /// Host state could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Transaction assembly or signing failed.
    #[error(transparent)]
    Tx(#[from] umbra_transaction_builder::Error),

    /// A transaction primitive failed.
    #[error(transparent)]
    Core(#[from] umbra_transaction_core::Error),

    /// A ring-signature operation failed.
    #[error(transparent)]
    Ring(#[from] umbra_crypto_ring_signature::Error),

    /// Curve arithmetic failed.
    #[error(transparent)]
    Curve(#[from] umbra_crypto_curve::Error),
}

impl From<reqwest::Error> for WalletError {
    fn from(src: reqwest::Error) -> Self {
        Self::Network(src.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(src: serde_json::Error) -> Self {
        Self::Storage(src.to_string())
    }
}
