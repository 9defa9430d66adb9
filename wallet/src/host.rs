// Copyright (c) 2023-2026 The Umbra Foundation

//! The host seam: entropy, persisted state and user confirmation.
//!
//! The wallet never reaches for a platform API directly. Everything
//! environment-specific is a capability on this trait, so the same logic
//! runs under the CLI, under tests and under any future embedding.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Mutex,
};

use rand::RngCore;
use zeroize::Zeroizing;

use crate::WalletError;

/// Capabilities the wallet requires from its embedding.
pub trait WalletHost {
    /// Show `prompt` to the user and return whether they explicitly agreed.
    fn confirm(&self, prompt: &str) -> Result<bool, WalletError>;

    /// The seed entropy the key pairs are derived from.
    fn seed_entropy(&self) -> Result<Zeroizing<String>, WalletError>;

    /// Read the persisted state map.
    fn get_state(&self) -> Result<BTreeMap<String, String>, WalletError>;

    /// Replace the persisted state map.
    fn set_state(&self, state: BTreeMap<String, String>) -> Result<(), WalletError>;

    /// Drop all persisted state.
    fn clear_state(&self) -> Result<(), WalletError> {
        self.set_state(BTreeMap::new())
    }
}

/// A host backed by files in a data directory, confirming over stdin.
pub struct FileHost {
    state_path: PathBuf,
    seed_path: PathBuf,
}

impl FileHost {
    /// Open (or initialize) a host rooted at `data_dir`.
    ///
    /// Seed entropy lives in `seed` inside the directory; a fresh random
    /// seed is written on first use.
    pub fn new(data_dir: PathBuf) -> Result<Self, WalletError> {
        fs::create_dir_all(&data_dir).map_err(|e| WalletError::Storage(e.to_string()))?;
        let host = Self {
            state_path: data_dir.join("state.json"),
            seed_path: data_dir.join("seed"),
        };
        if !host.seed_path.exists() {
            let mut entropy = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut entropy);
            let encoded: String = entropy.iter().map(|b| format!("{b:02x}")).collect();
            fs::write(&host.seed_path, encoded)
                .map_err(|e| WalletError::Storage(e.to_string()))?;
        }
        Ok(host)
    }
}

impl WalletHost for FileHost {
    fn confirm(&self, prompt: &str) -> Result<bool, WalletError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}\nConfirm? [y/N] ")
            .and_then(|_| stdout.flush())
            .map_err(|e| WalletError::Storage(e.to_string()))?;
        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| WalletError::Storage(e.to_string()))?;
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn seed_entropy(&self) -> Result<Zeroizing<String>, WalletError> {
        let seed =
            fs::read_to_string(&self.seed_path).map_err(|e| WalletError::Storage(e.to_string()))?;
        Ok(Zeroizing::new(seed.trim().to_string()))
    }

    fn get_state(&self) -> Result<BTreeMap<String, String>, WalletError> {
        if !self.state_path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw =
            fs::read_to_string(&self.state_path).map_err(|e| WalletError::Storage(e.to_string()))?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn set_state(&self, state: BTreeMap<String, String>) -> Result<(), WalletError> {
        let raw = serde_json::to_string(&state)?;
        fs::write(&self.state_path, raw).map_err(|e| WalletError::Storage(e.to_string()))
    }
}

/// An in-memory host with scripted confirmation answers.
pub struct MemoryHost {
    seed: String,
    confirm_answer: bool,
    state: Mutex<BTreeMap<String, String>>,
    prompts: Mutex<Vec<String>>,
}

impl MemoryHost {
    /// A host that answers every confirmation with `confirm_answer`.
    pub fn new(seed: &str, confirm_answer: bool) -> Self {
        Self {
            seed: seed.to_string(),
            confirm_answer,
            state: Mutex::new(BTreeMap::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt lock").clone()
    }
}

impl WalletHost for MemoryHost {
    fn confirm(&self, prompt: &str) -> Result<bool, WalletError> {
        self.prompts.lock().expect("prompt lock").push(prompt.to_string());
        Ok(self.confirm_answer)
    }

    fn seed_entropy(&self) -> Result<Zeroizing<String>, WalletError> {
        Ok(Zeroizing::new(self.seed.clone()))
    }

    fn get_state(&self) -> Result<BTreeMap<String, String>, WalletError> {
        Ok(self.state.lock().expect("state lock").clone())
    }

    fn set_state(&self, state: BTreeMap<String, String>) -> Result<(), WalletError> {
        *self.state.lock().expect("state lock") = state;
        Ok(())
    }
}
