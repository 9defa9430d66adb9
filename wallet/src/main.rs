// Copyright (c) 2023-2026 The Umbra Foundation

//! Command-line front end for the Umbra wallet.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use umbra_transaction_builder::OutputRequest;
use umbra_transaction_core::{amount_from_string, amount_to_string, DECIMALS};
use umbra_wallet::{FileHost, NodeClient, Wallet};

#[derive(Parser)]
#[command(name = "umbra-wallet", about = "Umbra confidential-payments wallet", version)]
struct Args {
    /// Base URL of the node's public API.
    #[arg(long, default_value = "http://localhost:8080")]
    api: String,

    /// Wallet data directory; defaults to the platform data dir.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the wallet's address.
    Address,
    /// Print the balance of the local store.
    Balance,
    /// Rescan the network's UTXO set and rebuild the local store.
    Sync,
    /// Send a payment.
    Send {
        /// Recipient address, `um:` form.
        to: String,
        /// Amount as a decimal string, e.g. `1.5`.
        amount: String,
        /// Fee as a decimal string.
        #[arg(long, default_value = "0")]
        fee: String,
    },
}

fn data_dir(args: &Args) -> Result<PathBuf> {
    if let Some(dir) = &args.data_dir {
        return Ok(dir.clone());
    }
    Ok(dirs::data_dir()
        .ok_or_else(|| anyhow!("no platform data directory; pass --data-dir"))?
        .join("umbra-wallet"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let host = FileHost::new(data_dir(&args)?).context("opening wallet data directory")?;
    let wallet = Wallet::new(host, NodeClient::new(args.api.clone()))?;

    match args.command {
        Command::Address => {
            println!("{}", wallet.address());
        }
        Command::Balance => {
            let totals = wallet.local_balance()?;
            if totals.is_empty() {
                println!("no spendable outputs; run `sync` first");
            }
            for (currency, total) in totals {
                println!("{} {currency}", amount_to_string(total, DECIMALS));
            }
        }
        Command::Sync => {
            let owned = wallet.sync().await.context("syncing with the node")?;
            println!("store rebuilt with {owned} spendable output(s)");
        }
        Command::Send { to, amount, fee } => {
            let value = amount_from_string(&amount, DECIMALS)
                .map_err(|e| anyhow!("bad amount {amount:?}: {e}"))?;
            let fee = amount_from_string(&fee, DECIMALS)
                .map_err(|e| anyhow!("bad fee {fee:?}: {e}"))?;
            let tx_id = wallet
                .submit_transaction(&[OutputRequest { address: to, value }], fee)
                .await
                .context("submitting the transaction")?;
            println!("accepted: {tx_id}");
        }
    }
    Ok(())
}
