use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{abiencode::types::parse_u256, transfer::TransferParams, Address, U256};

/// Sign cross-chain transfer parameters with the Ethereum personal-message
/// convention.
#[derive(Debug, Parser)]
#[command(name = "bridge-signature", version)]
pub struct Cli {
    #[command(flatten)]
    pub transfer: TransferArgs,
    #[command(flatten)]
    pub secrets: SecretArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Parser)]
pub struct TransferArgs {
    /// Contract (source) address
    #[arg(short, long)]
    pub contract: Address,
    /// Sender address
    #[arg(short, long)]
    pub sender: Address,
    /// Receiver address
    #[arg(short, long)]
    pub receiver: Address,
    /// Transfer nonce
    #[arg(short, long, value_parser = parse_u256, allow_hyphen_values = true)]
    pub nonce: U256,
    /// Transfer amount, as a decimal string
    #[arg(short, long, value_parser = parse_u256, allow_hyphen_values = true)]
    pub amount: U256,
}

impl TransferArgs {
    pub fn params(&self) -> TransferParams {
        TransferParams {
            contract: self.contract,
            sender: self.sender,
            receiver: self.receiver,
            nonce: self.nonce,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Parser)]
pub struct SecretArgs {
    /// JSON-RPC endpoint of the read provider
    #[arg(long, env = "RPC_URL", hide_env_values = true)]
    pub rpc_url: String,
    /// Hex encoded private key of the signing wallet
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,
}

#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Log filter directive, logs are written to stderr
    #[arg(long = "log", default_value = "info")]
    pub filter: String,
}

impl LogArgs {
    pub fn init_tracing(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::builder().parse(&self.filter)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(())
    }
}
