use anyhow::Context;
use bridge_signer::{cli::Cli, transfer, wallet::Wallet};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Secrets may live in a .env file; variables already set take precedence.
    let dotenv = dotenvy::dotenv();

    let args = Cli::parse();
    args.log.init_tracing()?;

    match dotenv {
        Ok(path) => tracing::debug!(target: "bridge_signer::cli", ?path, "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(target: "bridge_signer::cli", %e, "failed to load .env"),
    }

    let wallet = Wallet::from_secrets(&args.secrets.private_key, &args.secrets.rpc_url)
        .context("failed to construct signing wallet")?;
    tracing::info!(
        target: "bridge_signer::cli",
        address = %wallet.address(),
        rpc = %wallet.provider().redacted(),
        "loaded wallet"
    );

    let params = args.transfer.params();
    let report = transfer::sign_transfer(&wallet, &params).context("failed to sign transfer")?;

    report
        .write_to(&mut std::io::stdout().lock())
        .context("failed to write report")
}
