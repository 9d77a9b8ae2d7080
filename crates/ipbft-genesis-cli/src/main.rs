//! ipbft-genesis
//!
//! Inspect, validate and export IPBFT genesis documents.
//!
//! Usage:
//!   ipbft-genesis show      [--network mainnet|testnet] [--file <path>]
//!   ipbft-genesis check     <path>
//!   ipbft-genesis export    --network <name> --out <path>
//!   ipbft-genesis normalize <path> --out <path>

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use ipbft_genesis::{builtin_fixture, GenesisDocument, Network};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "ipbft-genesis",
    version,
    about = "IPBFT genesis tool — inspect, validate and export genesis files"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of a genesis document.
    Show {
        /// Built-in preset to show when no file is given.
        #[arg(long, default_value = "mainnet", value_parser = parse_network)]
        network: Network,
        /// Genesis file to show instead of a preset.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Load and validate a genesis file.
    Check {
        /// Genesis file to validate.
        path: PathBuf,
    },

    /// Write a built-in preset to a file.
    Export {
        #[arg(long, value_parser = parse_network)]
        network: Network,
        #[arg(long)]
        out: PathBuf,
    },

    /// Rewrite a genesis file in canonical form (lowercase hex, tab indent).
    Normalize {
        /// Genesis file to read.
        path: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

fn parse_network(s: &str) -> Result<Network, String> {
    s.parse().map_err(|e: ipbft_genesis::GenesisError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Show { network, file } => {
            let doc = match file {
                Some(path) => load(&path)?,
                None => {
                    info!(%network, "using built-in genesis");
                    builtin_fixture(network)
                }
            };
            print_summary(&doc);
        }

        Command::Check { path } => {
            let doc = load(&path)?;
            println!(
                "{}: ok ({} validators, chain {})",
                path.display(),
                doc.validators().len(),
                doc.chain_id
            );
        }

        Command::Export { network, out } => {
            builtin_fixture(network)
                .save_as(&out)
                .with_context(|| format!("writing {network} genesis to {}", out.display()))?;
            println!("{network} genesis written to {}", out.display());
        }

        Command::Normalize { path, out } => {
            load(&path)?
                .save_as(&out)
                .with_context(|| format!("writing genesis to {}", out.display()))?;
            println!("{} normalized into {}", path.display(), out.display());
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<GenesisDocument> {
    GenesisDocument::load_file(path)
        .with_context(|| format!("loading genesis from {}", path.display()))
}

fn print_summary(doc: &GenesisDocument) {
    let rs = &doc.reward_scheme;
    let ep = &doc.current_epoch;

    println!("chain_id:          {}", doc.chain_id);
    println!("consensus:         {}", doc.consensus);
    println!("genesis_time:      {}", doc.genesis_time.to_rfc3339());
    println!("total_reward:      {}", rs.total_reward);
    println!("reward_first_year: {}", rs.reward_first_year);
    println!("epochs_per_year:   {}", rs.epochs_per_year);
    println!("total_years:       {}", rs.total_years);
    println!(
        "epoch:             #{} blocks {}..={} ({} blocks), reward/block {}",
        ep.number,
        ep.start_block,
        ep.end_block,
        ep.block_count(),
        ep.reward_per_block
    );
    match ep.total_voting_power() {
        Some(total) => println!("voting power:      {total}"),
        None => println!("voting power:      exceeds 256 bits"),
    }
    println!("validators:        {}", ep.validators.len());
    for (i, v) in ep.validators.iter().enumerate() {
        let name = if v.name.is_empty() { "-" } else { v.name.as_str() };
        println!(
            "  [{i}] {} name={name} amount={} epoch={}",
            v.account, v.voting_power, v.remaining_epoch
        );
        println!("      pub_key={}", v.public_key);
    }
}
