// ─────────────────────────────────────────────────────────────────────────────
//  Muraqib — Whale Group Watcher
//
//  Muraqib (مراقب): "The Watcher" — maps fund-flow relationships between the
//  largest holders of a token to surface possibly-coordinated whale groups.
// ─────────────────────────────────────────────────────────────────────────────

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::Subcommand;
use solana_pubkey::Pubkey;
use tracing::info;

use muraqib::config::load_config;
use muraqib::err_with_loc;
use muraqib::model::Address;
use muraqib::tracing::setup_tracing;
use muraqib::Muraqib;
use muraqib::Result;

#[derive(Parser)]
#[command(name = "muraqib", about = "Whale-group relationship graph builder")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "Config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recursive relation graph rooted at one wallet
    Wallet {
        address: String,
        #[arg(long)]
        min_amount: Option<f64>,
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Shallow transaction graph over a token's top holders
    Token {
        mint: String,
        #[arg(long)]
        min_amount: Option<f64>,
        #[arg(long)]
        top: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    let _log_guard = setup_tracing("muraqib", &config.logging);

    let report = match cli.command {
        Command::Wallet { address, min_amount, max_depth } => {
            if let Some(min_amount) = min_amount {
                config.analyzer.min_transfer_amount = min_amount;
            }
            if let Some(max_depth) = max_depth {
                config.analyzer.max_depth = max_depth;
            }

            let root = parse_account(&address)?;
            let engine = Muraqib::from_config(&config)?;
            engine.analyze_wallet(&root).await
        },
        Command::Token { mint, min_amount, top } => {
            if let Some(min_amount) = min_amount {
                config.analyzer.min_transfer_amount = min_amount;
            }
            if let Some(top) = top {
                config.analyzer.top_holder_limit = top;
            }

            // Mints are accounts too; same boundary validation
            parse_account(&mint)?;
            let engine = Muraqib::from_config(&config)?;
            engine.analyze_token(&mint).await?
        },
    };

    info!(
        "analysis_finished::origins::{}::edges::{}::calls::{}",
        report.graph.origin_count(),
        report.graph.edge_count(),
        report.call_count
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Base58 validation happens here at the boundary; the core treats addresses
/// as opaque strings.
fn parse_account(input: &str) -> Result<Address> {
    match Pubkey::from_str(input) {
        Ok(_) => Ok(Address::new(input)),
        Err(e) => Err(err_with_loc!(format!("invalid account address '{}': {}", input, e))),
    }
}
