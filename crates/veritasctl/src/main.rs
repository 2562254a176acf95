//! Veritas Control - CLI client for the Veritas analysis services.
//!
//! Sends text through the cascading fallback chain (primary service,
//! secondary service, local heuristic) and manages the detection history.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use veritas_common::VeritasConfig;
use veritasctl::commands;

#[derive(Parser)]
#[command(name = "veritasctl")]
#[command(about = "Veritas - credibility analysis for selected text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a piece of text and print the verdict
    Analyze {
        /// The text to analyze
        text: Vec<String>,
    },

    /// Show recent detection history (newest first)
    History {
        /// Maximum entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Check daemon health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let config = VeritasConfig::from_env();

    match cli.command {
        Commands::Analyze { text } => commands::analyze(&config, text.join(" ")).await,
        Commands::History { limit } => commands::history(limit).await,
        Commands::Health => commands::health(&config).await,
    }
}
