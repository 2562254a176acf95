//! CLI command implementations.

use crate::fallback::{AnalysisTier, FallbackChain, Tier};
use crate::history::HistoryStore;
use crate::tiers::{PrimaryTier, SecondaryTier};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use veritas_common::{AnalysisResult, VeritasConfig};

/// Analyze a piece of text through the fallback chain and record the
/// verdict in the detection history.
pub async fn analyze(config: &VeritasConfig, text: String) -> Result<()> {
    let tiers: Vec<Box<dyn AnalysisTier>> = vec![
        Box::new(PrimaryTier::new(config.primary_url.clone())),
        Box::new(SecondaryTier::new(config.secondary_url.clone())),
    ];
    let chain = FallbackChain::new(tiers);

    let outcome = chain.run(&text).await;

    let result = if config.dedup_sources {
        outcome.result.dedup_sources()
    } else {
        outcome.result
    };

    HistoryStore::default_location().record_best_effort(&text, &result);
    print_result(&result, outcome.tier);
    Ok(())
}

/// Show the most recent detection records, newest first.
pub async fn history(limit: usize) -> Result<()> {
    let store = HistoryStore::default_location();
    let records = store
        .recent(limit)
        .with_context(|| format!("reading {}", store.path().display()))?;

    if records.is_empty() {
        println!("No detection history yet.");
        return Ok(());
    }

    for record in records {
        let verdict = if record.result.is_fake {
            "FAKE".red().bold().to_string()
        } else {
            "OK  ".green().bold().to_string()
        };
        println!(
            "{}  {}  {:>3.0}%  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            verdict,
            record.result.confidence * 100.0,
            record.content
        );
    }
    Ok(())
}

/// Check whether the primary daemon is reachable.
pub async fn health(config: &VeritasConfig) -> Result<()> {
    let url = format!("{}/v1/health", config.primary_url);
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()?;

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            println!("{} {}", "healthy".green().bold(), url);
        }
        Ok(resp) => {
            println!("{} {} (HTTP {})", "degraded".yellow().bold(), url, resp.status());
        }
        Err(e) => {
            println!("{} {} ({})", "unreachable".red().bold(), url, e);
        }
    }
    Ok(())
}

fn print_result(result: &AnalysisResult, tier: Tier) {
    let verdict = if result.is_fake {
        "LIKELY FAKE".red().bold().to_string()
    } else {
        "LOOKS CREDIBLE".green().bold().to_string()
    };

    println!("{}  ({:.0}% confidence, via {})", verdict, result.confidence * 100.0, tier);
    println!();
    for line in result.explanation.lines() {
        println!("  {}", line);
    }
    if !result.sources.is_empty() {
        println!();
        println!("  Sources:");
        for source in &result.sources {
            println!("    - {}", source);
        }
    }
}
