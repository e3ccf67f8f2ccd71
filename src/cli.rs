// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::aggregate::AggregateStatsView;
use crate::core::counts::StringCounts;
use crate::core::view::StatsView;
use crate::models::RawStats;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Stats file to read (JSON or YAML; one record or a list of records)
    pub file: PathBuf,

    /// Also print the per-status share breakdown
    #[arg(short, long)]
    pub shares: bool,
}

/// One raw record or an ordered list of them, as delivered by the upstream
/// data source. A list is summed into aggregate statistics.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatsDocument {
    Aggregate(Vec<RawStats>),
    Single(RawStats),
}

/// Loads a stats document from a JSON or YAML file, chosen by extension.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file extension is not `json`, `yaml` or `yml`
/// * The content does not parse as a raw stats record or list of records
pub fn load_stats_file(path: &Path) -> Result<StatsDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stats file: {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON stats file: {}", path.display())),
        Some("yaml" | "yml") => serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse YAML stats file: {}", path.display())),
        _ => bail!("Unsupported stats file extension: {}", path.display()),
    }
}

/// Loads the stats file named by `args` and prints its derived statistics.
///
/// # Errors
///
/// This function may return an error if the stats file cannot be loaded;
/// the statistics themselves never error, malformed counts degrade to 0.
pub fn run(args: Args) -> Result<()> {
    match load_stats_file(&args.file)? {
        StatsDocument::Single(record) => {
            let stats = StatsView::from(record);
            print_summary(&stats, args.shares);
        }
        StatsDocument::Aggregate(records) => {
            println!("Records: {}", records.len());
            let stats = AggregateStatsView::new(records);
            print_summary(&stats, args.shares);
        }
    }

    Ok(())
}

fn print_summary(stats: &impl StringCounts, shares: bool) {
    println!("Total strings: {}", stats.total_strings());
    println!("Translated: {}", stats.translated_strings());
    println!("Fuzzy: {}", stats.fuzzy_strings());
    println!("Suggested: {}", stats.suggested_strings());
    println!("Missing: {}", stats.missing_strings());
    println!("Approved: {}%", stats.approved_percent());

    if shares {
        println!("Translated share: {}%", stats.translated_share());
        println!("Fuzzy share: {}%", stats.fuzzy_share());
        println!("Suggested share: {}%", stats.suggested_share());
        println!("Missing share: {}%", stats.missing_share());
    }
}
