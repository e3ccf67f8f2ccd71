// src/main.rs
use anyhow::Result;
use clap::Parser;

use l10n_stats::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}
