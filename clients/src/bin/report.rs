//! `e8-report`: Prints the metadata, statistics, and category distribution
//! of a generated proof catalogue.
//!
//! **Usage:**
//! ```text
//! e8-report [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use e8_conformance::{load_catalogue, stats};
use e8_spec::Summary;

/// Summarise a generated E8 proof catalogue.
#[derive(Parser)]
#[command(
    name = "e8-report",
    about = "Print statistics for a generated E8 proof catalogue"
)]
struct Args {
    /// Output directory containing proofs.json (default: proofs/).
    #[arg(long, default_value = "proofs")]
    out: PathBuf,
}

fn main() -> Result<()> {
    e8_clients::init_logging();
    let args = Args::parse();

    let catalogue = load_catalogue(&args.out)?;
    tracing::info!(records = catalogue.proofs.len(), "catalogue loaded");

    println!("{}", stats::render_metadata(&catalogue.metadata));
    println!("{}", stats::render_statistics(&catalogue));
    let summary = Summary::from_records(&catalogue.proofs);
    print!("{}", stats::render_distribution(&summary));

    Ok(())
}
