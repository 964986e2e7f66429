//! `e8-generate`: Generates a batch of E8 proof records and their documents.
//!
//! **Outputs:**
//! - `<out>/proofs.json`: Metadata and every record
//! - `<out>/<Category>/proof_NNNNN.tex`: LaTeX document per record
//! - `<out>/<Category>/proof_NNNNN.txt`: Plain-text record log
//! - `<out>/INDEX.md`: Manifest table
//!
//! **Usage:**
//! ```text
//! e8-generate [--config <file>] [--seed <n>] [--total <n>] [--batch-size <n>]
//!             [--out <path>] [--categories <a,b,...>] [--formats <latex,text,json>]
//!             [--fixed-timestamp <rfc3339>]
//! ```
//!
//! Flags override the values read from `--config`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use e8_docs::{generate, Format, PipelineConfig};

/// Generate E8 proof records, documents, catalogue, and manifest.
#[derive(Parser)]
#[command(
    name = "e8-generate",
    about = "Generate E8 proof records, documents, catalogue, and manifest"
)]
struct Args {
    /// TOML configuration file; every field is optional.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed of the record streams.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of records to generate.
    #[arg(long)]
    total: Option<u64>,

    /// Records per batch.
    #[arg(long)]
    batch_size: Option<u64>,

    /// Output directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Comma-separated category labels, in assignment order.
    #[arg(long, value_delimiter = ',')]
    categories: Option<Vec<String>>,

    /// Comma-separated output formats.
    #[arg(long, value_delimiter = ',', value_enum)]
    formats: Option<Vec<Format>>,

    /// RFC 3339 instant stamped on every record instead of the wall clock.
    #[arg(long)]
    fixed_timestamp: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(total) = self.total {
            config.total = total;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(out) = self.out {
            config.out_dir = out;
        }
        if let Some(categories) = self.categories {
            config.categories = categories;
        }
        if let Some(formats) = self.formats {
            config.formats = formats;
        }
        if self.fixed_timestamp.is_some() {
            config.fixed_timestamp = self.fixed_timestamp;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    e8_clients::init_logging();
    let config = Args::parse().into_config()?;
    config.validate().context("Invalid configuration")?;

    let outcome = generate(&config)?;
    let summary = &outcome.summary;

    println!("Proof generation complete.");
    println!("  Records:   {}", summary.total);
    println!(
        "  Verified:  {} ({:.1}%)",
        summary.verified,
        summary.verification_rate * 100.0
    );
    println!("  Documents: {}", outcome.documents);
    if let Some(catalogue) = &outcome.catalogue {
        println!("  Catalogue: {}", catalogue.display());
    }
    println!("  Manifest:  {}", outcome.manifest.display());
    println!("  Duration:  {:.2}s", outcome.duration_seconds);

    Ok(())
}
