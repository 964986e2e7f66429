//! `e8-conformance`: Validates a generated output directory.
//!
//! Checks the catalogue, regenerates every record, and cross-checks the
//! manifest and the documents.
//!
//! **Usage:**
//! ```text
//! e8-conformance [--out <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use e8_conformance::{run_all, Severity};

/// Run the E8 proof conformance suite.
#[derive(Parser)]
#[command(
    name = "e8-conformance",
    about = "Validate a generated E8 proof directory"
)]
struct Args {
    /// Output directory to validate (default: proofs/).
    #[arg(long, default_value = "proofs")]
    out: PathBuf,
}

fn main() -> Result<()> {
    e8_clients::init_logging();
    let args = Args::parse();

    let report = run_all(&args.out)?;

    println!("E8 Proof Conformance Report");
    println!("===========================");
    println!();

    for result in &report.results {
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
