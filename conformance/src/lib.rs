//! E8 proof conformance suite.
//!
//! Reads an output directory written by `e8-docs` back from disk and checks
//! that the catalogue, the documents, and the manifest agree with each other
//! and with a fresh regeneration of every record.
//!
//! # Conformance Scope
//!
//! | Artifact | Checks |
//! |----------|--------|
//! | `proofs.json` | counts, id sequence, category rotation, checksums, summary |
//! | regeneration | every record reproduces from seed and category list |
//! | `<Category>/proof_NNNNN.*` | present, repeats every rendered value |
//! | `INDEX.md` | one row per record, links resolve |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use e8_conformance::run_all;
//!
//! let report = run_all(Path::new("proofs")).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod artifact;
pub mod report;
pub mod stats;
pub mod validators;

use std::path::Path;

use e8_docs::manifest::parse_formats;
use e8_docs::Format;
use tracing::info;

pub use artifact::{load_catalogue, load_manifest, ArtifactError};
pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators over `out_dir` and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Catalogue consistency
/// 2. Determinism (regeneration)
/// 3. Manifest rows and links
/// 4. Document presence and content
///
/// A missing or malformed catalogue is reported as a failure and skips the
/// checks that depend on it.
///
/// # Errors
///
/// Returns an error only if an existing file cannot be read.
pub fn run_all(out_dir: &Path) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let catalogue = match load_catalogue(out_dir) {
        Ok(catalogue) => catalogue,
        Err(err @ (ArtifactError::Missing { .. } | ArtifactError::Malformed { .. })) => {
            report.push(TestResult::fail("catalogue/load", err.to_string()));
            return Ok(report);
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        records = catalogue.proofs.len(),
        out_dir = %out_dir.display(),
        "catalogue loaded"
    );

    // 1. Catalogue
    report.extend(validators::catalogue::validate(&catalogue));

    // 2. Determinism
    report.extend(validators::determinism::validate(&catalogue));

    // 3. Manifest; its header also tells which documents were written
    let formats = match load_manifest(out_dir) {
        Ok(manifest) => {
            let formats = parse_formats(&manifest).unwrap_or_default();
            report.extend(validators::manifest::validate(
                out_dir, &catalogue, &manifest, &formats,
            ));
            formats
        }
        Err(err @ ArtifactError::Missing { .. }) => {
            report.push(TestResult::fail("manifest/load", err.to_string()));
            vec![Format::Latex, Format::Text]
        }
        Err(err) => return Err(err.into()),
    };

    // 4. Documents
    report.extend(validators::documents::validate(
        out_dir, &catalogue, &formats,
    )?);

    Ok(report)
}
