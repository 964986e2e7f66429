//! Manifest validator.
//!
//! `INDEX.md` must list one row per catalogue record, in id order, and every
//! link must point at an existing document.

use std::path::Path;

use e8_docs::manifest::{parse_rows, ManifestRow};
use e8_docs::Format;
use e8_spec::Catalogue;

use crate::report::{ConformanceReport, TestResult};

/// Validates the manifest text against `catalogue` and the files under `out_dir`.
pub fn validate(
    out_dir: &Path,
    catalogue: &Catalogue,
    manifest: &str,
    formats: &[Format],
) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let rows = parse_rows(manifest);

    if rows.len() == catalogue.proofs.len() {
        report.push(TestResult::pass(
            "manifest/rows",
            format!("{} rows, one per record", rows.len()),
        ));
    } else {
        report.push(TestResult::fail(
            "manifest/rows",
            format!(
                "{} rows for {} records",
                rows.len(),
                catalogue.proofs.len()
            ),
        ));
    }

    let mismatched: Vec<String> = rows
        .iter()
        .zip(&catalogue.proofs)
        .filter(|(row, record)| **row != ManifestRow::for_record(record, formats))
        .map(|(row, record)| format!("row {} does not describe proof {}", row.id, record.id))
        .collect();
    report.push(TestResult::check(
        "manifest/entries",
        "every row matches its record",
        "rows disagree with the catalogue",
        mismatched,
    ));

    let broken: Vec<String> = rows
        .iter()
        .flat_map(|row| &row.links)
        .filter(|link| !out_dir.join(link).is_file())
        .cloned()
        .collect();
    report.push(TestResult::check(
        "manifest/links",
        "every link resolves to a file",
        format!("{} links are broken", broken.len()),
        broken,
    ));

    if !manifest.contains(&format!("**Total Proofs:** {}", catalogue.proofs.len())) {
        report.push(TestResult::warn(
            "manifest/header",
            "header total does not match the catalogue",
        ));
    }

    report
}
