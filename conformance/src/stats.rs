//! Plain-text statistics over a loaded catalogue.
//!
//! Used by `e8-report` to print the metadata block, the statistics report,
//! and the distribution of records by category.

use std::fmt::Write as _;

use e8_spec::{Catalogue, CatalogueMetadata, Summary};

const RULE: &str = "============================================================";

/// Renders the metadata block.
#[must_use]
pub fn render_metadata(meta: &CatalogueMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\nE8 PROOF CATALOGUE METADATA\n{RULE}");
    let _ = writeln!(out, "Total Proofs:     {}", group_thousands(meta.total_proofs as u64));
    let _ = writeln!(out, "Target Proofs:    {}", group_thousands(meta.target_proofs));
    let _ = writeln!(out, "Seed:             {}", meta.seed);
    let _ = writeln!(out, "Batch Size:       {}", group_thousands(meta.batch_size));
    let _ = writeln!(out, "Categories:       {}", meta.categories.len());
    let _ = writeln!(out, "Start Time:       {}", meta.start_time);
    let _ = writeln!(out, "Completion Time:  {}", meta.completion_time);
    let _ = writeln!(out, "Duration:         {:.4} seconds", meta.duration_seconds);
    let _ = writeln!(out, "Generator:        {}", meta.generator);
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Renders the statistics report over the records of `catalogue`.
///
/// The statistics are recomputed from the records rather than read from the
/// stored summary.
#[must_use]
pub fn render_statistics(catalogue: &Catalogue) -> String {
    let summary = Summary::from_records(&catalogue.proofs);
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\nSTATISTICS REPORT\n{RULE}");
    let _ = writeln!(out, "Total Proofs:           {}", group_thousands(summary.total as u64));
    let _ = writeln!(
        out,
        "Verified Proofs:        {} ({:.1}%)",
        group_thousands(summary.verified as u64),
        percent(summary.verified, summary.total)
    );
    let _ = writeln!(
        out,
        "Unverified Proofs:      {} ({:.1}%)",
        group_thousands(summary.unverified() as u64),
        percent(summary.unverified(), summary.total)
    );
    out.push_str("\nSignificance Statistics:\n");
    match &summary.significance {
        Some(stats) => {
            let _ = writeln!(out, "  Average:              {:.2e}", stats.mean);
            let _ = writeln!(out, "  Maximum:              {:.2e}", stats.max);
            let _ = writeln!(out, "  Minimum:              {:.2e}", stats.min);
        }
        None => out.push_str("  (no records)\n"),
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Renders the per-category distribution, largest first.
#[must_use]
pub fn render_distribution(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\nDISTRIBUTION BY CATEGORY\n{RULE}");
    for (label, count) in summary.distribution() {
        let _ = writeln!(
            out,
            "{label:<24} {:>8} ({:.1}%)",
            group_thousands(count as u64),
            percent(count, summary.total)
        );
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Formats `n` with comma thousands separators (e.g. `10,000`).
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use e8_spec::{CatalogueMetadata, GeneratorContext};

    fn catalogue(total: u64) -> Catalogue {
        let ctx = GeneratorContext::default();
        let proofs: Vec<_> = (1..=total).map(|id| ctx.generate_next(id)).collect();
        Catalogue {
            metadata: CatalogueMetadata {
                total_proofs: proofs.len(),
                target_proofs: total,
                seed: 42,
                batch_size: 1_000,
                categories: ctx.categories().to_vec(),
                start_time: String::from("start"),
                completion_time: String::from("end"),
                duration_seconds: 1.5,
                generator: String::from("e8-docs 0.1.0"),
                summary: Summary::from_records(&proofs),
            },
            proofs,
        }
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(696_729_600), "696,729,600");
    }

    #[test]
    fn metadata_block() {
        let text = render_metadata(&catalogue(3).metadata);
        assert!(text.contains("Total Proofs:     3\n"));
        assert!(text.contains("Batch Size:       1,000\n"));
        assert!(text.contains("Duration:         1.5000 seconds\n"));
        assert!(text.contains("Generator:        e8-docs 0.1.0\n"));
    }

    #[test]
    fn statistics_percentages() {
        let text = render_statistics(&catalogue(10));
        assert!(text.contains("Total Proofs:           10\n"));
        let summary = Summary::from_records(&catalogue(10).proofs);
        let verified = format!(
            "Verified Proofs:        {} ({:.1}%)",
            summary.verified,
            summary.verified as f64 * 10.0
        );
        assert!(text.contains(&verified), "{text}");
        assert!(text.contains("Average:"));
    }

    #[test]
    fn empty_catalogue_statistics() {
        let text = render_statistics(&catalogue(0));
        assert!(text.contains("Verified Proofs:        0 (0.0%)"));
        assert!(text.contains("(no records)"));
    }

    #[test]
    fn distribution_lists_every_category() {
        let cat = catalogue(25);
        let text = render_distribution(&cat.metadata.summary);
        assert_eq!(text.lines().filter(|l| l.contains('_')).count(), 10);
        // 25 records over 10 categories: the first five get 3, ties broken by label.
        let first = text.lines().nth(3).unwrap_or_default();
        assert!(first.starts_with("E8_RootLattice"), "{first}");
        assert!(first.ends_with("3 (12.0%)"), "{first}");
        let last = text.lines().nth(12).unwrap_or_default();
        assert!(last.ends_with("2 (8.0%)"), "{last}");
    }
}
