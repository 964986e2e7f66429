//! Catalogue validator.
//!
//! Checks the internal consistency of `proofs.json`: counts, the id sequence,
//! the category modulus rule, record checksums, and the stored summary.

use e8_spec::{verify_checksum, Catalogue, Summary};

use crate::report::{ConformanceReport, TestResult};

/// Validates a loaded catalogue.
pub fn validate(catalogue: &Catalogue) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let meta = &catalogue.metadata;
    let proofs = &catalogue.proofs;

    if meta.total_proofs == proofs.len() {
        report.push(TestResult::pass(
            "catalogue/total",
            format!("{} records, matching metadata", proofs.len()),
        ));
    } else {
        report.push(TestResult::fail(
            "catalogue/total",
            format!(
                "metadata claims {} records, catalogue holds {}",
                meta.total_proofs,
                proofs.len()
            ),
        ));
    }

    if meta.target_proofs != proofs.len() as u64 {
        report.push(TestResult::warn(
            "catalogue/target",
            format!(
                "run stopped at {} of {} requested records",
                proofs.len(),
                meta.target_proofs
            ),
        ));
    }

    let out_of_sequence: Vec<String> = proofs
        .iter()
        .zip(1_u64..)
        .filter(|(record, expected)| record.id != *expected)
        .map(|(record, expected)| format!("position {expected} holds id {}", record.id))
        .collect();
    report.push(TestResult::check(
        "catalogue/ids",
        "ids run 1..=total without gaps",
        "ids are not sequential",
        out_of_sequence,
    ));

    let misassigned: Vec<String> = if meta.categories.is_empty() {
        vec![String::from("metadata category list is empty")]
    } else {
        proofs
            .iter()
            .filter(|record| record.id > 0)
            .filter(|record| {
                let slot = ((record.id - 1) % meta.categories.len() as u64) as usize;
                meta.categories[slot] != record.category
            })
            .map(|record| format!("proof {} has category {}", record.id, record.category))
            .collect()
    };
    report.push(TestResult::check(
        "catalogue/categories",
        "every record follows the category rotation",
        "records break the category rotation",
        misassigned,
    ));

    let bad_checksums: Vec<String> = proofs
        .iter()
        .filter(|record| !verify_checksum(record))
        .map(|record| format!("proof {} checksum {}", record.id, record.checksum))
        .collect();
    report.push(TestResult::check(
        "catalogue/checksums",
        "every checksum recomputes",
        "checksums do not match record contents",
        bad_checksums,
    ));

    let recomputed = Summary::from_records(proofs);
    report.push(summary_result(&meta.summary, &recomputed));

    report
}

fn summary_result(stored: &Summary, recomputed: &Summary) -> TestResult {
    let mut problems = Vec::new();
    if stored.total != recomputed.total {
        problems.push(format!("total {} != {}", stored.total, recomputed.total));
    }
    if stored.verified != recomputed.verified {
        problems.push(format!(
            "verified {} != {}",
            stored.verified, recomputed.verified
        ));
    }
    if stored.verification_rate != recomputed.verification_rate {
        problems.push(format!(
            "verification rate {} != {}",
            stored.verification_rate, recomputed.verification_rate
        ));
    }
    if stored.per_category != recomputed.per_category {
        problems.push(String::from("per-category counts differ"));
    }
    if stored.significance != recomputed.significance {
        problems.push(String::from("significance statistics differ"));
    }
    TestResult::check(
        "catalogue/summary",
        "stored summary matches the records",
        "stored summary disagrees with the records",
        problems,
    )
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
                seed: ctx.seed(),
                batch_size: 10,
                categories: ctx.categories().to_vec(),
                start_time: String::new(),
                completion_time: String::new(),
                duration_seconds: 0.0,
                generator: String::from("test"),
                summary: Summary::from_records(&proofs),
            },
            proofs,
        }
    }

    #[test]
    fn consistent_catalogue_passes() {
        let report = validate(&catalogue(30));
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn tampered_value_breaks_checksum_and_summary() {
        let mut cat = catalogue(30);
        cat.proofs[4].verified = !cat.proofs[4].verified;
        let report = validate(&cat);
        let failed: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| r.validator.as_str())
            .collect();
        assert_eq!(failed, vec!["catalogue/checksums", "catalogue/summary"]);
    }

    #[test]
    fn dropped_record_breaks_total_and_ids() {
        let mut cat = catalogue(12);
        cat.proofs.remove(3);
        let report = validate(&cat);
        let failed: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| r.validator.as_str())
            .collect();
        assert!(failed.contains(&"catalogue/total"));
        assert!(failed.contains(&"catalogue/ids"));
    }
}
