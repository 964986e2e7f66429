//! Determinism validator.
//!
//! Regenerates every record from the catalogue's seed and category list and
//! compares the numeric fields with the stored ones.

use e8_spec::{Catalogue, GeneratorContext};

use crate::report::{ConformanceReport, TestResult};

/// Validates that every stored record is reproducible.
pub fn validate(catalogue: &Catalogue) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let meta = &catalogue.metadata;
    let context = GeneratorContext::new(meta.seed, meta.categories.clone());

    let diverged: Vec<String> = catalogue
        .proofs
        .iter()
        .filter(|stored| {
            let fresh = context.generate(stored.id, stored.category);
            !fresh.same_numbers(stored) || fresh.theorem != stored.theorem
        })
        .map(|stored| format!("proof {} ({})", stored.id, stored.category))
        .collect();

    report.push(TestResult::check(
        "determinism/regenerate",
        format!(
            "{} records regenerate identically from seed {}",
            catalogue.proofs.len(),
            meta.seed
        ),
        "records differ from their regeneration",
        diverged,
    ));
    report
}
