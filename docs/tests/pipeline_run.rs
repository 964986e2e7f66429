//! End-to-end runs of the batch driver into temporary directories.

use std::fs;
use std::path::Path;

use e8_docs::layout::{catalogue_path, document_path, manifest_path};
use e8_docs::manifest::parse_rows;
use e8_docs::{generate, Format, PipelineConfig};
use e8_spec::{verify_checksum, Catalogue, Category};
use tempfile::TempDir;

fn config(out: &Path, total: u64) -> PipelineConfig {
    PipelineConfig {
        total,
        batch_size: 1_000,
        out_dir: out.to_path_buf(),
        fixed_timestamp: Some(String::from("2025-11-10T18:02:58Z")),
        ..PipelineConfig::default()
    }
}

fn read_catalogue(out: &Path) -> Catalogue {
    let json = fs::read_to_string(catalogue_path(out)).unwrap();
    Catalogue::from_json(&json).unwrap()
}

#[test]
fn empty_run_writes_valid_catalogue_and_manifest() {
    let dir = TempDir::new().unwrap();
    let outcome = generate(&config(dir.path(), 0)).unwrap();
    assert_eq!(outcome.batches, 0);
    assert_eq!(outcome.documents, 0);

    let catalogue = read_catalogue(dir.path());
    assert_eq!(catalogue.metadata.total_proofs, 0);
    assert!(catalogue.proofs.is_empty());
    assert_eq!(catalogue.metadata.summary.verification_rate, 0.0);

    let manifest = fs::read_to_string(manifest_path(dir.path())).unwrap();
    assert!(manifest.contains("**Total Proofs:** 0"));
    assert!(parse_rows(&manifest).is_empty());
}

#[test]
fn single_record_run() {
    let dir = TempDir::new().unwrap();
    let outcome = generate(&config(dir.path(), 1)).unwrap();
    assert_eq!(outcome.batches, 1);
    assert_eq!(outcome.documents, 2);

    let catalogue = read_catalogue(dir.path());
    assert_eq!(catalogue.proofs.len(), 1);
    assert_eq!(catalogue.proofs[0].id, 1);
    assert_eq!(catalogue.proofs[0].category, Category::Triality);
    assert!(document_path(dir.path(), Category::Triality, 1, Format::Latex).is_file());
    assert!(document_path(dir.path(), Category::Triality, 1, Format::Text).is_file());
}

#[test]
fn run_spanning_several_batches() {
    let dir = TempDir::new().unwrap();
    let outcome = generate(&config(dir.path(), 2_500)).unwrap();
    assert_eq!(outcome.batches, 3);
    assert_eq!(outcome.summary.total, 2_500);
    assert_eq!(outcome.documents, 5_000);

    let catalogue = read_catalogue(dir.path());
    assert_eq!(catalogue.metadata.total_proofs, 2_500);
    assert_eq!(catalogue.metadata.target_proofs, 2_500);
    let ids: Vec<u64> = catalogue.proofs.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=2_500).collect::<Vec<_>>());
    assert!(catalogue.proofs.iter().all(verify_checksum));
    assert_eq!(catalogue.metadata.summary.per_category.len(), 10);
    assert!(catalogue
        .metadata
        .summary
        .per_category
        .values()
        .all(|&count| count == 250));

    let manifest = fs::read_to_string(manifest_path(dir.path())).unwrap();
    assert_eq!(parse_rows(&manifest).len(), 2_500);
}

#[test]
fn documents_repeat_catalogue_values() {
    let dir = TempDir::new().unwrap();
    generate(&config(dir.path(), 20)).unwrap();
    let catalogue = read_catalogue(dir.path());
    for record in &catalogue.proofs {
        for format in [Format::Latex, Format::Text] {
            let path = document_path(dir.path(), record.category, record.id, format);
            let doc = fs::read_to_string(&path).unwrap();
            for quantity in &record.quantities {
                assert!(
                    doc.contains(&quantity.text),
                    "{}: {} missing from {}",
                    record.id,
                    quantity.name,
                    path.display()
                );
            }
            assert!(doc.contains(&record.significance.text));
        }
    }
}

#[test]
fn repeated_runs_agree() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = generate(&config(first.path(), 150)).unwrap();
    let b = generate(&config(second.path(), 150)).unwrap();
    assert_eq!(a.summary, b.summary);

    let a = fs::read_to_string(catalogue_path(first.path())).unwrap();
    let b = fs::read_to_string(catalogue_path(second.path())).unwrap();
    let (a, b) = (Catalogue::from_json(&a).unwrap(), Catalogue::from_json(&b).unwrap());
    assert_eq!(a.proofs, b.proofs);
}

#[test]
fn format_selection_limits_output() {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        formats: vec![Format::Text],
        ..config(dir.path(), 5)
    };
    let outcome = generate(&config).unwrap();
    assert!(outcome.catalogue.is_none());
    assert_eq!(outcome.documents, 5);
    assert!(!catalogue_path(dir.path()).exists());
    assert!(!document_path(dir.path(), Category::Triality, 1, Format::Latex).exists());

    let manifest = fs::read_to_string(manifest_path(dir.path())).unwrap();
    assert!(manifest.contains("| Proof # | Category | Text |"));
}

#[test]
fn invalid_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("proofs");
    let config = PipelineConfig {
        categories: vec![String::from("E8_Nonexistent")],
        ..config(&out, 5)
    };
    assert!(generate(&config).is_err());
    assert!(!out.exists());
}
