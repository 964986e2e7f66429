//! Runs the full conformance suite over freshly generated output directories.

use std::fs;

use e8_conformance::{run_all, ConformanceReport, Severity};
use e8_docs::layout::{catalogue_path, document_path, manifest_path};
use e8_docs::{generate, Format, PipelineConfig};
use e8_spec::Category;
use tempfile::TempDir;

fn generated(total: u64, formats: Vec<Format>) -> TempDir {
    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        total,
        batch_size: 7,
        out_dir: dir.path().to_path_buf(),
        categories: Category::ALL.iter().map(|c| c.label().to_owned()).collect(),
        formats,
        fixed_timestamp: Some(String::from("2025-11-10T18:02:58Z")),
        ..PipelineConfig::default()
    };
    generate(&config).unwrap();
    dir
}

fn failed(report: &ConformanceReport) -> Vec<&str> {
    report
        .results
        .iter()
        .filter(|r| r.is_failure())
        .map(|r| r.validator.as_str())
        .collect()
}

#[test]
fn fresh_output_conforms() {
    let dir = generated(40, Format::ALL.to_vec());
    let report = run_all(dir.path()).unwrap();
    assert!(report.all_passed(), "{:#?}", report.results);
    assert_eq!(report.count(Severity::Warning), 0);
}

#[test]
fn empty_output_conforms() {
    let dir = generated(0, Format::ALL.to_vec());
    let report = run_all(dir.path()).unwrap();
    assert!(report.all_passed(), "{:#?}", report.results);
}

#[test]
fn missing_catalogue_fails() {
    let dir = TempDir::new().unwrap();
    let report = run_all(dir.path()).unwrap();
    assert_eq!(failed(&report), vec!["catalogue/load"]);
}

#[test]
fn tampered_short_values_fail_content_check() {
    let dir = generated(14, Format::ALL.to_vec());
    let tex = document_path(dir.path(), Category::Triality, 1, Format::Latex);
    let edited = fs::read_to_string(&tex)
        .unwrap()
        .replace(r"\det T = 1$", r"\det T = 7$");
    fs::write(&tex, edited).unwrap();
    let txt = document_path(dir.path(), Category::Triality, 1, Format::Text);
    let edited = fs::read_to_string(&txt)
        .unwrap()
        .replace("trace: 0\n", "trace: 3\n");
    fs::write(&txt, edited).unwrap();

    let report = run_all(dir.path()).unwrap();
    assert_eq!(failed(&report), vec!["documents/content"]);
    let content = report
        .results
        .iter()
        .find(|r| r.validator == "documents/content")
        .unwrap();
    assert!(content
        .details
        .contains(&String::from("E8_Triality/proof_00001.tex: missing determinant")));
    assert!(content
        .details
        .contains(&String::from("E8_Triality/proof_00001.txt: missing trace")));
}

#[test]
fn edited_document_fails_content_check() {
    let dir = generated(14, Format::ALL.to_vec());
    let path = document_path(dir.path(), Category::Triality, 1, Format::Text);
    let edited = fs::read_to_string(&path)
        .unwrap()
        .replace("phase: 2.094395", "phase: 2.1");
    fs::write(&path, edited).unwrap();

    let report = run_all(dir.path()).unwrap();
    assert_eq!(failed(&report), vec!["documents/content"]);
}

#[test]
fn deleted_document_fails_links_and_presence() {
    let dir = generated(14, Format::ALL.to_vec());
    fs::remove_file(document_path(dir.path(), Category::Moonshine, 13, Format::Latex)).unwrap();

    let report = run_all(dir.path()).unwrap();
    assert_eq!(failed(&report), vec!["manifest/links", "documents/exist"]);
}

#[test]
fn stray_document_is_only_a_warning() {
    let dir = generated(3, Format::ALL.to_vec());
    fs::write(
        document_path(dir.path(), Category::Triality, 99, Format::Text),
        "stray",
    )
    .unwrap();

    let report = run_all(dir.path()).unwrap();
    assert!(report.all_passed());
    assert_eq!(report.count(Severity::Warning), 1);
}

#[test]
fn truncated_manifest_fails_rows() {
    let dir = generated(10, Format::ALL.to_vec());
    let path = manifest_path(dir.path());
    let manifest = fs::read_to_string(&path).unwrap();
    let kept: Vec<&str> = manifest.lines().take(manifest.lines().count() - 2).collect();
    fs::write(&path, kept.join("\n")).unwrap();

    let report = run_all(dir.path()).unwrap();
    assert!(failed(&report).contains(&"manifest/rows"));
}

#[test]
fn text_only_output_conforms() {
    let dir = generated(9, vec![Format::Text, Format::Json]);
    assert!(!document_path(dir.path(), Category::Triality, 1, Format::Latex).exists());
    assert!(catalogue_path(dir.path()).exists());
    let report = run_all(dir.path()).unwrap();
    assert!(report.all_passed(), "{:#?}", report.results);
}
