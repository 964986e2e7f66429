//! File layout of an output directory.
//!
//! ```text
//! <out>/proofs.json
//! <out>/INDEX.md
//! <out>/<Category label>/proof_<id:05>.tex
//! <out>/<Category label>/proof_<id:05>.txt
//! ```

use std::path::{Path, PathBuf};

use e8_spec::{pad_id, Category, ProofRecord};

use crate::config::Format;

/// File name of the JSON catalogue.
pub const CATALOGUE_FILE: &str = "proofs.json";

/// File name of the Markdown manifest.
pub const MANIFEST_FILE: &str = "INDEX.md";

/// Returns the document path relative to the output directory, as used in manifest links.
///
/// Always uses forward slashes.
#[must_use]
pub fn document_link(category: Category, id: u64, format: Format) -> String {
    link(category, &pad_id(id), format)
}

/// Returns the absolute document path under `out_dir`.
#[must_use]
pub fn document_path(out_dir: &Path, category: Category, id: u64, format: Format) -> PathBuf {
    path(out_dir, category, &pad_id(id), format)
}

/// Returns the manifest link of `record` in `format`.
#[must_use]
pub fn record_link(record: &ProofRecord, format: Format) -> String {
    link(record.category, &record.padded_id(), format)
}

/// Returns the path of `record` in `format` under `out_dir`.
#[must_use]
pub fn record_path(out_dir: &Path, record: &ProofRecord, format: Format) -> PathBuf {
    path(out_dir, record.category, &record.padded_id(), format)
}

fn file_name(padded_id: &str, format: Format) -> String {
    format!("proof_{padded_id}.{}", format.extension())
}

fn link(category: Category, padded_id: &str, format: Format) -> String {
    format!("{}/{}", category.label(), file_name(padded_id, format))
}

fn path(out_dir: &Path, category: Category, padded_id: &str, format: Format) -> PathBuf {
    out_dir
        .join(category.label())
        .join(file_name(padded_id, format))
}

/// Returns the catalogue path under `out_dir`.
#[must_use]
pub fn catalogue_path(out_dir: &Path) -> PathBuf {
    out_dir.join(CATALOGUE_FILE)
}

/// Returns the manifest path under `out_dir`.
#[must_use]
pub fn manifest_path(out_dir: &Path) -> PathBuf {
    out_dir.join(MANIFEST_FILE)
}
