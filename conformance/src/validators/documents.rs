//! Document validator.
//!
//! Every enabled document must exist and repeat the rendered text of each
//! quantity and of the significance of its record. Text logs must carry a
//! `name: text` line per value. LaTeX documents must carry each value as a
//! whole token in the document body, so a short value such as `1` is not
//! satisfied by the `1` inside `E8` or `1.5`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use e8_docs::{layout, Format};
use e8_spec::{Catalogue, Quantity};
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

/// Validates the documents of `formats` under `out_dir` against `catalogue`.
///
/// # Errors
///
/// Returns an error if an existing document cannot be read.
pub fn validate(
    out_dir: &Path,
    catalogue: &Catalogue,
    formats: &[Format],
) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let formats: Vec<Format> = formats
        .iter()
        .copied()
        .filter(|f| f.is_document())
        .collect();
    if formats.is_empty() {
        report.push(TestResult::warn(
            "documents/content",
            "no document formats enabled, skipping",
        ));
        return Ok(report);
    }

    let mut expected = HashSet::new();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();
    let mut checked = 0usize;

    for record in &catalogue.proofs {
        for &format in &formats {
            let path = layout::record_path(out_dir, record, format);
            expected.insert(path.clone());
            if !path.is_file() {
                missing.push(layout::record_link(record, format));
                continue;
            }
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read document: {}", path.display()))?;
            checked += 1;
            let absent: Vec<&str> = record
                .quantities
                .iter()
                .chain(std::iter::once(&record.significance))
                .filter(|q| !repeats(&content, format, q))
                .map(|q| q.name.as_str())
                .collect();
            if !absent.is_empty() {
                mismatched.push(format!(
                    "{}: missing {}",
                    layout::record_link(record, format),
                    absent.join(", ")
                ));
            }
        }
    }

    report.push(TestResult::check(
        "documents/exist",
        format!("all {} documents present", expected.len()),
        format!("{} documents missing", missing.len()),
        missing,
    ));
    report.push(TestResult::check(
        "documents/content",
        format!("{checked} documents repeat their record's values"),
        format!("{} documents disagree with the catalogue", mismatched.len()),
        mismatched,
    ));

    let orphans = orphans(out_dir, &expected, &formats);
    if orphans.is_empty() {
        report.push(TestResult::pass(
            "documents/orphans",
            "no documents without a catalogue record",
        ));
    } else {
        report.push(
            TestResult::warn(
                "documents/orphans",
                format!("{} documents have no catalogue record", orphans.len()),
            )
            .with_details(orphans),
        );
    }

    Ok(report)
}

/// Returns true if `content`, a document in `format`, shows `quantity`.
fn repeats(content: &str, format: Format, quantity: &Quantity) -> bool {
    match format {
        Format::Text => {
            let line = format!("{}: {}", quantity.name, quantity.text);
            content.lines().any(|l| l == line)
        }
        Format::Latex => {
            let body = content
                .split_once("\\begin{document}")
                .map_or(content, |(_, body)| body);
            contains_token(body, &quantity.text)
        }
        Format::Json => true,
    }
}

/// Returns true if `token` occurs in `haystack` not glued to a longer number or word.
fn contains_token(haystack: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    haystack.match_indices(token).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let mut after = haystack[start + token.len()..].chars();
        let open = !before.is_some_and(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'));
        let close = match after.next() {
            None => true,
            Some('.') => !after.next().is_some_and(|c| c.is_ascii_digit()),
            Some(c) => !(c.is_alphanumeric() || c == '_'),
        };
        open && close
    })
}

/// Lists document files under `out_dir` that no record accounts for.
fn orphans(out_dir: &Path, expected: &HashSet<PathBuf>, formats: &[Format]) -> Vec<String> {
    let extensions: Vec<&str> = formats.iter().map(|f| f.extension()).collect();
    let mut found: Vec<String> = WalkDir::new(out_dir)
        .min_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|x| x.to_str())
                .is_some_and(|x| extensions.contains(&x))
        })
        .filter(|e| !expected.contains(e.path()))
        .map(|e| {
            e.path()
                .strip_prefix(out_dir)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_must_stand_alone() {
        assert!(contains_token(r"$\det T = 1$.", "1"));
        assert!(contains_token("weight\n8. The", "8"));
        assert!(contains_token("= -0.500000.", "-0.500000"));
        assert!(!contains_token(r"\section*{E8}", "8"));
        assert!(!contains_token("= 1.5", "1"));
        assert!(!contains_token("= 21", "1"));
        assert!(!contains_token("= -0.500000", "0.500000"));
        assert!(!contains_token("3.52e1", "1"));
        assert!(!contains_token("anything", ""));
    }

    #[test]
    fn text_logs_need_the_named_line() {
        let trace = Quantity::new("trace", 0.0, e8_spec::Precision::Integer);
        assert!(repeats("trace: 0\ndeterminant: 1\n", Format::Text, &trace));
        assert!(!repeats("trace: 3\nseed: 0\n", Format::Text, &trace));
    }

    #[test]
    fn latex_title_does_not_count() {
        let determinant = Quantity::new("determinant", 1.0, e8_spec::Precision::Integer);
        let doc = "\\title{E8 Proof \\#1}\n\\begin{document}\n$\\det T = 7$\n";
        assert!(!repeats(doc, Format::Latex, &determinant));
        assert!(repeats(&doc.replace("= 7", "= 1"), Format::Latex, &determinant));
    }
}
