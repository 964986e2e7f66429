//! Markdown manifest (`INDEX.md`) listing every generated document.

use std::fmt::Write as _;

use e8_spec::{pad_id, Category, ProofRecord};

use crate::config::Format;
use crate::layout;

/// One table row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRow {
    /// Proof identifier.
    pub id: u64,
    /// Category label.
    pub category: String,
    /// Relative document links, one per enabled document format.
    pub links: Vec<String>,
}

impl ManifestRow {
    /// Builds the row of `record` linking the documents of `formats`.
    #[must_use]
    pub fn for_record(record: &ProofRecord, formats: &[Format]) -> Self {
        Self {
            id: record.id,
            category: record.category.label().to_owned(),
            links: formats
                .iter()
                .map(|&format| layout::record_link(record, format))
                .collect(),
        }
    }
}

/// The manifest of one run.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// RFC 3339 generation time.
    pub generated: String,
    /// Category list in assignment order.
    pub categories: Vec<Category>,
    /// Enabled document formats, in column order.
    pub formats: Vec<Format>,
    /// One row per record, in id order.
    pub rows: Vec<ManifestRow>,
}

impl Manifest {
    /// Creates an empty manifest for the given document formats.
    ///
    /// Non-document formats are dropped from `formats`.
    #[must_use]
    pub fn new(categories: Vec<Category>, formats: &[Format]) -> Self {
        Self {
            generated: String::new(),
            categories,
            formats: Format::ALL
                .into_iter()
                .filter(|f| f.is_document() && formats.contains(f))
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Appends the row of `record`.
    pub fn push(&mut self, record: &ProofRecord) {
        self.rows.push(ManifestRow::for_record(record, &self.formats));
    }

    /// Renders the manifest as Markdown.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(128 + self.rows.len() * 96);
        out.push_str("# E8 Proof Index\n\n");
        let _ = writeln!(out, "**Total Proofs:** {}  ", self.rows.len());
        let _ = writeln!(out, "**Generated:** {}\n", self.generated);

        out.push_str("## Categories\n\n");
        for (i, category) in self.categories.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, category.label());
        }
        out.push('\n');

        out.push_str("## Proofs\n\n| Proof # | Category |");
        for format in &self.formats {
            let _ = write!(out, " {} |", format.heading());
        }
        out.push_str("\n|---|---|");
        for _ in &self.formats {
            out.push_str("---|");
        }
        out.push('\n');

        for row in &self.rows {
            let _ = write!(out, "| {} | {} |", pad_id(row.id), row.category);
            for (format, link) in self.formats.iter().zip(&row.links) {
                let _ = write!(out, " [{}]({link}) |", format.extension());
            }
            out.push('\n');
        }
        out
    }
}

/// Extracts the table rows from a rendered manifest.
///
/// Lines that are not proof rows (headings, the header row, the separator)
/// are skipped.
#[must_use]
pub fn parse_rows(markdown: &str) -> Vec<ManifestRow> {
    markdown.lines().filter_map(parse_row).collect()
}

/// Reads the document formats from the table header of a rendered manifest.
///
/// Returns `None` if the manifest has no proof table.
#[must_use]
pub fn parse_formats(markdown: &str) -> Option<Vec<Format>> {
    let header = markdown
        .lines()
        .find(|line| line.starts_with("| Proof # | Category |"))?;
    Some(
        header
            .split('|')
            .map(str::trim)
            .skip(3)
            .filter_map(|heading| Format::ALL.into_iter().find(|f| f.heading() == heading))
            .collect(),
    )
}

fn parse_row(line: &str) -> Option<ManifestRow> {
    let inner = line.trim().strip_prefix('|')?.strip_suffix('|')?;
    let mut cells = inner.split('|').map(str::trim);
    let id = cells.next()?.parse().ok()?;
    let category = cells.next()?.to_owned();
    let links = cells
        .filter_map(|cell| {
            let start = cell.find("](")? + 2;
            let end = cell.rfind(')')?;
            cell.get(start..end).map(str::to_owned)
        })
        .collect();
    Some(ManifestRow {
        id,
        category,
        links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use e8_spec::GeneratorContext;

    fn manifest(formats: &[Format], count: u64) -> Manifest {
        let ctx = GeneratorContext::default();
        let mut manifest = Manifest::new(ctx.categories().to_vec(), formats);
        manifest.generated = String::from("2025-11-10T18:02:58.000000Z");
        for id in 1..=count {
            manifest.push(&ctx.generate_next(id));
        }
        manifest
    }

    #[test]
    fn header_and_table() {
        let md = manifest(&Format::ALL, 2).render();
        assert!(md.starts_with("# E8 Proof Index\n"));
        assert!(md.contains("**Total Proofs:** 2"));
        assert!(md.contains("**Generated:** 2025-11-10T18:02:58.000000Z"));
        assert!(md.contains("1. E8_Triality\n"));
        assert!(md.contains("10. E8_Unification\n"));
        assert!(md.contains("| Proof # | Category | LaTeX | Text |\n"));
        assert!(md.contains(
            "| 00002 | LQG_SpinNetwork | [tex](LQG_SpinNetwork/proof_00002.tex) | [txt](LQG_SpinNetwork/proof_00002.txt) |"
        ));
    }

    #[test]
    fn json_only_has_no_link_columns() {
        let md = manifest(&[Format::Json], 1).render();
        assert!(md.contains("| Proof # | Category |\n|---|---|\n| 00001 | E8_Triality |\n"));
    }

    #[test]
    fn rows_parse_back() {
        let built = manifest(&[Format::Text, Format::Latex], 12);
        let parsed = parse_rows(&built.render());
        assert_eq!(parsed, built.rows);
        assert_eq!(
            parsed[10].links,
            vec![
                String::from("E8_Triality/proof_00011.tex"),
                String::from("E8_Triality/proof_00011.txt"),
            ]
        );
    }

    #[test]
    fn formats_parse_back() {
        let md = manifest(&[Format::Text, Format::Json], 1).render();
        assert_eq!(parse_formats(&md), Some(vec![Format::Text]));
        assert_eq!(
            parse_formats(&manifest(&Format::ALL, 0).render()),
            Some(vec![Format::Latex, Format::Text])
        );
        assert_eq!(parse_formats("# nothing here"), None);
    }

    #[test]
    fn long_ids_keep_every_digit() {
        let mut built = Manifest::new(vec![Category::Triality], &[Format::Text]);
        let mut record = GeneratorContext::new(1, vec![Category::Triality]).generate_next(1);
        record.id = 123_456;
        built.push(&record);
        let md = built.render();
        assert!(md.contains("| 123456 | E8_Triality | [txt](E8_Triality/proof_123456.txt) |"));
        assert_eq!(parse_rows(&md)[0].id, 123_456);
    }

    #[test]
    fn empty_manifest_has_header_only() {
        let md = manifest(&Format::ALL, 0).render();
        assert!(md.contains("**Total Proofs:** 0"));
        assert!(parse_rows(&md).is_empty());
    }
}
