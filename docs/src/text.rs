//! Plain-text record log.

use std::fmt::Write as _;

use e8_spec::ProofRecord;

/// Renders `record` as a human-readable log, one `name: value` line per field.
#[must_use]
pub fn render(record: &ProofRecord) -> String {
    let mut out = String::with_capacity(512);
    let _ = writeln!(out, "E8 Proof #{}", record.id);
    let _ = writeln!(out, "category: {}", record.category.label());
    let _ = writeln!(out, "theorem: {}", record.theorem);
    out.push('\n');
    for quantity in &record.quantities {
        let _ = writeln!(out, "{}: {}", quantity.name, quantity.text);
    }
    out.push('\n');
    let _ = writeln!(out, "verified: {}", record.verified);
    let _ = writeln!(out, "sigma: {}", record.significance.text);
    let _ = writeln!(out, "timestamp: {}", record.timestamp);
    let _ = writeln!(out, "checksum: {}", record.checksum);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use e8_spec::GeneratorContext;

    #[test]
    fn one_line_per_quantity() {
        let record = GeneratorContext::default().generate_next(2);
        let log = render(&record);
        for quantity in &record.quantities {
            let line = format!("{}: {}", quantity.name, quantity.text);
            assert!(log.lines().any(|l| l == line), "missing line {line}");
        }
        assert!(log.starts_with("E8 Proof #2\n"));
        assert!(log.contains("category: LQG_SpinNetwork\n"));
        assert!(log.contains(&format!("sigma: {}\n", record.significance.text)));
        assert!(log.contains(&format!("checksum: {}\n", record.checksum)));
    }

    #[test]
    fn verified_flag_rendered() {
        let ctx = GeneratorContext::default();
        assert!(render(&ctx.generate_next(1)).contains("verified: true\n"));
        assert!(render(&ctx.generate_next(3)).contains("verified: false\n"));
    }
}
