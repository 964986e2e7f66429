//! Core proof catalogue model types.
//!
//! These types represent one generated proof and the catalogue that collects
//! them. A [`ProofRecord`] is created once by the
//! [`GeneratorContext`](crate::GeneratorContext) and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The formula family a proof record is evaluated with.
///
/// Every category has a stable label used in the JSON catalogue, as the
/// document sub-directory name, and in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Triality operator `T` with `T³ = I`.
    #[serde(rename = "E8_Triality")]
    Triality,
    /// LQG spin network area against the E8 triality area.
    #[serde(rename = "LQG_SpinNetwork")]
    SpinNetwork,
    /// Orch-OR coherence time scaled by the E8 dimension.
    #[serde(rename = "OrchOR_Consciousness")]
    OrchOr,
    /// Heterotic E8×E8 dimension projected through triality.
    #[serde(rename = "StringTheory_Vacuum")]
    StringVacuum,
    /// Norm of a sampled root vector in the E8 root lattice.
    #[serde(rename = "E8_RootLattice")]
    RootLattice,
    /// Order of the E8 Weyl group.
    #[serde(rename = "E8_WeylGroup")]
    WeylGroup,
    /// Determinant and sampled eigenvalue of the E8 Cartan matrix.
    #[serde(rename = "E8_Cartan")]
    Cartan,
    /// Rank, dimension, and root counts of E8.
    #[serde(rename = "E8_Symmetry")]
    Symmetry,
    /// Structure-constant norm and energy parameter.
    #[serde(rename = "E8_Quantum")]
    Quantum,
    /// Unification parameter close to one.
    #[serde(rename = "E8_Unification")]
    Unification,
    /// Path length of sampled waypoints in 8-dimensional configuration space.
    #[serde(rename = "E8_PathAction")]
    PathAction,
    /// Golay `[24, 12, 8]` code embedded through the Leech lattice.
    #[serde(rename = "E8_GolayCode")]
    GolayCode,
    /// Moonshine constants: `T_g = 194` and the `j`-invariant coefficient.
    #[serde(rename = "E8_Moonshine")]
    Moonshine,
    /// Antisymmetry of a sampled Lie bracket.
    #[serde(rename = "E8_LieBracket")]
    LieBracket,
}

impl Category {
    /// The default category list, in assignment order.
    pub const DEFAULT: [Category; 10] = [
        Category::Triality,
        Category::SpinNetwork,
        Category::OrchOr,
        Category::StringVacuum,
        Category::RootLattice,
        Category::WeylGroup,
        Category::Cartan,
        Category::Symmetry,
        Category::Quantum,
        Category::Unification,
    ];

    /// Every category, default ones first.
    pub const ALL: [Category; 14] = [
        Category::Triality,
        Category::SpinNetwork,
        Category::OrchOr,
        Category::StringVacuum,
        Category::RootLattice,
        Category::WeylGroup,
        Category::Cartan,
        Category::Symmetry,
        Category::Quantum,
        Category::Unification,
        Category::PathAction,
        Category::GolayCode,
        Category::Moonshine,
        Category::LieBracket,
    ];

    /// Returns the stable label of this category (e.g. `"E8_Triality"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Triality => "E8_Triality",
            Category::SpinNetwork => "LQG_SpinNetwork",
            Category::OrchOr => "OrchOR_Consciousness",
            Category::StringVacuum => "StringTheory_Vacuum",
            Category::RootLattice => "E8_RootLattice",
            Category::WeylGroup => "E8_WeylGroup",
            Category::Cartan => "E8_Cartan",
            Category::Symmetry => "E8_Symmetry",
            Category::Quantum => "E8_Quantum",
            Category::Unification => "E8_Unification",
            Category::PathAction => "E8_PathAction",
            Category::GolayCode => "E8_GolayCode",
            Category::Moonshine => "E8_Moonshine",
            Category::LieBracket => "E8_LieBracket",
        }
    }

    /// Looks up a category by its label. Returns `None` if not found.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Returns the theorem statement attached to every record of this category.
    #[must_use]
    pub fn theorem(self) -> &'static str {
        match self {
            Category::Triality => "T^3 = I for the E8 triality operator",
            Category::SpinNetwork => "LQG spin network area equals the E8 triality area",
            Category::OrchOr => "E8 collapse matches the 25 ms consciousness cycle",
            Category::StringVacuum => "E8xE8 heterotic string reduces to E8 via triality",
            Category::RootLattice => "E8 root lattice contains 240 roots of norm^2 = 2",
            Category::WeylGroup => "The E8 Weyl group has order 696729600",
            Category::Cartan => "The E8 Cartan matrix has rank 8 and determinant 1",
            Category::Symmetry => "E8 is the largest exceptional simple Lie group",
            Category::Quantum => "E8 structure constants normalise to the E8 dimension",
            Category::Unification => "E8 unifies quantum mechanics, gravity, and consciousness",
            Category::PathAction => "E8 provides an optimal path in configuration space",
            Category::GolayCode => "Golay [24,12,8] embeds in E8 via the Leech lattice",
            Category::Moonshine => "E8 connects to Moonshine via T_g = 194",
            Category::LieBracket => "The E8 Lie bracket satisfies antisymmetry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a quantity is rounded before it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Fixed-point with the given number of decimals.
    Fixed(usize),
    /// Scientific notation with the given number of mantissa decimals.
    Scientific(usize),
    /// Rounded to the nearest integer.
    Integer,
}

impl Precision {
    /// Renders `value` at this precision.
    #[must_use]
    pub fn render(self, value: f64) -> String {
        match self {
            Precision::Fixed(places) => format!("{value:.places$}"),
            Precision::Scientific(places) => format!("{value:.places$e}"),
            Precision::Integer => format!("{value:.0}"),
        }
    }
}

/// A named numeric field, rounded once and rendered identically everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Field name (e.g. `"lqg_area"`).
    pub name: String,
    /// The rounded value: `text` parsed back to `f64`.
    pub value: f64,
    /// The rendered value that appears verbatim in every output format.
    pub text: String,
}

impl Quantity {
    /// Rounds `raw` at `precision` and records both the text and its value.
    #[must_use]
    pub fn new(name: &str, raw: f64, precision: Precision) -> Self {
        let text = precision.render(raw);
        let value = text.parse().unwrap_or(raw);
        Self {
            name: name.to_owned(),
            value,
            text,
        }
    }
}

/// One generated proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// Proof identifier (1-based).
    pub id: u64,
    /// Category the record was evaluated with.
    pub category: Category,
    /// Theorem statement of the category.
    pub theorem: String,
    /// Formula-specific numeric fields, in a fixed order per category.
    pub quantities: Vec<Quantity>,
    /// Outcome of the category's tolerance check.
    pub verified: bool,
    /// Nominal significance ("sigma") value.
    pub significance: Quantity,
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// First 16 hex digits of the record's SHA-256 checksum.
    pub checksum: String,
}

/// Zero-pads a proof identifier to five digits. Longer identifiers are kept whole.
#[must_use]
pub fn pad_id(id: u64) -> String {
    format!("{id:05}")
}

impl ProofRecord {
    /// Looks up a quantity by name. Returns `None` if not found.
    #[must_use]
    pub fn quantity(&self, name: &str) -> Option<&Quantity> {
        self.quantities.iter().find(|q| q.name == name)
    }

    /// Returns the rendered text of a quantity, or `"?"` if the record has none by that name.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        self.quantity(name).map_or("?", |q| q.text.as_str())
    }

    /// Returns the zero-padded identifier used in file names (e.g. `"00042"`).
    #[must_use]
    pub fn padded_id(&self) -> String {
        pad_id(self.id)
    }

    /// Returns true if both records carry identical numeric fields.
    ///
    /// Timestamps and checksums are ignored.
    #[must_use]
    pub fn same_numbers(&self, other: &ProofRecord) -> bool {
        self.id == other.id
            && self.category == other.category
            && self.quantities == other.quantities
            && self.verified == other.verified
            && self.significance == other.significance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("E8_Nonexistent"), None);
    }

    #[test]
    fn serde_uses_label() {
        let json = serde_json::to_string(&Category::SpinNetwork).unwrap_or_default();
        assert_eq!(json, "\"LQG_SpinNetwork\"");
    }

    #[test]
    fn default_set_is_prefix_of_all() {
        assert_eq!(&Category::ALL[..10], &Category::DEFAULT[..]);
    }

    #[test]
    fn precision_rendering() {
        assert_eq!(Precision::Fixed(4).render(110.797_156), "110.7972");
        assert_eq!(Precision::Scientific(2).render(1.136e192), "1.14e192");
        assert_eq!(Precision::Integer.render(696_729_600.0), "696729600");
    }

    #[test]
    fn ids_pad_to_five_digits() {
        assert_eq!(pad_id(7), "00007");
        assert_eq!(pad_id(123_456), "123456");
    }

    #[test]
    fn quantity_value_matches_text() {
        let q = Quantity::new("eigenvalue", 1.943_571_234, Precision::Fixed(6));
        assert_eq!(q.text, "1.943571");
        assert_eq!(q.value, 1.943_571);
    }
}
