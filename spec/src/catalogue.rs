//! The JSON proof catalogue: a metadata block followed by every record.

use serde::{Deserialize, Serialize};

use crate::model::{Category, ProofRecord};
use crate::summary::Summary;

/// Run metadata stored ahead of the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueMetadata {
    /// Number of records in the catalogue.
    pub total_proofs: usize,
    /// Number of records requested.
    pub target_proofs: u64,
    /// Base seed of the run.
    pub seed: u64,
    /// Records per batch.
    pub batch_size: u64,
    /// Category list in assignment order.
    pub categories: Vec<Category>,
    /// RFC 3339 start time.
    pub start_time: String,
    /// RFC 3339 completion time.
    pub completion_time: String,
    /// Wall-clock duration of the run.
    pub duration_seconds: f64,
    /// Name and version of the producing tool.
    pub generator: String,
    /// Aggregate statistics over `proofs`.
    pub summary: Summary,
}

/// A complete catalogue document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    /// Run metadata.
    pub metadata: CatalogueMetadata,
    /// Every record, in id order.
    pub proofs: Vec<ProofRecord>,
}

impl Catalogue {
    /// Serialises the catalogue as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a catalogue from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid catalogue document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Clock, GeneratorContext};

    #[test]
    fn catalogue_survives_json() {
        let ctx = GeneratorContext::default().with_clock(Clock::Fixed(chrono::DateTime::default()));
        let proofs: Vec<_> = (1..=12).map(|id| ctx.generate_next(id)).collect();
        let catalogue = Catalogue {
            metadata: CatalogueMetadata {
                total_proofs: proofs.len(),
                target_proofs: 12,
                seed: ctx.seed(),
                batch_size: 5,
                categories: ctx.categories().to_vec(),
                start_time: ctx.clock().timestamp(),
                completion_time: ctx.clock().timestamp(),
                duration_seconds: 0.0,
                generator: String::from("test"),
                summary: Summary::from_records(&proofs),
            },
            proofs,
        };
        let parsed = catalogue
            .to_json_pretty()
            .and_then(|json| Catalogue::from_json(&json));
        assert_eq!(parsed.ok(), Some(catalogue));
    }
}
