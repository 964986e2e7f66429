//! Aggregate statistics over a batch of records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ProofRecord;

/// Min, max, and mean of the significance values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceStats {
    /// Smallest significance value.
    pub min: f64,
    /// Largest significance value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

/// Counts and rates over a set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Number of records with `verified = true`.
    pub verified: usize,
    /// `verified / total`, or 0 for an empty batch.
    pub verification_rate: f64,
    /// Record count per category label.
    pub per_category: BTreeMap<String, usize>,
    /// Significance statistics, absent for an empty batch.
    pub significance: Option<SignificanceStats>,
}

impl Summary {
    /// Builds the summary of `records`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProofRecord>,
    {
        let mut tally = Tally::default();
        for record in records {
            tally.push(record);
        }
        tally.finish()
    }

    /// Returns the number of records with `verified = false`.
    #[must_use]
    pub fn unverified(&self) -> usize {
        self.total - self.verified
    }

    /// Returns the categories sorted by descending count, then by label.
    #[must_use]
    pub fn distribution(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<_> = self
            .per_category
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

/// Running counters fed one record at a time.
#[derive(Debug, Default, Clone)]
pub struct Tally {
    total: usize,
    verified: usize,
    per_category: BTreeMap<String, usize>,
    sigma_min: f64,
    sigma_max: f64,
    sigma_sum: f64,
}

impl Tally {
    /// Adds one record.
    pub fn push(&mut self, record: &ProofRecord) {
        let sigma = record.significance.value;
        if self.total == 0 {
            self.sigma_min = sigma;
            self.sigma_max = sigma;
        } else {
            self.sigma_min = self.sigma_min.min(sigma);
            self.sigma_max = self.sigma_max.max(sigma);
        }
        self.sigma_sum += sigma;
        self.total += 1;
        if record.verified {
            self.verified += 1;
        }
        *self
            .per_category
            .entry(record.category.label().to_owned())
            .or_insert(0) += 1;
    }

    /// Returns the number of records pushed so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.total
    }

    /// Produces the summary of everything pushed so far.
    #[must_use]
    pub fn finish(&self) -> Summary {
        let (verification_rate, significance) = if self.total == 0 {
            (0.0, None)
        } else {
            (
                self.verified as f64 / self.total as f64,
                Some(SignificanceStats {
                    min: self.sigma_min,
                    max: self.sigma_max,
                    mean: self.sigma_sum / self.total as f64,
                }),
            )
        };
        Summary {
            total: self.total,
            verified: self.verified,
            verification_rate,
            per_category: self.per_category.clone(),
            significance,
        }
    }
}
