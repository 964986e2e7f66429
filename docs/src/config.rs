//! Pipeline configuration.
//!
//! Every field has a default, so an empty TOML file (or no file at all) is a
//! valid configuration:
//!
//! ```toml
//! seed = 42
//! total = 10000
//! batch_size = 1000
//! out_dir = "proofs"
//! categories = ["E8_Triality", "LQG_SpinNetwork"]
//! formats = ["latex", "text", "json"]
//! fixed_timestamp = "2025-11-10T00:00:00Z"
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use e8_spec::{Category, Clock, GeneratorContext, DEFAULT_SEED};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Format {
    /// One LaTeX document per record.
    Latex,
    /// One plain-text record log per record.
    Text,
    /// The shared JSON catalogue.
    Json,
}

impl Format {
    /// Every format, in emission order.
    pub const ALL: [Format; 3] = [Format::Latex, Format::Text, Format::Json];

    /// Returns the file extension of this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Latex => "tex",
            Format::Text => "txt",
            Format::Json => "json",
        }
    }

    /// Returns the column heading used in the manifest.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Format::Latex => "LaTeX",
            Format::Text => "Text",
            Format::Json => "JSON",
        }
    }

    /// Returns true for the per-record document formats.
    #[must_use]
    pub fn is_document(self) -> bool {
        matches!(self, Format::Latex | Format::Text)
    }
}

/// Errors raised while loading or validating a [`PipelineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A category label does not name any category.
    #[error("unknown category label: {0:?}")]
    UnknownCategory(String),
    /// The category list is empty.
    #[error("category list is empty")]
    EmptyCategories,
    /// The batch size is zero.
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
    /// The fixed timestamp is not RFC 3339.
    #[error("fixed timestamp {value:?} is not RFC 3339: {source}")]
    Timestamp {
        /// The rejected value.
        value: String,
        /// Underlying parse error.
        #[source]
        source: chrono::ParseError,
    },
}

/// Settings of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Base seed of every record stream.
    pub seed: u64,
    /// Number of records to generate.
    pub total: u64,
    /// Records per batch.
    pub batch_size: u64,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Category labels in assignment order.
    pub categories: Vec<String>,
    /// Formats to emit.
    pub formats: Vec<Format>,
    /// Optional RFC 3339 instant used for every timestamp.
    pub fixed_timestamp: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            total: 10_000,
            batch_size: 1_000,
            out_dir: PathBuf::from("proofs"),
            categories: Category::DEFAULT
                .iter()
                .map(|c| c.label().to_owned())
                .collect(),
            formats: Format::ALL.to_vec(),
            fixed_timestamp: None,
        }
    }
}

impl PipelineConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text does not match the schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks every field that can be invalid.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        self.category_list()?;
        self.clock()?;
        Ok(())
    }

    /// Resolves the category labels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCategories`] or [`ConfigError::UnknownCategory`].
    pub fn category_list(&self) -> Result<Vec<Category>, ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }
        self.categories
            .iter()
            .map(|label| {
                Category::from_label(label).ok_or_else(|| ConfigError::UnknownCategory(label.clone()))
            })
            .collect()
    }

    /// Returns the clock described by `fixed_timestamp`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Timestamp`] if the timestamp is not RFC 3339.
    pub fn clock(&self) -> Result<Clock, ConfigError> {
        match &self.fixed_timestamp {
            None => Ok(Clock::System),
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(|instant| Clock::Fixed(instant.with_timezone(&Utc)))
                .map_err(|source| ConfigError::Timestamp {
                    value: value.clone(),
                    source,
                }),
        }
    }

    /// Builds the generator context for this run.
    ///
    /// # Errors
    ///
    /// Returns an error if the categories or the timestamp are invalid.
    pub fn context(&self) -> Result<GeneratorContext, ConfigError> {
        Ok(GeneratorContext::new(self.seed, self.category_list()?).with_clock(self.clock()?))
    }

    /// Returns true if `format` is enabled.
    #[must_use]
    pub fn emits(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    /// Returns the number of batches: `ceil(total / batch_size)`.
    #[must_use]
    pub fn batch_count(&self) -> u64 {
        if self.batch_size == 0 {
            0
        } else {
            self.total.div_ceil(self.batch_size)
        }
    }
}
