//! Batch driver: generates every record and hands it to the [`Emitter`].

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use e8_spec::{Catalogue, CatalogueMetadata, GeneratorContext, ProofRecord, Summary, Tally};
use tracing::info;

use crate::config::{Format, PipelineConfig};
use crate::manifest::Manifest;
use crate::{latex, layout, text, writer};

/// Name and version recorded in the catalogue metadata.
pub const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Summary over every generated record.
    pub summary: Summary,
    /// Number of batches run.
    pub batches: u64,
    /// Number of per-record documents written.
    pub documents: usize,
    /// Path of the catalogue, if JSON output was enabled.
    pub catalogue: Option<PathBuf>,
    /// Path of the manifest.
    pub manifest: PathBuf,
    /// Wall-clock duration of the run.
    pub duration_seconds: f64,
}

/// Writes the documents of each record and collects the run-level artifacts.
#[derive(Debug)]
pub struct Emitter {
    out_dir: PathBuf,
    formats: Vec<Format>,
    records: Vec<ProofRecord>,
    tally: Tally,
    manifest: Manifest,
    documents: usize,
}

impl Emitter {
    /// Creates an emitter writing the formats `config` enables under its output directory.
    #[must_use]
    pub fn new(config: &PipelineConfig, context: &GeneratorContext) -> Self {
        let formats: Vec<Format> = Format::ALL
            .into_iter()
            .filter(|&f| config.emits(f))
            .collect();
        Self {
            out_dir: config.out_dir.clone(),
            manifest: Manifest::new(context.categories().to_vec(), &formats),
            formats,
            records: Vec::new(),
            tally: Tally::default(),
            documents: 0,
        }
    }

    /// Writes the enabled documents of `record` and records it for the catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be written.
    pub fn emit(&mut self, record: ProofRecord) -> Result<()> {
        for &format in &self.formats {
            let content = match format {
                Format::Latex => latex::render(&record),
                Format::Text => text::render(&record),
                Format::Json => continue,
            };
            let path = layout::record_path(&self.out_dir, &record, format);
            writer::write_document(&path, &content)?;
            self.documents += 1;
        }
        self.tally.push(&record);
        self.manifest.push(&record);
        if self.formats.contains(&Format::Json) {
            self.records.push(record);
        }
        Ok(())
    }

    /// Returns the number of records emitted so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tally.count()
    }

    /// Writes the catalogue (if enabled) and the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails or a file cannot be written.
    pub fn finish(self, run: RunInfo) -> Result<RunOutcome> {
        let summary = self.tally.finish();

        let catalogue = if self.formats.contains(&Format::Json) {
            let path = layout::catalogue_path(&self.out_dir);
            let catalogue = Catalogue {
                metadata: CatalogueMetadata {
                    total_proofs: self.records.len(),
                    target_proofs: run.target,
                    seed: run.seed,
                    batch_size: run.batch_size,
                    categories: self.manifest.categories.clone(),
                    start_time: run.start_time,
                    completion_time: run.completion_time.clone(),
                    duration_seconds: run.duration_seconds,
                    generator: GENERATOR.to_owned(),
                    summary: summary.clone(),
                },
                proofs: self.records,
            };
            let json = catalogue
                .to_json_pretty()
                .context("Failed to serialise the proof catalogue")?;
            writer::write_text(&path, &json)?;
            Some(path)
        } else {
            None
        };

        let mut manifest = self.manifest;
        manifest.generated = run.completion_time;
        let manifest_path = layout::manifest_path(&self.out_dir);
        writer::write_text(&manifest_path, &manifest.render())?;

        Ok(RunOutcome {
            summary,
            batches: run.batches,
            documents: self.documents,
            catalogue,
            manifest: manifest_path,
            duration_seconds: run.duration_seconds,
        })
    }
}

/// Run-level facts recorded in the catalogue metadata.
#[derive(Debug, Clone)]
pub struct RunInfo {
    /// Requested record count.
    pub target: u64,
    /// Base seed.
    pub seed: u64,
    /// Records per batch.
    pub batch_size: u64,
    /// Number of batches run.
    pub batches: u64,
    /// RFC 3339 start time.
    pub start_time: String,
    /// RFC 3339 completion time.
    pub completion_time: String,
    /// Wall-clock duration.
    pub duration_seconds: f64,
}

/// Runs the whole pipeline described by `config`.
///
/// Records are generated in id order, `batch_size` at a time, with one
/// progress event per batch. The catalogue and manifest are written after
/// the last batch.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any file cannot be written.
pub fn run(config: &PipelineConfig) -> Result<RunOutcome> {
    config.validate().context("Invalid pipeline configuration")?;
    let context = config.context()?;
    let started = Instant::now();
    let start_time = context.clock().timestamp();

    info!(
        total = config.total,
        batch_size = config.batch_size,
        seed = config.seed,
        out_dir = %config.out_dir.display(),
        "starting proof generation"
    );

    let mut emitter = Emitter::new(config, &context);
    let batches = config.batch_count();
    for batch in 0..batches {
        let batch_started = Instant::now();
        let first = batch * config.batch_size + 1;
        let last = ((batch + 1) * config.batch_size).min(config.total);
        for id in first..=last {
            emitter.emit(context.generate_next(id))?;
        }
        let elapsed = started.elapsed().as_secs_f64();
        let done = emitter.count();
        let rate = rate(done, elapsed);
        info!(
            batch = batch + 1,
            batches,
            generated = done,
            total = config.total,
            rate,
            eta_seconds = estimated_total_seconds(config.total, rate),
            batch_seconds = batch_started.elapsed().as_secs_f64(),
            "batch complete"
        );
    }

    let duration_seconds = started.elapsed().as_secs_f64();
    let outcome = emitter.finish(RunInfo {
        target: config.total,
        seed: config.seed,
        batch_size: config.batch_size,
        batches,
        start_time,
        completion_time: context.clock().timestamp(),
        duration_seconds,
    })?;

    info!(
        generated = outcome.summary.total,
        verified = outcome.summary.verified,
        verification_rate = outcome.summary.verification_rate,
        seconds = duration_seconds,
        "proof generation complete"
    );
    Ok(outcome)
}

/// Records per second, or 0 before any time has passed.
fn rate(count: usize, seconds: f64) -> f64 {
    if seconds > 0.0 {
        count as f64 / seconds
    } else {
        0.0
    }
}

/// Projected duration of the whole run at `rate`, or 0 while no rate is known.
fn estimated_total_seconds(total: u64, rate: f64) -> f64 {
    if rate > 0.0 {
        total as f64 / rate
    } else {
        0.0
    }
}
