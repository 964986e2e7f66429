//! E8 proof emitter.
//!
//! Renders every [`ProofRecord`](e8_spec::ProofRecord) as a LaTeX document
//! and a plain-text log, collects the records into a JSON catalogue, indexes
//! them in a Markdown manifest, and drives batch generation.
//!
//! # Entry Point
//!
//! ```no_run
//! use e8_docs::{generate, PipelineConfig};
//!
//! let config = PipelineConfig {
//!     total: 100,
//!     ..PipelineConfig::default()
//! };
//! let outcome = generate(&config).expect("Proof generation failed");
//! println!("{} verified", outcome.summary.verified);
//! ```
//!
//! # Structure
//!
//! ```text
//! proofs/
//!   proofs.json             ← metadata + every record
//!   INDEX.md                ← manifest table
//!   E8_Triality/
//!     proof_00001.tex
//!     proof_00001.txt
//!     proof_00011.tex
//!     ...
//!   LQG_SpinNetwork/
//!     ...
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod latex;
pub mod layout;
pub mod manifest;
pub mod pipeline;
pub mod text;
pub mod writer;

use anyhow::Result;

pub use config::{ConfigError, Format, PipelineConfig};
pub use pipeline::{Emitter, RunOutcome};

/// Generates every artifact described by `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any file cannot be written.
pub fn generate(config: &PipelineConfig) -> Result<RunOutcome> {
    pipeline::run(config)
}
