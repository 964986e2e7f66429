//! Shared setup for the E8 client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the log subscriber.
///
/// `RUST_LOG` controls the level (default `info`), e.g.
/// `RUST_LOG=e8_docs=debug e8-generate` logs every written file.
/// Logs go to stderr so reports on stdout stay clean.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
