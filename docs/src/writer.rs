//! Writes generated documents, the catalogue, and the manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Writes a document to the given path, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write document: {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "document written");
    Ok(())
}

/// Writes a text file (Markdown, JSON, etc.) to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "file written");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
