//! Loading emitted artifacts back from an output directory.

use std::io;
use std::path::{Path, PathBuf};

use e8_docs::layout;
use e8_spec::Catalogue;
use thiserror::Error;

/// Errors raised while reading an emitted artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact does not exist.
    #[error("artifact not found: {}", path.display())]
    Missing {
        /// Expected location.
        path: PathBuf,
    },
    /// The artifact exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        /// Location of the artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The catalogue is not a valid catalogue document.
    #[error("malformed catalogue {}: {source}", path.display())]
    Malformed {
        /// Location of the catalogue.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Reads an artifact as text.
///
/// # Errors
///
/// Returns [`ArtifactError::Missing`] if `path` does not exist and
/// [`ArtifactError::Unreadable`] for any other I/O failure.
pub fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ArtifactError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Loads `proofs.json` from `out_dir`.
///
/// # Errors
///
/// Returns an [`ArtifactError`] if the catalogue is missing, unreadable, or malformed.
pub fn load_catalogue(out_dir: &Path) -> Result<Catalogue, ArtifactError> {
    let path = layout::catalogue_path(out_dir);
    let json = read_artifact(&path)?;
    Catalogue::from_json(&json).map_err(|source| ArtifactError::Malformed { path, source })
}

/// Loads `INDEX.md` from `out_dir`.
///
/// # Errors
///
/// Returns an [`ArtifactError`] if the manifest is missing or unreadable.
pub fn load_manifest(out_dir: &Path) -> Result<String, ArtifactError> {
    read_artifact(&layout::manifest_path(out_dir))
}
