//! Manifest file output

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::types::Manifest;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write manifest to {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Renders the manifest as JSON indented with two spaces
pub fn render_manifest(manifest: &Manifest) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Writes the manifest to `path`, replacing any previous content
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), ManifestError> {
    let json = render_manifest(manifest)?;

    std::fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}
