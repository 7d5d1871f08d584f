//! Fetch, extract and write the version manifest in one pass

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::manifest::extractor::ManifestExtractor;
use crate::manifest::types::Manifest;
use crate::manifest::writer::{ManifestError, write_manifest};
use crate::source::document::DocumentSource;
use crate::source::error::FetchError;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Regenerates the manifest file from the document source.
///
/// The output file is only touched after the whole document has been
/// fetched and extracted, so a failed fetch leaves it unchanged.
pub async fn update_manifest(
    source: &dyn DocumentSource,
    extractor: &ManifestExtractor,
    output_path: &Path,
) -> Result<Manifest, UpdateError> {
    let document = source.fetch_document().await?;
    debug!(
        "Fetched {} bytes from {}",
        document.len(),
        source.location()
    );

    let manifest = extractor.extract(&document);

    write_manifest(output_path, &manifest)?;
    info!(
        "Wrote {} version snapshots to {:?}",
        manifest.len(),
        output_path
    );

    Ok(manifest)
}
