//! Version manifest layer
//!
//! - [`types`]: `VersionRange`, `VersionSnapshot` and `Manifest`
//! - [`extractor`]: Regex extraction of snapshots from the compatibility page
//! - [`writer`]: Serialises the manifest to its JSON file

pub mod extractor;
pub mod types;
pub mod writer;

pub use extractor::ManifestExtractor;
pub use types::{Manifest, VersionRange, VersionSnapshot};
pub use writer::{ManifestError, render_manifest, write_manifest};
