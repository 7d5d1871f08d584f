use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Source / output defaults
// =============================================================================

/// Source of the swc plugin compatibility page
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/swc-project/website/main/pages/docs/plugin/selecting-swc-core.mdx";

/// Manifest file written when no override is given
pub const DEFAULT_OUTPUT_PATH: &str = "versions.json";

/// User agent sent with the document request
pub const USER_AGENT: &str = "swc-versions";

/// Environment variable holding the tracing filter
pub const LOG_ENV_VAR: &str = "SWC_VERSIONS_LOG";

/// Filter used when `LOG_ENV_VAR` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "swc_versions=info";

/// Extractor configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// URL of the compatibility document
    pub source_url: String,
    /// Path the manifest is written to
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Loads a JSON config file. Missing fields fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command line overrides on top of this config
    pub fn with_overrides(
        mut self,
        source_url: Option<String>,
        output_path: Option<PathBuf>,
    ) -> Self {
        if let Some(url) = source_url {
            self.source_url = url;
        }
        if let Some(path) = output_path {
            self.output_path = path;
        }
        self
    }
}
