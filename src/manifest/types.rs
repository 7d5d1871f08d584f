//! Manifest record types

use serde::{Deserialize, Serialize};

/// A `from`/`to` pair where either side may be open-ended
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl VersionRange {
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    /// Range with both sides open, used when a section lists no versions
    pub fn open() -> Self {
        Self::default()
    }
}

/// Compatible versions listed under one `swc_core` heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    /// `swc_core` crate range taken from the section heading
    pub core: VersionRange,
    /// `@swc/core` package range
    pub package: VersionRange,
    /// Host framework range (e.g. Next.js); open when the section has none
    pub framework: VersionRange,
}

/// Snapshots in the order their sections appear in the document
pub type Manifest = Vec<VersionSnapshot>;
