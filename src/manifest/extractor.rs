//! Compatibility document extractor
//!
//! Splits the swc "selecting swc_core" page into one section per `swc_core`
//! heading and reads three version ranges out of each section.
//!
//! Format example:
//! ```text
//! ### `0.79.x` ~ `0.82.x`
//!
//! - `@swc/core@1.3.63` ~ `@swc/core@1.3.67`
//! - `next@13.4.10-canary.1` ~ `next@13.4.20`
//! ```

use regex::{Captures, Regex};

use crate::manifest::types::{Manifest, VersionRange, VersionSnapshot};

/// `swc_core` heading version: digits and dots with an optional `x`/`*` tail
const CORE_VERSION: &str = r"\d+(?:\.\d+)*(?:\.[x*])?";

/// List item version: like `CORE_VERSION` plus an optional prerelease suffix
const ITEM_VERSION: &str = r"\d+(?:\.\d+)*(?:\.[x*])?(?:-[0-9A-Za-z.]+)?";

/// Scoped npm package identifier: `@scope/name`
const PACKAGE_IDENT: &str = r"@[\w.-]+/[\w.-]+";

/// Unscoped framework name: `next`
const FRAMEWORK_IDENT: &str = r"[A-Za-z][\w.-]*";

/// Extracts the version manifest from the compatibility document
pub struct ManifestExtractor {
    /// Heading line: ``### `v0.79.x` ~ `0.82.x` ``
    heading_re: Regex,
    /// Package item: ``- `@swc/core@1.3.63` ~ `@swc/core@1.3.67` ``
    package_re: Regex,
    /// Framework item: ``- `next@13.4.10` ~ `next@13.4.20` ``
    framework_re: Regex,
}

impl ManifestExtractor {
    pub fn new() -> Self {
        Self {
            heading_re: Regex::new(&format!(
                r"(?m)^#+[ \t]+`v?({CORE_VERSION})`(?:[ \t]*~[ \t]*`v?({CORE_VERSION})`)?"
            ))
            .expect("heading pattern is valid"),
            package_re: Regex::new(&format!(
                r"(?m)^[ \t]*-[ \t]+`{PACKAGE_IDENT}@v?({ITEM_VERSION})`(?:[ \t]*~[ \t]*`{PACKAGE_IDENT}@v?({ITEM_VERSION})`)?"
            ))
            .expect("package pattern is valid"),
            framework_re: Regex::new(&format!(
                r"(?m)^[ \t]*-[ \t]+`(?:{FRAMEWORK_IDENT}@)?v?({ITEM_VERSION})`(?:[ \t]*~[ \t]*`(?:{FRAMEWORK_IDENT}@)?v?({ITEM_VERSION})`)?"
            ))
            .expect("framework pattern is valid"),
        }
    }

    /// Splits the document at every `swc_core` heading.
    ///
    /// Text before the first heading is returned as its own leading section.
    /// Sections are trimmed and empty ones dropped.
    pub fn split_sections<'a>(&self, document: &'a str) -> Vec<&'a str> {
        let mut sections = Vec::new();
        let mut start = 0;

        for heading in self.heading_re.find_iter(document) {
            sections.push(&document[start..heading.start()]);
            start = heading.start();
        }
        sections.push(&document[start..]);

        sections
            .into_iter()
            .map(str::trim)
            .filter(|section| !section.is_empty())
            .collect()
    }

    /// Reads one snapshot out of a section.
    ///
    /// Returns `None` unless both the heading and a package item match.
    pub fn extract_section(&self, section: &str) -> Option<VersionSnapshot> {
        let core = self.heading_re.captures(section)?;
        let package = self.package_re.captures(section)?;
        let framework = self
            .framework_re
            .captures(section)
            .map(|caps| range_from(&caps))
            .unwrap_or_else(VersionRange::open);

        Some(VersionSnapshot {
            core: range_from(&core),
            package: range_from(&package),
            framework,
        })
    }

    /// Extracts every accepted section in document order
    pub fn extract(&self, document: &str) -> Manifest {
        self.split_sections(document)
            .into_iter()
            .filter_map(|section| self.extract_section(section))
            .collect()
    }
}

impl Default for ManifestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn range_from(caps: &Captures) -> VersionRange {
    VersionRange::new(
        caps.get(1).map(|m| m.as_str()),
        caps.get(2).map(|m| m.as_str()),
    )
}
