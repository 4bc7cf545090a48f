//! Report type definitions for verification runs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::PackageManifest;

/// Outcome of a successful verification run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Archive that was verified
    pub archive: PathBuf,
    /// Archive size in bytes
    pub size_bytes: u64,
    /// Required files, in the order they were checked
    pub files: Vec<FileCheck>,
    /// Manifest fields reported to the user
    pub manifest: ManifestSummary,
    /// Embedded test command that passed
    pub test_command: String,
    /// Total execution time
    pub duration_ms: u64,
}

impl VerificationReport {
    /// Archive size in kilobytes, two decimals
    #[must_use]
    pub fn size_kb(&self) -> String {
        format_kb(self.size_bytes)
    }
}

/// Presence check for one required file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCheck {
    /// Path relative to the unpacked package directory
    pub path: String,
    pub found: bool,
}

/// The three manifest fields surfaced in reports
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSummary {
    pub name: Option<String>,
    pub version: Option<String>,
    pub main: Option<String>,
}

impl From<&PackageManifest> for ManifestSummary {
    fn from(manifest: &PackageManifest) -> Self {
        Self {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            main: manifest.main.clone(),
        }
    }
}

/// Format a byte count as kilobytes with two decimals (`1536` -> `"1.50"`)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}
