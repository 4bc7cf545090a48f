use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::FailureContext;

/// Package verification events, one per observable step of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VerifyEvent {
    /// Verification of a directory started
    Started { root: PathBuf },

    /// Archive selected for verification
    ArchiveFound { path: PathBuf, size_bytes: u64 },

    /// Scratch directory is empty and ready
    ScratchPrepared { path: PathBuf, removed_stale: bool },

    /// Unpacking started
    ExtractionStarted {
        archive: PathBuf,
        destination: PathBuf,
        extractor: String,
    },

    /// Unpacking finished
    ExtractionCompleted { destination: PathBuf },

    /// Essential-file check started
    EssentialCheckStarted { package_dir: PathBuf, total: usize },

    /// One required file was looked up
    EssentialFileChecked { path: String, found: bool },

    /// Manifest parsed
    ManifestRead {
        name: Option<String>,
        version: Option<String>,
        main: Option<String>,
    },

    /// Embedded test command spawned
    TestsStarted { command: String, cwd: PathBuf },

    /// Embedded test command exited successfully
    TestsPassed { command: String, duration_ms: u64 },

    /// Scratch directory removed
    ScratchRemoved { path: PathBuf },

    /// Every step passed
    Completed { archive: PathBuf, duration_ms: u64 },

    /// A step failed; the run is over
    Failed { failure: FailureContext },
}
