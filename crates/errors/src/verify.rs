//! Package verification error types
//!
//! Every variant is terminal for a verification run: nothing here is
//! retried or downgraded into a warning.

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum VerifyError {
    #[error("no archive ending in '{suffix}' found in {dir}")]
    NoArchiveFound { dir: String, suffix: String },

    #[error("extraction of {archive} failed: {message}")]
    ExtractionFailed { archive: String, message: String },

    #[error("essential file missing from package: {path}")]
    MissingEssentialFile { path: String },

    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    #[error("embedded tests failed: `{command}`: {message}")]
    TestsFailed { command: String, message: String },

    #[error("scratch directory error at {path}: {message}")]
    ScratchDirectory { path: String, message: String },
}

impl UserFacingError for VerifyError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NoArchiveFound { .. } => {
                Some("Run the packaging step first (e.g. `npm pack`) or pass --dir.")
            }
            Self::ExtractionFailed { .. } => {
                Some("The archive may be corrupt; rebuild it and retry.")
            }
            Self::MissingEssentialFile { .. } => {
                Some("Check the package's `files` list so the path is included when packing.")
            }
            Self::InvalidManifest { .. } => Some("Fix the manifest syntax and repack."),
            Self::TestsFailed { .. } => {
                Some("Run the test command inside the unpacked package to see the failures.")
            }
            Self::ScratchDirectory { .. } => {
                Some("Ensure the working directory is writable and retry.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::ScratchDirectory { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NoArchiveFound { .. } => "verify.no_archive",
            Self::ExtractionFailed { .. } => "verify.extraction_failed",
            Self::MissingEssentialFile { .. } => "verify.missing_file",
            Self::InvalidManifest { .. } => "verify.invalid_manifest",
            Self::TestsFailed { .. } => "verify.tests_failed",
            Self::ScratchDirectory { .. } => "verify.scratch_directory",
        };
        Some(code)
    }
}
