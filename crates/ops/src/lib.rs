#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! High-level operations for pkgverify
//!
//! This crate sits between the CLI and the lower-level crates. The CLI builds
//! an [`OpsCtx`], calls one operation, and renders the [`OperationResult`].

mod context;
pub mod verify;

pub use context::{OpsContextBuilder, OpsCtx};
pub use verify::{verify, TestOutput};

pub use pkgverify_types::{FileCheck, ManifestSummary, VerificationReport};

use pkgverify_errors::{Error, OpsError};

/// Operation result that can be serialized for CLI output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Package verified end to end
    Verification(VerificationReport),
    /// Effective configuration, rendered as TOML
    Config(String),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be serialized.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OpsError::SerializationError {
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Render the effective configuration
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn show_config(ctx: &OpsCtx) -> Result<String, Error> {
    ctx.config.to_toml()
}
