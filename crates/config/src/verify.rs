//! Verification settings: where the archive is, how it unpacks, what must be
//! inside, and how its tests are run.

use std::path::{Component, Path};

use pkgverify_errors::ConfigError;
use serde::{Deserialize, Serialize};

use crate::constants;

/// How the archive is unpacked into the scratch directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// In-process gzip + tar decoding
    #[default]
    Builtin,
    /// The system `tar` binary (`tar -xzf <archive> -C <dir>`)
    System,
}

impl std::str::FromStr for ExtractorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "builtin" => Ok(Self::Builtin),
            "system" => Ok(Self::System),
            _ => Err(ConfigError::InvalidValue {
                field: "extractor".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// `[verify]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_archive_suffix")]
    pub archive_suffix: String,
    /// Scratch directory, relative to the verified directory
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: String,
    /// Directory the archive unpacks into, relative to the scratch directory
    #[serde(default = "default_package_dir")]
    pub package_dir: String,
    /// Manifest path, relative to the package directory
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
    /// Checked in order; the first missing entry aborts the run
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,
    /// Program followed by its arguments
    #[serde(default = "default_test_command")]
    pub test_command: Vec<String>,
    #[serde(default)]
    pub extractor: ExtractorKind,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            archive_suffix: default_archive_suffix(),
            scratch_dir: default_scratch_dir(),
            package_dir: default_package_dir(),
            manifest_file: default_manifest_file(),
            required_files: default_required_files(),
            test_command: default_test_command(),
            extractor: ExtractorKind::default(),
        }
    }
}

impl VerifyConfig {
    /// Check the settings for values that would make a run meaningless or
    /// let it touch paths outside the verified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.archive_suffix.is_empty() {
            return Err(invalid("verify.archive_suffix", ""));
        }
        if self.test_command.first().is_none_or(String::is_empty) {
            return Err(invalid("verify.test_command", &self.test_command.join(" ")));
        }
        if self.required_files.is_empty() {
            return Err(invalid("verify.required_files", "[]"));
        }

        check_relative("verify.scratch_dir", &self.scratch_dir)?;
        check_relative("verify.package_dir", &self.package_dir)?;
        check_relative("verify.manifest_file", &self.manifest_file)?;
        for file in &self.required_files {
            check_relative("verify.required_files", file)?;
        }

        Ok(())
    }

    /// The test command rendered for display
    #[must_use]
    pub fn test_command_line(&self) -> String {
        self.test_command.join(" ")
    }
}

fn check_relative(field: &str, value: &str) -> Result<(), ConfigError> {
    let path = Path::new(value);
    let plain = path.components().all(|c| matches!(c, Component::Normal(_)));

    if value.is_empty() || !plain {
        Err(invalid(field, value))
    } else {
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn default_archive_suffix() -> String {
    constants::ARCHIVE_SUFFIX.to_string()
}

fn default_scratch_dir() -> String {
    constants::SCRATCH_DIR.to_string()
}

fn default_package_dir() -> String {
    constants::PACKAGE_DIR.to_string()
}

fn default_manifest_file() -> String {
    constants::MANIFEST_FILE.to_string()
}

fn default_required_files() -> Vec<String> {
    constants::REQUIRED_FILES
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_test_command() -> Vec<String> {
    constants::TEST_COMMAND
        .iter()
        .map(ToString::to_string)
        .collect()
}
