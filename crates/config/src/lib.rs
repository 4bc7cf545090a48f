#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for pkgverify
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/pkgverify/config.toml)
//! - Environment variables
//! - CLI flags

pub mod constants;
pub mod core;
pub mod verify;

pub use core::GeneralConfig;
pub use verify::{ExtractorKind, VerifyConfig};

use pkgverify_errors::{ConfigError, Error};
use pkgverify_types::{ColorChoice, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub verify: VerifyConfig,
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir
            .join(constants::APP_NAME)
            .join(constants::CONFIG_FILE))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let Ok(config_path) = Self::default_path() else {
            tracing::debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if config_path.exists() {
            tracing::debug!("loading config from {}", config_path.display());
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file.
    /// If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // PKGVERIFY_OUTPUT
        if let Ok(output) = std::env::var("PKGVERIFY_OUTPUT") {
            self.general.default_output = match output.as_str() {
                "plain" => OutputFormat::Plain,
                "tty" => OutputFormat::Tty,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "PKGVERIFY_OUTPUT".to_string(),
                        value: output,
                    }
                    .into())
                }
            };
        }

        // PKGVERIFY_COLOR
        if let Ok(color) = std::env::var("PKGVERIFY_COLOR") {
            self.general.color = match color.as_str() {
                "always" => ColorChoice::Always,
                "auto" => ColorChoice::Auto,
                "never" => ColorChoice::Never,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "PKGVERIFY_COLOR".to_string(),
                        value: color,
                    }
                    .into())
                }
            };
        }

        // PKGVERIFY_ARCHIVE_SUFFIX
        if let Ok(suffix) = std::env::var("PKGVERIFY_ARCHIVE_SUFFIX") {
            self.verify.archive_suffix = suffix;
        }

        // PKGVERIFY_EXTRACTOR
        if let Ok(extractor) = std::env::var("PKGVERIFY_EXTRACTOR") {
            self.verify.extractor = extractor.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PKGVERIFY_EXTRACTOR".to_string(),
                value: extractor,
            })?;
        }

        // PKGVERIFY_TEST_COMMAND (whitespace separated, no quoting)
        if let Ok(command) = std::env::var("PKGVERIFY_TEST_COMMAND") {
            self.verify.test_command = command.split_whitespace().map(String::from).collect();
        }

        Ok(())
    }

    /// Validate the merged configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any verification setting is unusable.
    pub fn validate(&self) -> Result<(), Error> {
        self.verify.validate().map_err(Into::into)
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError {
                error: e.to_string(),
            })
            .map_err(Into::into)
    }
}
