//! Package manifest (`package.json`) model
//!
//! Only the metadata the verifier reports on is modelled. Any JSON object is
//! accepted: fields of an unexpected type are rendered, never rejected.

use std::collections::BTreeMap;
use std::path::Path;

use pkgverify_errors::{Error, VerifyError};
use serde_json::{Map, Value};

/// Metadata read from an unpacked package's manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Entry point, relative to the package root
    pub main: Option<String>,
    /// String-valued entries of `scripts`
    pub scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parse manifest text
    ///
    /// `path` is only used to label the error. String fields are taken as-is,
    /// other non-null values in their JSON form, and absent or `null` fields
    /// become `None`.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::InvalidManifest` if the text is not valid JSON or
    /// its top-level value is not an object.
    pub fn parse(content: &str, path: &Path) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(content).map_err(|e| invalid(path, &e.to_string()))?;

        let Value::Object(object) = value else {
            return Err(invalid(path, "top-level value must be an object"));
        };

        Ok(Self {
            name: field_text(&object, "name"),
            version: field_text(&object, "version"),
            main: field_text(&object, "main"),
            scripts: scripts(&object),
        })
    }

    /// The `test` script the package declares, if any
    #[must_use]
    pub fn test_script(&self) -> Option<&str> {
        self.scripts.get("test").map(String::as_str)
    }
}

fn field_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn scripts(object: &Map<String, Value>) -> BTreeMap<String, String> {
    let Some(Value::Object(scripts)) = object.get("scripts") else {
        return BTreeMap::new();
    };

    scripts
        .iter()
        .filter_map(|(name, command)| Some((name.clone(), command.as_str()?.to_string())))
        .collect()
}

fn invalid(path: &Path, message: &str) -> Error {
    VerifyError::InvalidManifest {
        path: path.display().to_string(),
        message: message.to_string(),
    }
    .into()
}
