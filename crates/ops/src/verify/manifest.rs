//! Manifest inspection

use std::path::Path;

use pkgverify_errors::{Error, VerifyError};
use pkgverify_types::PackageManifest;

/// Read and parse the unpacked package's manifest
///
/// # Errors
///
/// Returns `VerifyError::InvalidManifest` if the file cannot be read or is
/// not a JSON object.
pub async fn read_manifest(path: &Path) -> Result<PackageManifest, Error> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| VerifyError::InvalidManifest {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    PackageManifest::parse(&content, path)
}
