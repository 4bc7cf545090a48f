//! Archive extraction

use std::path::{Component, Path};

use flate2::read::GzDecoder;
use pkgverify_config::ExtractorKind;
use pkgverify_errors::{Error, VerifyError};
use tar::Archive;
use tokio::process::Command;

/// Unpack a gzip-compressed tar archive into `dest`
///
/// # Errors
///
/// Returns `VerifyError::ExtractionFailed` if the archive is corrupt, contains
/// entries escaping `dest`, or the system `tar` is missing or exits non-zero.
pub async fn extract_archive(kind: ExtractorKind, archive: &Path, dest: &Path) -> Result<(), Error> {
    match kind {
        ExtractorKind::Builtin => extract_builtin(archive, dest).await,
        ExtractorKind::System => extract_system(archive, dest).await,
    }
}

async fn extract_builtin(archive: &Path, dest: &Path) -> Result<(), Error> {
    let archive_path = archive.to_path_buf();
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let file = std::fs::File::open(&archive_path)
            .map_err(|e| failed(&archive_path, &e.to_string()))?;
        let mut tar = Archive::new(GzDecoder::new(file));
        tar.set_preserve_permissions(true);
        tar.set_unpack_xattrs(false);

        let entries = tar
            .entries()
            .map_err(|e| failed(&archive_path, &e.to_string()))?;
        for entry in entries {
            let mut entry = entry.map_err(|e| failed(&archive_path, &e.to_string()))?;
            let path = entry
                .path()
                .map_err(|e| failed(&archive_path, &e.to_string()))?
                .into_owned();

            if path
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
            {
                return Err(failed(
                    &archive_path,
                    &format!("entry escapes destination: {}", path.display()),
                ));
            }

            entry
                .unpack_in(&dest)
                .map_err(|e| failed(&archive_path, &format!("{}: {e}", path.display())))?;
        }

        Ok::<(), Error>(())
    })
    .await
    .map_err(|e| Error::internal(format!("extraction task failed: {e}")))?
}

async fn extract_system(archive: &Path, dest: &Path) -> Result<(), Error> {
    let output = Command::new("tar")
        .arg("-xzf")
        .arg(archive)
        .arg("-C")
        .arg(dest)
        .stdin(std::process::Stdio::null())
        .output()
        .await
        .map_err(|e| failed(archive, &format!("failed to run tar: {e}")))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let message = if stderr.is_empty() {
        format!("tar exited with {}", output.status)
    } else {
        format!("tar exited with {}: {stderr}", output.status)
    };
    Err(failed(archive, &message))
}

fn failed(archive: &Path, message: &str) -> Error {
    VerifyError::ExtractionFailed {
        archive: archive.display().to_string(),
        message: message.to_string(),
    }
    .into()
}
