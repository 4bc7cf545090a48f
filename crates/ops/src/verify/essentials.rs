//! Required-file presence check

use std::path::Path;

use pkgverify_errors::{Error, VerifyError};
use pkgverify_events::{EventEmitter, VerifyEvent};
use pkgverify_types::FileCheck;

/// Check `required` under `package_dir` in order, stopping at the first miss
///
/// One `EssentialFileChecked` event is emitted per file looked up; files after
/// the first missing one are never looked up.
///
/// # Errors
///
/// Returns `VerifyError::MissingEssentialFile` for the first missing path, or
/// an I/O error if a path cannot be looked up at all.
pub async fn check_essentials<E: EventEmitter>(
    emitter: &E,
    package_dir: &Path,
    required: &[String],
) -> Result<Vec<FileCheck>, Error> {
    emitter.emit_verify(VerifyEvent::EssentialCheckStarted {
        package_dir: package_dir.to_path_buf(),
        total: required.len(),
    });

    let mut checks = Vec::with_capacity(required.len());
    for file in required {
        let path = package_dir.join(file);
        let found = tokio::fs::try_exists(&path)
            .await
            .map_err(|e| Error::io_with_path(&e, &path))?;

        emitter.emit_verify(VerifyEvent::EssentialFileChecked {
            path: file.clone(),
            found,
        });

        if !found {
            return Err(VerifyError::MissingEssentialFile { path: file.clone() }.into());
        }
        checks.push(FileCheck {
            path: file.clone(),
            found,
        });
    }

    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgverify_events::AppEvent;

    #[tokio::test]
    async fn lookup_failure_is_not_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), b"{}").unwrap();
        let (tx, mut rx) = pkgverify_events::channel();

        // a path below a regular file cannot be looked up
        let required = vec!["package.json/nested".to_string()];
        let err = check_essentials(&tx, dir.path(), &required)
            .await
            .unwrap_err();

        match err {
            Error::Io { path: Some(path), .. } => {
                assert_eq!(path, dir.path().join("package.json/nested"));
            }
            other => panic!("expected an I/O error, got {other:?}"),
        }
        let checked = std::iter::from_fn(|| rx.try_recv().ok())
            .any(|e| matches!(e, AppEvent::Verify(VerifyEvent::EssentialFileChecked { .. })));
        assert!(!checked);
    }

    #[tokio::test]
    async fn reports_each_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.js"), b"").unwrap();
        std::fs::write(dir.path().join("b.js"), b"").unwrap();
        let (tx, _rx) = pkgverify_events::channel();

        let checks = check_essentials(&tx, dir.path(), &["a.js".to_string(), "b.js".to_string()])
            .await
            .unwrap();
        let paths: Vec<_> = checks.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["a.js", "b.js"]);
    }
}
