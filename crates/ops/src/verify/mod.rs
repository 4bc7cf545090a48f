//! Package verification
//!
//! A run walks a fixed sequence: discover the archive, report its size,
//! prepare the scratch directory, extract, check required files, read the
//! manifest, run the embedded tests, and remove the scratch directory. Every
//! step is awaited before the next one starts and the first failure ends the
//! run. The scratch directory is removed on every path once it exists.

mod discovery;
mod essentials;
mod extract;
mod manifest;
mod runner;
mod scratch;

pub use discovery::find_archives;
pub use essentials::check_essentials;
pub use extract::extract_archive;
pub use manifest::read_manifest;
pub use runner::{run_embedded_tests, TestOutput};
pub use scratch::ScratchDir;

use std::path::{Path, PathBuf};
use std::time::Instant;

use pkgverify_config::{ExtractorKind, VerifyConfig};
use pkgverify_errors::{Error, UserFacingError, VerifyError};
use pkgverify_events::{EventEmitter, FailureContext, VerifyEvent};
use pkgverify_types::{FileCheck, ManifestSummary, VerificationReport};

use crate::OpsCtx;

/// Verify the packaged archive found in `root`
///
/// Emits `Started`, one event per step, and finally `Completed` or `Failed`.
///
/// # Errors
///
/// Returns the error of the first step that failed. A scratch directory that
/// cannot be removed after an otherwise successful run is also an error.
pub async fn verify(ctx: &OpsCtx, root: &Path) -> Result<VerificationReport, Error> {
    let start = Instant::now();

    ctx.emit_verify(VerifyEvent::Started {
        root: root.to_path_buf(),
    });

    match run(ctx, root, start).await {
        Ok(report) => {
            ctx.emit_verify(VerifyEvent::Completed {
                archive: report.archive.clone(),
                duration_ms: report.duration_ms,
            });
            Ok(report)
        }
        Err(e) => {
            ctx.emit_verify(VerifyEvent::Failed {
                failure: FailureContext::from_error(&e),
            });
            Err(e)
        }
    }
}

async fn run(ctx: &OpsCtx, root: &Path, start: Instant) -> Result<VerificationReport, Error> {
    let config = &ctx.config.verify;

    let archive = select_archive(ctx, root, &config.archive_suffix).await?;

    let size_bytes = tokio::fs::metadata(&archive)
        .await
        .map_err(|e| Error::io_with_path(&e, &archive))?
        .len();
    ctx.emit_verify(VerifyEvent::ArchiveFound {
        path: archive.clone(),
        size_bytes,
    });

    let scratch = ScratchDir::prepare(root.join(&config.scratch_dir)).await?;
    ctx.emit_verify(VerifyEvent::ScratchPrepared {
        path: scratch.path().to_path_buf(),
        removed_stale: scratch.removed_stale(),
    });

    let outcome = inspect(ctx, config, &archive, scratch.path()).await;

    let released = scratch.release().await;
    match (&released, &outcome) {
        (Ok(path), _) => ctx.emit_verify(VerifyEvent::ScratchRemoved { path: path.clone() }),
        // step error wins, cleanup failure is reported alongside
        (Err(e), Err(_)) => ctx.emit_error(e.user_message()),
        (Err(_), Ok(_)) => {}
    }

    let (files, manifest) = outcome?;
    released?;

    Ok(VerificationReport {
        archive,
        size_bytes,
        files,
        manifest,
        test_command: config.test_command_line(),
        duration_ms: elapsed_ms(start),
    })
}

async fn select_archive(ctx: &OpsCtx, root: &Path, suffix: &str) -> Result<PathBuf, Error> {
    let mut archives = find_archives(root, suffix).await?.into_iter();

    let Some(archive) = archives.next() else {
        return Err(VerifyError::NoArchiveFound {
            dir: root.display().to_string(),
            suffix: suffix.to_string(),
        }
        .into());
    };

    let ignored: Vec<PathBuf> = archives.collect();
    if !ignored.is_empty() {
        ctx.emit_warning_with_context(
            format!("multiple archives found, using {}", archive.display()),
            format!("{} other archive(s) ignored", ignored.len()),
        );
    }
    for path in &ignored {
        ctx.emit_debug(format!("skipping archive {}", path.display()));
    }

    Ok(archive)
}

/// Steps that run inside the scratch directory
async fn inspect(
    ctx: &OpsCtx,
    config: &VerifyConfig,
    archive: &Path,
    scratch: &Path,
) -> Result<(Vec<FileCheck>, ManifestSummary), Error> {
    ctx.emit_verify(VerifyEvent::ExtractionStarted {
        archive: archive.to_path_buf(),
        destination: scratch.to_path_buf(),
        extractor: extractor_name(config.extractor).to_string(),
    });
    extract_archive(config.extractor, archive, scratch).await?;
    ctx.emit_verify(VerifyEvent::ExtractionCompleted {
        destination: scratch.to_path_buf(),
    });

    let package_dir = scratch.join(&config.package_dir);
    let files = check_essentials(ctx, &package_dir, &config.required_files).await?;

    let manifest = read_manifest(&package_dir.join(&config.manifest_file)).await?;
    let summary = ManifestSummary::from(&manifest);
    ctx.emit_verify(VerifyEvent::ManifestRead {
        name: summary.name.clone(),
        version: summary.version.clone(),
        main: summary.main.clone(),
    });
    if manifest.test_script().is_none() {
        ctx.emit_warning("manifest declares no `test` script");
    }

    let command = config.test_command_line();
    ctx.emit_verify(VerifyEvent::TestsStarted {
        command: command.clone(),
        cwd: package_dir.clone(),
    });
    let tests_start = Instant::now();
    run_embedded_tests(&config.test_command, &package_dir, ctx.test_output).await?;
    ctx.emit_verify(VerifyEvent::TestsPassed {
        command,
        duration_ms: elapsed_ms(tests_start),
    });

    Ok((files, summary))
}

fn extractor_name(kind: ExtractorKind) -> &'static str {
    match kind {
        ExtractorKind::Builtin => "builtin",
        ExtractorKind::System => "system",
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
