//! Structured logging integration for events
//!
//! Every event rendered by the CLI is also recorded through `tracing`, at the
//! level the event itself reports, so debug log files carry the full run.

use pkgverify_events::{AppEvent, GeneralEvent, VerifyEvent};
use tracing::Level;

/// Emit a tracing record at a level chosen at runtime
macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            Level::ERROR => tracing::error!($($arg)+),
            Level::WARN => tracing::warn!($($arg)+),
            Level::INFO => tracing::info!($($arg)+),
            Level::DEBUG => tracing::debug!($($arg)+),
            _ => tracing::trace!($($arg)+),
        }
    };
}

/// Log an `AppEvent` using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(event: &AppEvent) {
    let level = event.log_level();
    let source = event.event_source();

    match event {
        AppEvent::General(general) => match general {
            GeneralEvent::Warning { message, context } => {
                log_at!(level, source = source.as_str(), context = ?context, "{message}");
            }
            GeneralEvent::Error { message, details } => {
                log_at!(level, source = source.as_str(), details = ?details, "{message}");
            }
            GeneralEvent::DebugLog { message } => {
                log_at!(level, source = source.as_str(), "{message}");
            }
        },

        AppEvent::Verify(verify) => match verify {
            VerifyEvent::Started { root } => {
                log_at!(level, source = source.as_str(), root = %root.display(), "Verification started");
            }
            VerifyEvent::ArchiveFound { path, size_bytes } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    archive = %path.display(),
                    size_bytes = size_bytes,
                    "Archive found"
                );
            }
            VerifyEvent::ScratchPrepared {
                path,
                removed_stale,
            } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    path = %path.display(),
                    removed_stale = removed_stale,
                    "Scratch directory prepared"
                );
            }
            VerifyEvent::ExtractionStarted {
                archive,
                destination,
                extractor,
            } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    archive = %archive.display(),
                    destination = %destination.display(),
                    extractor = %extractor,
                    "Extraction started"
                );
            }
            VerifyEvent::ExtractionCompleted { destination } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    destination = %destination.display(),
                    "Extraction completed"
                );
            }
            VerifyEvent::EssentialCheckStarted { package_dir, total } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    package_dir = %package_dir.display(),
                    total = total,
                    "Essential file check started"
                );
            }
            VerifyEvent::EssentialFileChecked { path, found } => {
                log_at!(level, source = source.as_str(), path = %path, found = found, "Essential file checked");
            }
            VerifyEvent::ManifestRead { name, version, main } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    name = ?name,
                    version = ?version,
                    main = ?main,
                    "Manifest read"
                );
            }
            VerifyEvent::TestsStarted { command, cwd } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    command = %command,
                    cwd = %cwd.display(),
                    "Embedded tests started"
                );
            }
            VerifyEvent::TestsPassed {
                command,
                duration_ms,
            } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    command = %command,
                    duration_ms = duration_ms,
                    "Embedded tests passed"
                );
            }
            VerifyEvent::ScratchRemoved { path } => {
                log_at!(level, source = source.as_str(), path = %path.display(), "Scratch directory removed");
            }
            VerifyEvent::Completed {
                archive,
                duration_ms,
            } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    archive = %archive.display(),
                    duration_ms = duration_ms,
                    "Verification completed"
                );
            }
            VerifyEvent::Failed { failure } => {
                log_at!(
                    level,
                    source = source.as_str(),
                    code = ?failure.code,
                    message = %failure.message,
                    hint = ?failure.hint,
                    retryable = failure.retryable,
                    "Verification failed"
                );
            }
        },
    }
}
