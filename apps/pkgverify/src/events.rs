//! Event handling and progress display

use console::{Style, Term};
use pkgverify_events::{AppEvent, FailureContext, GeneralEvent, VerifyEvent};
use pkgverify_types::format_kb;

/// Event handler for progress display and user feedback
///
/// Progress goes to stderr so stdout only ever carries the final result.
pub struct EventHandler {
    term: Term,
    colors_enabled: bool,
    debug_enabled: bool,
    /// JSON mode renders nothing here
    quiet: bool,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(colors_enabled: bool, debug_enabled: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            colors_enabled,
            debug_enabled,
            quiet,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        crate::logging::log_event_with_tracing(&event);

        if self.quiet {
            return;
        }

        match event {
            AppEvent::General(general) => self.handle_general_event(general),
            AppEvent::Verify(verify) => self.handle_verify_event(verify),
        }
    }

    fn handle_general_event(&self, event: GeneralEvent) {
        match event {
            GeneralEvent::Warning { message, context } => {
                let line = match context {
                    Some(context) => format!("⚠️  {message} ({context})"),
                    None => format!("⚠️  {message}"),
                };
                self.show(&self.paint(&line, &Style::new().yellow()));
            }
            GeneralEvent::Error { message, details } => {
                self.show(&self.paint(&format!("❌ {message}"), &Style::new().red()));
                if let Some(details) = details {
                    self.show(&format!("   {details}"));
                }
            }
            GeneralEvent::DebugLog { message } => {
                if self.debug_enabled {
                    self.show(&self.paint(&format!("[debug] {message}"), &Style::new().dim()));
                }
            }
        }
    }

    fn handle_verify_event(&self, event: VerifyEvent) {
        match event {
            VerifyEvent::Started { root } => {
                self.show(&format!("🔍 Verifying package in {}", root.display()));
            }
            VerifyEvent::ArchiveFound { path, size_bytes } => {
                let name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                self.show(&format!("📦 Found package: {}", self.bold(&name)));
                self.show(&format!("📏 Size: {} KB", format_kb(size_bytes)));
            }
            VerifyEvent::ScratchPrepared { path, removed_stale } => {
                if removed_stale {
                    self.show(&format!(
                        "🧹 Removed stale scratch directory {}",
                        path.display()
                    ));
                }
            }
            VerifyEvent::ExtractionStarted { .. } => {
                self.show("📂 Extracting package...");
            }
            VerifyEvent::ExtractionCompleted { destination } => {
                if self.debug_enabled {
                    self.show(&format!("   extracted into {}", destination.display()));
                }
            }
            VerifyEvent::EssentialCheckStarted { .. } => {
                self.show("🔍 Checking essential files...");
            }
            VerifyEvent::EssentialFileChecked { path, found } => {
                if found {
                    self.show(&format!("  ✅ {path}"));
                } else {
                    self.show(&self.paint(&format!("  ❌ {path} missing"), &Style::new().red()));
                }
            }
            VerifyEvent::ManifestRead { name, version, main } => {
                self.show("📋 Package info:");
                self.show(&format!("  Name: {}", name.as_deref().unwrap_or("-")));
                self.show(&format!("  Version: {}", version.as_deref().unwrap_or("-")));
                self.show(&format!("  Main: {}", main.as_deref().unwrap_or("-")));
            }
            VerifyEvent::TestsStarted { command, .. } => {
                self.show(&format!("🧪 Running tests in package: {command}"));
            }
            VerifyEvent::TestsPassed { duration_ms, .. } => {
                self.show(&format!("  ✅ Tests passed ({duration_ms}ms)"));
            }
            VerifyEvent::ScratchRemoved { path } => {
                if self.debug_enabled {
                    self.show(&format!("🧹 Removed {}", path.display()));
                }
            }
            VerifyEvent::Completed { .. } => {
                self.show(&self.paint("✅ Package verification successful!", &Style::new().green().bold()));
            }
            VerifyEvent::Failed { failure } => self.show_failure(&failure),
        }
    }

    fn show_failure(&self, failure: &FailureContext) {
        self.show(&self.paint(
            &format!("❌ Package verification failed: {}", failure.message),
            &Style::new().red().bold(),
        ));
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, &Style::new().bold())
    }

    fn paint(&self, text: &str, style: &Style) -> String {
        if self.colors_enabled {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn show(&self, message: &str) {
        // Ignore write errors
        let _ = self.term.write_line(message);
    }
}
