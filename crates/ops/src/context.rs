//! Operations context for dependency injection

use pkgverify_config::Config;
use pkgverify_errors::{Error, OpsError};
use pkgverify_events::{EventEmitter, EventSender};

use crate::verify::TestOutput;

/// Operations context providing access to configuration and event reporting
pub struct OpsCtx {
    /// Event sender for progress reporting
    pub tx: EventSender,
    /// Effective configuration
    pub config: Config,
    /// Where the embedded test command's stdout goes
    pub test_output: TestOutput,
}

impl EventEmitter for OpsCtx {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(&self.tx)
    }
}

/// Builder for operations context
#[derive(Default)]
pub struct OpsContextBuilder {
    tx: Option<EventSender>,
    config: Option<Config>,
    test_output: TestOutput,
}

impl OpsContextBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Set configuration
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the stdout target for the embedded test command
    #[must_use]
    pub fn with_test_output(mut self, test_output: TestOutput) -> Self {
        self.test_output = test_output;
        self
    }

    /// Build the context
    ///
    /// # Errors
    ///
    /// Returns an error if a required component is missing or the
    /// configuration does not validate.
    pub fn build(self) -> Result<OpsCtx, Error> {
        let tx = self.tx.ok_or_else(|| OpsError::MissingComponent {
            component: "event_sender".to_string(),
        })?;

        let config = self.config.ok_or_else(|| OpsError::MissingComponent {
            component: "config".to_string(),
        })?;
        config.validate()?;

        Ok(OpsCtx {
            tx,
            config,
            test_output: self.test_output,
        })
    }
}
