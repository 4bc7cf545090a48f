//! CLI error handling

use std::fmt;

use pkgverify_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(pkgverify_errors::ConfigError),
    /// Operations error
    Ops(pkgverify_errors::Error),
    /// Invalid command arguments
    InvalidArguments(String),
    /// I/O error
    Io(std::io::Error),
}

impl CliError {
    /// Stable error code, if the underlying error has one
    pub fn code(&self) -> Option<&'static str> {
        match self {
            CliError::Config(e) => e.user_code(),
            CliError::Ops(e) => e.user_code(),
            CliError::InvalidArguments(_) => Some("cli.invalid_arguments"),
            CliError::Io(_) => Some("cli.io"),
        }
    }

    /// Machine-readable form used in JSON mode
    pub fn to_json(&self) -> serde_json::Value {
        let (message, hint) = match self {
            CliError::Config(e) => (e.user_message().into_owned(), e.user_hint()),
            CliError::Ops(e) => (e.user_message().into_owned(), e.user_hint()),
            other => (other.to_string(), None),
        };
        serde_json::json!({
            "error": {
                "code": self.code(),
                "message": message,
                "hint": hint,
            }
        })
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {e}"),
            CliError::Ops(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                if e.is_retryable() {
                    write!(f, "\n  Retry: safe to retry this operation.")?;
                }
                Ok(())
            }
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Ops(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<pkgverify_errors::ConfigError> for CliError {
    fn from(e: pkgverify_errors::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<pkgverify_errors::Error> for CliError {
    fn from(e: pkgverify_errors::Error) -> Self {
        CliError::Ops(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
