//! Embedded test execution

use std::path::Path;
use std::process::Stdio;

use pkgverify_errors::{Error, VerifyError};
use serde::{Deserialize, Serialize};
use tokio::process::Command;

/// Where the test command's stdout is sent
///
/// Stderr is always inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TestOutput {
    #[default]
    Inherit,
    /// Keeps stdout free for machine-readable output
    Stderr,
}

/// Run `command` with `cwd` as its working directory and wait for it
///
/// Output is streamed, never captured. Only the exit status is inspected.
///
/// # Errors
///
/// Returns `VerifyError::TestsFailed` if the command is empty, cannot be
/// spawned, or exits unsuccessfully.
pub async fn run_embedded_tests(
    command: &[String],
    cwd: &Path,
    output: TestOutput,
) -> Result<(), Error> {
    let line = command.join(" ");
    let Some((program, args)) = command.split_first() else {
        return Err(tests_failed(&line, "empty test command"));
    };

    let stdout = match output {
        TestOutput::Inherit => Stdio::inherit(),
        TestOutput::Stderr => Stdio::from(std::io::stderr()),
    };

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| tests_failed(&line, &format!("failed to spawn `{program}`: {e}")))?;

    if status.success() {
        return Ok(());
    }

    let message = match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    };
    Err(tests_failed(&line, &message))
}

fn tests_failed(command: &str, message: &str) -> Error {
    VerifyError::TestsFailed {
        command: command.to_string(),
        message: message.to_string(),
    }
    .into()
}
