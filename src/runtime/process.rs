//! Subprocess execution for acme.sh
//!
//! The [`CommandRunner`] trait is the seam between the translation engine
//! and the operating system: it takes an executable path plus an ordered
//! argument list and returns the captured stdout lines on a zero exit, or
//! [`Error::ProcessFailed`] carrying the exit code and stderr lines
//! otherwise. Tests substitute a canned implementation; production uses
//! [`TokioRunner`].

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::core::error::{Error, Result};

/// Executes an external command and captures its output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, returning captured stdout lines
    ///
    /// # Errors
    ///
    /// - [`Error::ProcessFailed`] on a non-zero exit (or failure to start),
    ///   with the captured stderr lines
    /// - [`Error::Timeout`] when a configured timeout elapses; the child is
    ///   killed
    async fn run(&self, program: &Path, args: &[String]) -> Result<Vec<String>>;
}

/// Production runner backed by `tokio::process`
///
/// Dropping the future returned by [`run`](CommandRunner::run) kills the
/// subprocess (`kill_on_drop`), which is how cooperative cancellation
/// reaches the child.
#[derive(Debug, Clone, Default)]
pub struct TokioRunner {
    timeout_secs: Option<u64>,
}

impl TokioRunner {
    /// Create a runner with an optional per-invocation timeout
    pub fn new(timeout_secs: Option<u64>) -> Self {
        Self { timeout_secs }
    }
}

#[async_trait]
impl CommandRunner for TokioRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Result<Vec<String>> {
        debug!(program = %program.display(), ?args, "spawning acme.sh");

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Error::process_failed(
                    None,
                    vec![format!("failed to start {}: {}", program.display(), e)],
                )
            })?;

        let output = match self.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), child.wait_with_output())
                .await
                .map_err(|_| Error::Timeout(secs))??,
            None => child.wait_with_output().await?,
        };

        let stdout = String::from_utf8(output.stdout)?;
        if output.status.success() {
            Ok(stdout.lines().map(str::to_string).collect())
        } else {
            let stderr = String::from_utf8(output.stderr)?;
            debug!(status = ?output.status.code(), "acme.sh exited non-zero");
            Err(Error::process_failed(
                output.status.code(),
                stderr.lines().map(str::to_string).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_missing_binary_is_process_failure() {
        let runner = TokioRunner::new(None);
        let program = PathBuf::from("/nonexistent/acme.sh");
        let err = runner.run(&program, &[]).await.unwrap_err();
        match err {
            Error::ProcessFailed { exit_code, stderr } => {
                assert_eq!(exit_code, None);
                assert!(stderr[0].contains("failed to start"));
            }
            other => panic!("Expected ProcessFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_captures_stdout_lines() {
        let runner = TokioRunner::new(Some(10));
        let program = PathBuf::from("/bin/sh");
        let args = vec!["-c".to_string(), "echo one; echo two".to_string()];
        let lines = runner.run(&program, &args).await.unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_nonzero_exit_carries_stderr() {
        let runner = TokioRunner::new(Some(10));
        let program = PathBuf::from("/bin/sh");
        let args = vec!["-c".to_string(), "echo oops >&2; exit 3".to_string()];
        let err = runner.run(&program, &args).await.unwrap_err();
        match err {
            Error::ProcessFailed { exit_code, stderr } => {
                assert_eq!(exit_code, Some(3));
                assert_eq!(stderr, vec!["oops"]);
            }
            other => panic!("Expected ProcessFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    #[cfg(unix)]
    async fn test_timeout_kills_child() {
        let runner = TokioRunner::new(Some(1));
        let program = PathBuf::from("/bin/sh");
        let args = vec!["-c".to_string(), "sleep 30".to_string()];
        let err = runner.run(&program, &args).await.unwrap_err();
        assert!(matches!(err, Error::Timeout(1)));
    }
}
