use thiserror::Error;

/// Error type for the acme.sh SDK
///
/// Operation methods on [`AcmeClient`](crate::runtime::client::AcmeClient)
/// convert [`Error::ProcessFailed`] into a failure result rather than
/// returning it, so under normal operation the only errors a caller sees are
/// timeouts and I/O problems outside the subprocess itself.
#[derive(Error, Debug)]
pub enum Error {
    /// The acme.sh process exited with a non-zero status (or could not be
    /// started). Carries the captured stderr lines.
    #[error("acme.sh exited with status {exit_code:?}")]
    ProcessFailed {
        exit_code: Option<i32>,
        stderr: Vec<String>,
    },

    #[error("acme.sh binary not found: {0}")]
    BinaryNotFound(String),

    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Conversion(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Create a process failure from an exit code and captured stderr
    pub fn process_failed(exit_code: Option<i32>, stderr: Vec<String>) -> Self {
        Self::ProcessFailed { exit_code, stderr }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// The captured stderr lines, if this is a process failure
    pub fn stderr_lines(&self) -> Option<&[String]> {
        match self {
            Self::ProcessFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}

/// Convenient result type for the acme.sh SDK
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_failed_carries_stderr() {
        let err = Error::process_failed(Some(2), vec!["bad domain".to_string()]);
        match &err {
            Error::ProcessFailed { exit_code, stderr } => {
                assert_eq!(*exit_code, Some(2));
                assert_eq!(stderr, &vec!["bad domain".to_string()]);
            }
            _ => panic!("Expected ProcessFailed error"),
        }
        assert_eq!(err.stderr_lines().unwrap().len(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::Timeout(60);
        assert_eq!(err.to_string(), "operation timed out after 60 seconds");

        let err = Error::configuration("empty acme.sh path");
        assert_eq!(err.to_string(), "invalid configuration: empty acme.sh path");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.stderr_lines().is_none());
    }
}
