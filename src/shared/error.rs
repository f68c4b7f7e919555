use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a usage mistake from a
/// dashboard page that failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested view loaded
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (request failed, bad configuration, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the Orbyte console.
///
/// `RequestFailed` is the only error an API call can produce: non-success
/// status, transport failure and undecodable bodies all collapse into it.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Request failed: {operation}\nDetails: {details}\n\n💡 Hint: Check that the Orbyte API is running and reachable at the configured base URL")]
    RequestFailed { operation: String, details: String },

    #[error("Invalid configuration: {path}\nReason: {reason}\n\n💡 Hint: Fix the value or remove it to fall back to the default")]
    InvalidConfig { path: String, reason: String },

    /// Validation error for request builders and user input
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl DashboardError {
    pub fn request_failed(operation: impl Into<String>, details: impl fmt::Display) -> Self {
        DashboardError::RequestFailed {
            operation: operation.into(),
            details: details.to_string(),
        }
    }
}
