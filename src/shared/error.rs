use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - audit ran and reported no vulnerable packages
    Success = 0,
    /// At least one package with a known vulnerability was reported
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (I/O error, cancellation, etc.)
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
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the restore core.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// These are carried inside `anyhow::Error`; callers that need to tell
/// them apart use `downcast_ref::<RestoreError>()`.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The caller's cancellation token fired while the audit was running
    #[error("The operation was cancelled")]
    Cancelled,

    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Invalid version range '{value}': {reason}")]
    InvalidVersionRange { value: String, reason: String },

    #[error("Invalid include flag '{value}'. Expected values are: all, none, runtime, compile, build, native, contentfiles, analyzers, buildtransitive")]
    InvalidIncludeFlags { value: String },

    #[error("Failed to parse target graph file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a valid \"graphs\" document")]
    GraphFileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl RestoreError {
    /// Returns true when `error` wraps [`RestoreError::Cancelled`]
    pub fn is_cancellation(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<RestoreError>(),
            Some(RestoreError::Cancelled)
        )
    }
}
