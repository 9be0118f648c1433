use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every repository was processed
    Success = 0,
    /// Application error (API error, exhausted scan polling, evaluation failure, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid or missing command-line arguments
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that reached `main`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<AuditError>() {
            Some(AuditError::MissingConfiguration { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Fatal conditions of an audit run.
///
/// Every variant aborts the whole batch; `main` prints the message (and any
/// queued diagnostics) and exits with [`ExitCode::for_error`].
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Missing required argument: {description}\n\n💡 Hint: Supply it via command line (--{flag}) or environment variable ({env_var})")]
    MissingConfiguration {
        description: String,
        flag: String,
        env_var: String,
    },

    #[error("Invalid {package_manager} package name: '{package_name}'\nReason: {reason}")]
    InvalidPackageName {
        package_manager: String,
        package_name: String,
        reason: String,
    },

    #[error("Scan result at '{status_url}' could not be read after {attempts} attempts")]
    ScanRetriesExhausted {
        status_url: String,
        attempts: usize,
        /// Raw body of every failed attempt, oldest first
        responses: Vec<String>,
    },

    #[error("Repository search on the source host failed {} times", errors.len())]
    SourceHostQueryFailed { errors: Vec<String> },

    #[error("Unexpected response from {endpoint}:\n{body}")]
    UnexpectedResponse { endpoint: String, body: String },

    #[error("Policy evaluation of '{application}' (stage {stage}) failed\n{stderr}")]
    EvaluationFailed {
        application: String,
        stage: String,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl AuditError {
    /// Diagnostic messages queued while the error was building up, in order.
    ///
    /// `main` prints these after the error itself.
    pub fn queued_messages(&self) -> &[String] {
        match self {
            AuditError::ScanRetriesExhausted { responses, .. } => responses,
            AuditError::SourceHostQueryFailed { errors } => errors,
            _ => &[],
        }
    }
}
