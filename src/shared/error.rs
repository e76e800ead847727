use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated
    Success = 0,
    /// The API could not be reached, or the run failed on a bad response
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors, no username)
    InvalidArguments = 2,
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
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for currency report generation.
#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("Couldn't connect to the API at {url}\nDetails: {details}\n\n💡 Hint: Check the connection and the server name")]
    ApiConnection { url: String, details: String },

    #[error("Invalid request URL: {url}\nDetails: {details}\n\n💡 Hint: The search string is appended verbatim, e.g. '?search=lifecycle_environment=Test'")]
    InvalidUrl { url: String, details: String },

    #[error("Unexpected response from {url}\nDetails: {details}")]
    MalformedResponse { url: String, details: String },

    #[error("Host '{host}' is missing required field '{field}'\n\n💡 Hint: The host may be only partially registered (subscription-manager / content host)")]
    MissingField { host: String, field: String },

    #[error("No content view version found for content view {content_view_id} in lifecycle environment {environment_id}")]
    NoContentViewVersion {
        content_view_id: u64,
        environment_id: u64,
    },

    #[error("No username given\n\n💡 Hint: Pass --username or set 'username' in the config file")]
    MissingUsername,

    /// Validation error for user supplied settings
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CurrencyError {
    /// Whether this error means the API was never reached
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, CurrencyError::ApiConnection { .. })
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CurrencyError::MissingUsername => ExitCode::InvalidArguments,
            _ => ExitCode::Failure,
        }
    }
}
