use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HamPrefixError {
    #[error("Lookup failed with HTTP status: {status}")]
    HttpStatus { status: StatusCode },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Response body is not a JSON object (got {kind})")]
    UnexpectedBodyShape { kind: &'static str },

    #[error("Blocking lookup called from within an async runtime")]
    NestedRuntime,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Http,
    Transport,
    Response,
    Configuration,
}

impl HamPrefixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HamPrefixError::HttpStatus { .. } => ErrorCategory::Http,
            HamPrefixError::ApiError(_) => ErrorCategory::Transport,
            HamPrefixError::SerializationError(_) | HamPrefixError::UnexpectedBodyShape { .. } => {
                ErrorCategory::Response
            }
            HamPrefixError::NestedRuntime
            | HamPrefixError::IoError(_)
            | HamPrefixError::ConfigValidationError { .. }
            | HamPrefixError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Http => 2,
            ErrorCategory::Transport => 3,
            ErrorCategory::Response => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HamPrefixError::HttpStatus { status } if *status == StatusCode::NOT_FOUND => {
                "The prefix service has no entry for this prefix".to_string()
            }
            HamPrefixError::HttpStatus { status } => {
                format!("The prefix service answered with status {}", status)
            }
            HamPrefixError::ApiError(e) if e.is_timeout() => {
                "The prefix service did not answer in time".to_string()
            }
            HamPrefixError::ApiError(e) if e.is_connect() => {
                "Could not connect to the prefix service".to_string()
            }
            HamPrefixError::ApiError(_) => "The request to the prefix service failed".to_string(),
            HamPrefixError::SerializationError(_) | HamPrefixError::UnexpectedBodyShape { .. } => {
                "The prefix service returned a response that could not be understood".to_string()
            }
            HamPrefixError::NestedRuntime => {
                "A blocking lookup cannot run inside an async runtime".to_string()
            }
            HamPrefixError::IoError(e) => format!("Could not read the configuration: {}", e),
            HamPrefixError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            HamPrefixError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Http => "Check the call sign or prefix and the API key, then try again",
            ErrorCategory::Transport => "Check your network connection and the --base-url value",
            ErrorCategory::Response => "Verify that --base-url points at the HamNut prefixes endpoint",
            ErrorCategory::Configuration => "Fix the command line flags or the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, HamPrefixError>;
