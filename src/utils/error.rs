use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnsubscribeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Input,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl UnsubscribeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UnsubscribeError::ApiError(_) => ErrorCategory::Network,
            UnsubscribeError::IoError(_) | UnsubscribeError::InputError { .. } => {
                ErrorCategory::Input
            }
            UnsubscribeError::SerializationError(_) => ErrorCategory::Internal,
            UnsubscribeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UnsubscribeError::ApiError(e) if e.is_timeout() => {
                "The list service did not answer in time".to_string()
            }
            UnsubscribeError::ApiError(e) if e.is_decode() => {
                "The list service returned a response that is not JSON".to_string()
            }
            UnsubscribeError::ApiError(e) => format!("Could not reach the list service: {}", e),
            UnsubscribeError::IoError(e) => format!("Could not read the address list: {}", e),
            UnsubscribeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UnsubscribeError::ApiError(_) => {
                "Check network connectivity and the --endpoint URL, then re-run; addresses already removed will report an error from the service"
            }
            UnsubscribeError::IoError(_) => "Make sure the address list exists and is readable",
            UnsubscribeError::InputError { .. } => {
                "Save the address list as UTF-8 text with one address per line"
            }
            UnsubscribeError::SerializationError(_) => "Re-run without --json",
            UnsubscribeError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UnsubscribeError>;
