use thiserror::Error;

/// Shown when a submission fails without a usable server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Used for non-2xx responses whose body carries no `error` text.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to submit";

/// Outcome of a failed lead submission. Both kinds end in the form's
/// error state; neither is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Submission rejected: {message}")]
    Rejected { message: String },

    #[error("Dashboard unreachable: {message}")]
    Unreachable { message: String },
}

impl SubmissionError {
    pub fn rejected(server_message: Option<&str>) -> Self {
        let message = server_message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(REJECTED_FALLBACK_MESSAGE);
        Self::Rejected {
            message: message.to_string(),
        }
    }

    pub fn unreachable() -> Self {
        Self::Unreachable {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Text displayed in the form's error box.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message } | Self::Unreachable { message } => message,
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl SiteError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::Submission(e) => e.message().to_string(),
            SiteError::ValidationError { field, message } => {
                format!("Please check the {} field: {}", field, message)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SiteError::IoError(e) => format!("Could not read file: {}", e),
            SiteError::TomlError(_) | SiteError::SerializationError(_) => {
                "The content file could not be parsed".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::Submission(SubmissionError::Rejected { .. }) => {
                "Review the entered details and submit again"
            }
            SiteError::Submission(SubmissionError::Unreachable { .. }) | SiteError::ApiError(_) => {
                "Check the network connection and the dashboard URL, then submit again"
            }
            SiteError::ValidationError { .. } => "Correct the highlighted field and retry",
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and environment variables"
            }
            SiteError::IoError(_) | SiteError::TomlError(_) | SiteError::SerializationError(_) => {
                "Check the content file path and syntax"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SiteError::Submission(SubmissionError::Rejected { .. }) => 2,
            SiteError::Submission(SubmissionError::Unreachable { .. }) | SiteError::ApiError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
