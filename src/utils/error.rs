use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("Request rejected ({status}): {reason}")]
    RequestRejected { status: u16, reason: String },

    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl BackendError {
    pub fn rejected(status: u16, reason: impl Into<String>) -> Self {
        Self::RequestRejected {
            status,
            reason: reason.into(),
        }
    }

    /// HTTP status used when the error reaches a client.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::RequestRejected { status, .. } => *status,
            _ => 500,
        }
    }

    /// Short reason placed in the `error` field of the JSON error body.
    pub fn public_reason(&self) -> String {
        match self {
            Self::Unauthorized => "unauthorized".to_string(),
            Self::NotFound => "not found".to_string(),
            Self::RequestRejected { reason, .. } => reason.clone(),
            _ => "internal error".to_string(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::ConfigValidationError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Unauthorized => "The backend rejected the bearer token".to_string(),
            Self::ApiError(e) if e.is_connect() => "Could not reach the backend".to_string(),
            Self::UnexpectedStatus { status, .. } => {
                format!("The backend answered with HTTP {}", status)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Setting '{}' is required", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Check that API_TOKEN matches the token configured on the server",
            Self::ApiError(_) => "Check the base URL and that the backend is running",
            Self::UnexpectedStatus { .. } => "Inspect the backend logs for the failing request",
            Self::IoError(_) => "Check file paths and that the port is not already in use",
            Self::MissingConfigError { .. } => {
                "Export the referenced environment variable or remove the placeholder"
            }
            e if e.is_config_error() => "Fix the configuration file, flags or environment and restart",
            _ => "Retry the request; if it keeps failing, inspect the backend logs",
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
