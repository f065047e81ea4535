use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    StatusError { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FetchError {
    /// The exchange with the host failed: unreachable, reset, or a non-2xx answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::ApiError(_) | FetchError::StatusError { .. })
    }

    /// The body arrived but was not the JSON the caller asked for.
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::SerializationError(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(
            self,
            FetchError::ConfigValidationError { .. } | FetchError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
