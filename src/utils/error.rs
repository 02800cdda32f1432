use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpResourceError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Response status {status}, {reason}")]
    Status { status: u16, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
}

impl HttpResourceError {
    /// 由 HTTP 狀態碼建立錯誤
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// 非成功狀態碼時回傳 `Some(status)`
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HttpResourceError>;
