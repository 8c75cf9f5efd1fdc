use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API response error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Response decoding failed: {0}")]
    DecodeError(String),

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid price data: {message}")]
    InvalidPriceData { message: String },

    #[error("Upstream returned no usable data: {message}")]
    UpstreamError { message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Coarse failure class, used to pick the log level for a failed side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Parse,
    Upstream,
    Config,
}

impl RateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RateError::HttpError(_) | RateError::ApiError { .. } => ErrorKind::Transport,
            RateError::DecodeError(_) => ErrorKind::Decode,
            RateError::JsonError(_) | RateError::InvalidPriceData { .. } => ErrorKind::Parse,
            RateError::UpstreamError { .. } => ErrorKind::Upstream,
            RateError::ConfigError(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, RateError>;
