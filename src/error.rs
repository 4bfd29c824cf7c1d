//! Error handling for the LinkedIn strategist

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("Document read error: {0}")]
    DocumentRead(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl StrategistError {
    /// True for errors the caller fixes by changing what they send
    /// (re-upload, convert the file, pick a valid mode).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StrategistError::InputUnavailable(_)
                | StrategistError::UnsupportedFormat(_)
                | StrategistError::InvalidMode(_)
                | StrategistError::InvalidInput(_)
                | StrategistError::DocumentRead(_)
                | StrategistError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StrategistError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for StrategistError {
    fn from(err: anyhow::Error) -> Self {
        StrategistError::Processing(err.to_string())
    }
}
