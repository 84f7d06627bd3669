use thiserror::Error;

/// Result type for dvhstat operations
pub type Result<T> = std::result::Result<T, DvhError>;

/// Error types for dvhstat operations
///
/// Individual malformed report lines never produce an error; only failures
/// that make the whole payload unusable surface here.
#[derive(Error, Debug)]
pub enum DvhError {
    /// Input bytes are not valid UTF-8 text
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Helper conversions
impl From<std::str::Utf8Error> for DvhError {
    fn from(e: std::str::Utf8Error) -> Self {
        DvhError::Decode(format!("{}", e))
    }
}

impl From<std::string::FromUtf8Error> for DvhError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        DvhError::Decode(format!("{}", e.utf8_error()))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for DvhError {
    fn from(e: serde_json::Error) -> Self {
        DvhError::Serialization(format!("{}", e))
    }
}
