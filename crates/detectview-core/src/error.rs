//! Error types for detectview

use thiserror::Error;

/// Message shown when the server rejects an upload without saying why.
pub const DEFAULT_FAILURE: &str = "Upload failed";

/// Main error type for upload operations
#[derive(Error, Debug)]
pub enum DetectError {
    /// Request never completed (connection refused, reset, timeout)
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    ///
    /// Displays as the bare message so the status line reads
    /// `Error: <message>`.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Success status, but the body is not a detection result
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Server base or returned result URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading the selected file from disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A dropped file handle yielded no bytes
    #[error("Could not read file: {0}")]
    UnreadableFile(String),

    /// The native file dialog failed before returning a selection
    #[error("File picker error: {0}")]
    FilePicker(String),
}

impl DetectError {
    /// Build a server error from an optional `error` field.
    pub fn server(status: u16, message: Option<String>) -> Self {
        DetectError::Server {
            status,
            message: message.unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        }
    }
}

impl From<serde_json::Error> for DetectError {
    fn from(e: serde_json::Error) -> Self {
        DetectError::MalformedResponse(e.to_string())
    }
}

impl From<url::ParseError> for DetectError {
    fn from(e: url::ParseError) -> Self {
        DetectError::InvalidUrl(e.to_string())
    }
}

/// Result type alias using DetectError
pub type DetectResult<T> = Result<T, DetectError>;
