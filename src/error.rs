//! Error types for page-clipper.
//!
//! Extraction and block conversion never fail: they degrade to empty or
//! partial output. Errors only surface at the message and payload boundary,
//! where foreign JSON and caller-supplied URLs enter the crate.

/// Error type for request handling and payload assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request body was not valid JSON or had the wrong shape.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// The request named an action this crate does not serve.
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    /// A response or payload could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A configured URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
