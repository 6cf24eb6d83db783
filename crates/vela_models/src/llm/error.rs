//! Error types for model execution.

/// Errors for model execution operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Http error (e.g.: connection error, timeout, etc.)
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication failed or no credential was available.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Error parsing the response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Error returned by the model provider.
    #[error("provider error: {message}")]
    Provider {
        /// HTTP status code if available.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// The underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}
