//! Error types for the model registry.

/// Error looking up a model handle.
#[derive(Debug, thiserror::Error)]
pub enum CreateModelError {
    /// The specified model id was not found in the registry.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}
