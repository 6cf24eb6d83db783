//! The [`Model`] trait implemented by provider adapters.

use super::error::GenerationError;
use super::types::{Conversation, Prompt};
use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;

/// A lazy sequence of generated text fragments.
///
/// Non-streaming executions produce exactly one fragment; streaming
/// executions produce fragments in arrival order. Dropping the stream before
/// exhaustion abandons the underlying connection.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, GenerationError>> + Send>>;

/// Trait implemented by provider adapters for text generation.
///
/// Each adapter translates one host-side invocation into one provider call.
/// Calls are independent: an adapter holds no mutable state between
/// invocations, so concurrent calls are safe without coordination.
#[async_trait]
pub trait Model: Send + Sync + 'static {
    /// The host-visible model identifier this adapter was registered under.
    fn model_id(&self) -> &str;

    /// Executes the prompt against the remote model.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The current prompt and any pass-through generation options
    /// * `stream` - Whether to stream fragments incrementally
    /// * `conversation` - Prior exchanges to include, in chronological order
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the request cannot be issued or the
    /// provider responds with a non-success status. Each call performs a new
    /// network operation; the returned stream is not restartable.
    async fn execute(
        &self,
        prompt: &Prompt,
        stream: bool,
        conversation: Option<&Conversation>,
    ) -> Result<FragmentStream, GenerationError>;
}
