//! Request-side data types shared by all providers.

use serde_json::{Map, Value};

/// A prompt to execute against a model.
///
/// Generation options (temperature, max tokens, etc.) are opaque to this
/// crate: providers merge them into their request payloads as-is.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    /// The prompt text.
    pub text: String,
    /// Provider-specific generation options, merged into the request body.
    pub options: Map<String, Value>,
}

impl Prompt {
    /// Creates a prompt with no extra generation options.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Map::new(),
        }
    }

    /// Adds a generation option to pass through to the provider.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// One completed prompt/response pair in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// The prompt text as it was submitted.
    pub prompt: String,
    /// The full response text.
    pub response: String,
}

/// An ordered sequence of prior exchanges, owned by the host.
///
/// Read-only from a provider's perspective: providers walk the exchanges in
/// chronological order when building request payloads.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    exchanges: Vec<Exchange>,
}

impl Conversation {
    /// Creates an empty conversation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed exchange.
    pub fn push(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.exchanges.push(Exchange {
            prompt: prompt.into(),
            response: response.into(),
        });
    }

    /// Returns the exchanges in chronological order.
    #[must_use]
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Returns the number of exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Checks whether the conversation has no exchanges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
