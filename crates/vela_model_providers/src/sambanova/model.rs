//! SambaNova [`Model`] adapters.
//!
//! Each catalog identifier is exposed twice: [`SambaNovaChat`] talks to the
//! role-structured `/chat/completions` endpoint, [`SambaNovaCompletion`] to
//! the raw-text `/completions` endpoint. Both translate one host invocation
//! into one HTTP call and relay fragments back in arrival order.

use super::client::SambaNovaClient;
use super::stream::{chat_fragment, completion_fragment, decode_sse};
use super::types::{
    ChatMessage, ChatRequest, ChatResponse, CompletionRequest, CompletionResponse, Role,
};
use async_trait::async_trait;
use futures_util::stream::once;
use vela_models::llm::{Conversation, FragmentStream, GenerationError, Model, Prompt};

/// Completion-mode adapter for one SambaNova model.
pub struct SambaNovaCompletion {
    model_id: String,
    model_name: String,
    client: SambaNovaClient,
}

impl SambaNovaCompletion {
    /// Creates an adapter registered as `model_id`, calling the remote model
    /// `model_name`.
    pub fn new(
        model_id: impl Into<String>,
        model_name: impl Into<String>,
        client: SambaNovaClient,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_name: model_name.into(),
            client,
        }
    }
}

impl core::fmt::Display for SambaNovaCompletion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SambaNova: {}", self.model_id)
    }
}

#[async_trait]
impl Model for SambaNovaCompletion {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn execute(
        &self,
        prompt: &Prompt,
        stream: bool,
        conversation: Option<&Conversation>,
    ) -> Result<FragmentStream, GenerationError> {
        let body = CompletionRequest {
            model: self.model_name.clone(),
            prompt: flatten_history(prompt, conversation),
            stream,
            options: prompt.options.clone(),
        };

        let response = self.client.post("/completions", &body).await?;

        if stream {
            return Ok(decode_sse(response.bytes_stream(), completion_fragment));
        }

        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;
        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        let fragment = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
            .ok_or_else(|| {
                GenerationError::InvalidResponse("response carried no choices[0].text".to_string())
            })?;

        Ok(Box::pin(once(async move { Ok(fragment) })))
    }
}

/// Chat-mode adapter for one SambaNova model.
pub struct SambaNovaChat {
    model_id: String,
    model_name: String,
    client: SambaNovaClient,
}

impl SambaNovaChat {
    /// Creates an adapter registered as `model_id`, calling the remote model
    /// `model_name`.
    pub fn new(
        model_id: impl Into<String>,
        model_name: impl Into<String>,
        client: SambaNovaClient,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_name: model_name.into(),
            client,
        }
    }
}

impl core::fmt::Display for SambaNovaChat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SambaNova: {}", self.model_id)
    }
}

#[async_trait]
impl Model for SambaNovaChat {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn execute(
        &self,
        prompt: &Prompt,
        stream: bool,
        conversation: Option<&Conversation>,
    ) -> Result<FragmentStream, GenerationError> {
        let body = ChatRequest {
            model: self.model_name.clone(),
            messages: chat_messages(prompt, conversation),
            stream,
            options: prompt.options.clone(),
        };

        let response = self.client.post("/chat/completions", &body).await?;

        if stream {
            return Ok(decode_sse(response.bytes_stream(), chat_fragment));
        }

        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let fragment = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or_else(|| {
                GenerationError::InvalidResponse(
                    "response carried no choices[0].message.content".to_string(),
                )
            })?;

        Ok(Box::pin(once(async move { Ok(fragment) })))
    }
}

/// Newline-joins prior exchanges and the current prompt into one string.
///
/// Deliberately lossy: the `/completions` endpoint takes raw text, so role
/// information is dropped. Order is exactly the conversation's own: each
/// prior prompt followed by its response, then the current prompt.
fn flatten_history(prompt: &Prompt, conversation: Option<&Conversation>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(conversation) = conversation {
        for exchange in conversation.exchanges() {
            parts.push(&exchange.prompt);
            parts.push(&exchange.response);
        }
    }
    parts.push(&prompt.text);
    parts.join("\n")
}

/// Builds the role-structured message list, current prompt last.
fn chat_messages(prompt: &Prompt, conversation: Option<&Conversation>) -> Vec<ChatMessage> {
    let mut messages = Vec::new();
    if let Some(conversation) = conversation {
        for exchange in conversation.exchanges() {
            messages.push(ChatMessage {
                role: Role::User,
                content: exchange.prompt.clone(),
            });
            messages.push(ChatMessage {
                role: Role::Assistant,
                content: exchange.response.clone(),
            });
        }
    }
    messages.push(ChatMessage {
        role: Role::User,
        content: prompt.text.clone(),
    });
    messages
}
