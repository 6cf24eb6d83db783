//! Integration tests for the SambaNova provider.
//!
//! HTTP behavior is exercised against a local wiremock server. The tests at
//! the bottom talk to the live API and are ignored by default because they
//! require:
//! - `SAMBANOVA_KEY` environment variable (or in `.env` file)
//! - Network access to the SambaNova API
//! - May incur API costs
//!
//! To run them:
//! ```sh
//! cargo test -p vela_model_providers --test sambanova_integration -- --ignored
//! ```

#![cfg(feature = "sambanova")]

use futures_util::StreamExt;
use std::sync::Arc;
use std::sync::Once;
use vela_model_providers::sambanova::{
    NEEDS_KEY, SambaNovaChat, SambaNovaClient, SambaNovaCompletion, catalog, register_models,
};
use vela_models::llm::{Conversation, FragmentStream, GenerationError, Model, Prompt};
use vela_models::{KeyStore, ModelRegistry};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

fn test_keys() -> Arc<KeyStore> {
    let mut keys = KeyStore::new();
    keys.insert(NEEDS_KEY, "test-key");
    Arc::new(keys)
}

fn completion_model(api_base: &str) -> SambaNovaCompletion {
    SambaNovaCompletion::new(
        "sambanovacompletion/Meta-Llama-3.1-8B-Instruct",
        "Meta-Llama-3.1-8B-Instruct",
        SambaNovaClient::new(api_base, test_keys()),
    )
}

fn chat_model(api_base: &str) -> SambaNovaChat {
    SambaNovaChat::new(
        "sambanova/Meta-Llama-3.1-8B-Instruct",
        "Meta-Llama-3.1-8B-Instruct",
        SambaNovaClient::new(api_base, test_keys()),
    )
}

async fn collect(mut fragments: FragmentStream) -> Vec<String> {
    let mut out = Vec::new();
    while let Some(item) = fragments.next().await {
        out.push(item.expect("fragment"));
    }
    out
}

#[tokio::test]
async fn non_streaming_completion_yields_one_fragment() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/completions"))
        .and(matchers::header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"choices":[{"text":"full answer"}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let model = completion_model(&server.uri());
    let fragments = model
        .execute(&Prompt::new("Hello"), false, None)
        .await
        .expect("execute");

    assert_eq!(collect(fragments).await, vec!["full answer"]);
}

#[tokio::test]
async fn completion_body_carries_flattened_history() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/completions"))
        .and(matchers::body_partial_json(serde_json::json!({
            "model": "Meta-Llama-3.1-8B-Instruct",
            "prompt": "earlier q\nearlier a\ncurrent",
            "stream": false,
            "temperature": 0.2,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"choices":[{"text":"ok"}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut conversation = Conversation::new();
    conversation.push("earlier q", "earlier a");

    let model = completion_model(&server.uri());
    let prompt = Prompt::new("current").with_option("temperature", 0.2);
    let fragments = model
        .execute(&prompt, false, Some(&conversation))
        .await
        .expect("execute");

    assert_eq!(collect(fragments).await, vec!["ok"]);
}

#[tokio::test]
async fn streaming_completion_decodes_sse() {
    let server = MockServer::start().await;

    let body = concat!(
        "data: {\"choices\":[{\"text\":\"Hello\"}]}\n\n",
        "data: {\"choices\":[{\"text\":\" world\"}]}\n\n",
        "data: [DONE]\n\n",
    );

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/completions"))
        .and(matchers::body_partial_json(serde_json::json!({"stream": true})))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let model = completion_model(&server.uri());
    let fragments = model
        .execute(&Prompt::new("Hello"), true, None)
        .await
        .expect("execute");

    assert_eq!(collect(fragments).await, vec!["Hello", " world"]);
}

#[tokio::test]
async fn error_status_fails_before_any_fragment() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/completions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":"rate limit exceeded"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let model = completion_model(&server.uri());
    let err = model
        .execute(&Prompt::new("Hello"), true, None)
        .await
        .map(|_fragments| ())
        .expect_err("non-2xx must fail");

    match err {
        GenerationError::Provider {
            status, message, ..
        } => {
            assert_eq!(status, Some(429));
            assert!(message.contains("rate limit exceeded"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn missing_credential_fails_without_a_request() {
    let server = MockServer::start().await;

    // No mock mounted: a request reaching the server would 404 into a
    // Provider error, but the Auth error fires before any request.
    let model = SambaNovaCompletion::new(
        "sambanovacompletion/Meta-Llama-3.1-8B-Instruct",
        "Meta-Llama-3.1-8B-Instruct",
        SambaNovaClient::new(server.uri(), Arc::new(KeyStore::new())),
    );

    let err = model
        .execute(&Prompt::new("Hello"), false, None)
        .await
        .map(|_fragments| ())
        .expect_err("no key configured");
    assert!(matches!(err, GenerationError::Auth(_)));
}

#[tokio::test]
async fn malformed_full_response_propagates() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&server)
        .await;

    let model = completion_model(&server.uri());
    let err = model
        .execute(&Prompt::new("Hello"), false, None)
        .await
        .map(|_fragments| ())
        .expect_err("unparseable body must fail");
    assert!(matches!(err, GenerationError::Json(_)));
}

#[tokio::test]
async fn chat_round_trip_uses_messages() {
    let server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .and(matchers::body_partial_json(serde_json::json!({
            "messages": [
                {"role": "user", "content": "earlier q"},
                {"role": "assistant", "content": "earlier a"},
                {"role": "user", "content": "current"},
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"choices":[{"message":{"role":"assistant","content":"chat answer"}}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut conversation = Conversation::new();
    conversation.push("earlier q", "earlier a");

    let model = chat_model(&server.uri());
    let fragments = model
        .execute(&Prompt::new("current"), false, Some(&conversation))
        .await
        .expect("execute");

    assert_eq!(collect(fragments).await, vec!["chat answer"]);
}

#[tokio::test]
async fn chat_streaming_decodes_deltas() {
    let server = MockServer::start().await;

    let body = concat!(
        "data: {\"choices\":[{\"delta\":{\"content\":\"chat\"}}]}\n\n",
        "data: {\"choices\":[{\"delta\":{\"content\":\" stream\"}}]}\n\n",
        "data: [DONE]\n\n",
    );

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let model = chat_model(&server.uri());
    let fragments = model
        .execute(&Prompt::new("Hello"), true, None)
        .await
        .expect("execute");

    assert_eq!(collect(fragments).await, vec!["chat", " stream"]);
}

#[test]
fn registration_counts_follow_the_catalog() {
    let mut registry = ModelRegistry::new();
    register_models(&mut registry, &test_keys());

    assert_eq!(registry.len(), 2 * catalog().len());
    for id in catalog() {
        assert!(registry.contains(format!("sambanova/{id}")));
        assert!(registry.contains(format!("sambanovacompletion/{id}")));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Live API tests (ignored)
// ─────────────────────────────────────────────────────────────────────────────

fn live_model() -> SambaNovaCompletion {
    init_env();
    SambaNovaCompletion::new(
        "sambanovacompletion/Meta-Llama-3.1-8B-Instruct",
        "Meta-Llama-3.1-8B-Instruct",
        SambaNovaClient::new(
            vela_model_providers::sambanova::API_BASE,
            Arc::new(KeyStore::new()),
        ),
    )
}

#[tokio::test]
#[ignore = "requires SAMBANOVA_KEY"]
async fn live_basic_completion() {
    let model = live_model();
    let fragments = collect(
        model
            .execute(&Prompt::new("Say hello in one word."), false, None)
            .await
            .expect("execute"),
    )
    .await;

    assert_eq!(fragments.len(), 1);
    assert!(!fragments[0].is_empty());
}

#[tokio::test]
#[ignore = "requires SAMBANOVA_KEY"]
async fn live_streaming_completion() {
    let model = live_model();
    let fragments = collect(
        model
            .execute(&Prompt::new("Count from one to five."), true, None)
            .await
            .expect("execute"),
    )
    .await;

    assert!(!fragments.is_empty());
}
