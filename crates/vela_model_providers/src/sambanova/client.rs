//! SambaNova API client.

use super::{KEY_ENV_VAR, NEEDS_KEY};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use std::sync::Arc;
use vela_models::KeyStore;
use vela_models::llm::GenerationError;

/// HTTP client for the SambaNova inference API.
///
/// Holds the endpoint configuration explicitly: base URL, static descriptor
/// headers, and a handle to the credential store. The bearer token is
/// resolved per request, so a key configured after startup is picked up
/// without rebuilding adapters.
#[derive(Clone)]
pub struct SambaNovaClient {
    client: reqwest::Client,
    api_base: String,
    keys: Arc<KeyStore>,
    headers: HeaderMap,
}

impl SambaNovaClient {
    /// Creates a new client against `api_base`.
    pub fn new(api_base: impl Into<String>, keys: Arc<KeyStore>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "HTTP-Referer",
            HeaderValue::from_static("https://github.com/vela-ai/vela"),
        );
        headers.insert("X-Title", HeaderValue::from_static("Vela"));

        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            keys,
            headers,
        }
    }

    /// Sends a JSON POST to `{api_base}{path}` and returns the raw response.
    ///
    /// Any non-success status is a hard failure: the body is read and
    /// surfaced as a [`GenerationError::Provider`] without retry.
    pub async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, GenerationError> {
        let url = format!("{}{path}", self.api_base);

        let key = self.keys.get(NEEDS_KEY, KEY_ENV_VAR).ok_or_else(|| {
            GenerationError::Auth(format!(
                "no SambaNova API key: store entry '{NEEDS_KEY}' and ${KEY_ENV_VAR} are both unset"
            ))
        })?;

        let mut headers = self.headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|err| GenerationError::Auth(format!("invalid API key header: {err}")))?,
        );

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|err| GenerationError::Http(err.to_string()))?;
            return Err(GenerationError::Provider {
                status: Some(status.as_u16()),
                message: body,
                source: None,
            });
        }

        Ok(response)
    }
}

impl core::fmt::Debug for SambaNovaClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SambaNovaClient")
            .field("api_base", &self.api_base)
            .field("keys", &"[REDACTED]")
            .finish()
    }
}
