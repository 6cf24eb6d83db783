//! SambaNova provider backend.
//!
//! Talks to the SambaNova cloud inference API, which exposes an
//! OpenAI-compatible surface: `/completions` for raw-text completion and
//! `/chat/completions` for role-structured chat, both with SSE streaming.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use vela_models::{KeyStore, ModelRegistry};
//! # let keys = Arc::new(KeyStore::new());
//! # let mut registry = ModelRegistry::new();
//! vela_model_providers::sambanova::register_models(&mut registry, &keys);
//! ```

mod catalog;
mod client;
mod model;
mod plugin;
mod stream;
mod types;

pub use catalog::catalog;
pub use client::SambaNovaClient;
pub use model::{SambaNovaChat, SambaNovaCompletion};
pub use plugin::{build_models, register_models};

/// Base URL of the SambaNova inference API.
pub const API_BASE: &str = "https://api.sambanova.ai/v1";

/// Name of the [`KeyStore`](vela_models::KeyStore) entry holding the API key.
pub const NEEDS_KEY: &str = "sambanova";

/// Environment fallback the adapters use when resolving their request-time key.
pub const KEY_ENV_VAR: &str = "SAMBANOVA_KEY";

/// Environment fallback checked by [`register_models`] before registering anything.
///
/// Deliberately distinct from [`KEY_ENV_VAR`]: the registration gate and the
/// request-time lookup historically used different fallback variables, and
/// both are honored.
pub const REGISTRATION_KEY_ENV_VAR: &str = "LLM_SAMBANOVA_KEY";
