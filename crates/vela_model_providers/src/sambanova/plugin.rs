//! SambaNova registration entry point.

use super::catalog::catalog;
use super::client::SambaNovaClient;
use super::model::{SambaNovaChat, SambaNovaCompletion};
use super::{API_BASE, NEEDS_KEY, REGISTRATION_KEY_ENV_VAR};
use std::sync::Arc;
use vela_models::llm::Model;
use vela_models::{KeyStore, ModelRegistry};

/// Builds one adapter per catalog entry per mode.
///
/// Pure construction, no registry involved: for each catalog id `X` this
/// yields a chat adapter with id `sambanova/X` and a completion adapter with
/// id `sambanovacompletion/X`, all pointing at [`API_BASE`].
#[must_use]
pub fn build_models(keys: &Arc<KeyStore>) -> Vec<Arc<dyn Model>> {
    let mut models: Vec<Arc<dyn Model>> = Vec::new();

    for id in catalog() {
        models.push(Arc::new(SambaNovaChat::new(
            format!("sambanova/{id}"),
            *id,
            SambaNovaClient::new(API_BASE, keys.clone()),
        )));
    }

    for id in catalog() {
        models.push(Arc::new(SambaNovaCompletion::new(
            format!("sambanovacompletion/{id}"),
            *id,
            SambaNovaClient::new(API_BASE, keys.clone()),
        )));
    }

    models
}

/// Registers the SambaNova adapters, gated on a configured credential.
///
/// When neither the `sambanova` store entry nor the fallback environment
/// variable holds a key, nothing is registered and the call is a silent
/// no-op rather than an error.
pub fn register_models(registry: &mut ModelRegistry, keys: &Arc<KeyStore>) {
    if keys.get(NEEDS_KEY, REGISTRATION_KEY_ENV_VAR).is_none() {
        tracing::debug!("no SambaNova API key configured, skipping model registration");
        return;
    }

    for model in build_models(keys) {
        registry.register(model);
    }
}
