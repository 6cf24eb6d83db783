//! Model registry.

use crate::error::CreateModelError;
use crate::llm::Model;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of model adapters, keyed by host-visible model id.
///
/// # For Consumers
///
/// Look up models by the identifier they were registered under
/// (e.g., `"sambanova/Meta-Llama-3.1-8B-Instruct"`). See [`model()`](Self::model).
///
/// # For Provider Authors
///
/// Provider crates expose a `register_models` entry point that is handed a
/// mutable registry at startup and registers one adapter per model id. After
/// startup the registry is shared read-only.
#[derive(Default)]
pub struct ModelRegistry {
    // Maps host-visible model ids to adapter instances.
    models: HashMap<String, Arc<dyn Model>>,
}

impl core::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.model_ids())
            .finish()
    }
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Returns the adapter registered under `model_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no adapter is registered under that id.
    pub fn model(&self, model_id: impl AsRef<str>) -> Result<Arc<dyn Model>, CreateModelError> {
        let model_id = model_id.as_ref();
        self.get(model_id)
            .ok_or_else(|| CreateModelError::UnknownModel(model_id.to_string()))
    }

    /// Registers a model adapter under its own [`Model::model_id`].
    ///
    /// # Panics
    ///
    /// Panics if a model with the same id is already registered.
    pub fn register(&mut self, model: Arc<dyn Model>) {
        let model_id = model.model_id().to_string();
        assert!(
            !self.models.contains_key(&model_id),
            "model '{model_id}' is already registered"
        );
        self.models.insert(model_id, model);
    }

    /// Returns an adapter by id, if registered.
    #[must_use]
    pub fn get(&self, model_id: impl AsRef<str>) -> Option<Arc<dyn Model>> {
        self.models.get(model_id.as_ref()).cloned()
    }

    /// Checks if a model id is registered.
    #[must_use]
    pub fn contains(&self, model_id: impl AsRef<str>) -> bool {
        self.models.contains_key(model_id.as_ref())
    }

    /// Lists registered model ids.
    #[must_use]
    pub fn model_ids(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// Returns the number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Checks whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
