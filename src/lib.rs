//! A pluggable model registry with provider backends for remote inference APIs.
//!

/// Host-side model interface: the model trait, registry, and credential store.
pub use vela_models;

/// Provider backends, one module per provider behind a feature flag.
pub use vela_model_providers;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use vela_models::llm::{Conversation, Exchange, FragmentStream, Model, Prompt};
    pub use vela_models::{KeyStore, ModelRegistry};

    #[cfg(feature = "sambanova")]
    pub use vela_model_providers::sambanova;
}
