//! Provider backends for the Vela model registry.
//!
//! Each provider is packaged as a standalone module behind a feature flag.
//! At startup the host hands each enabled provider a mutable
//! [`ModelRegistry`](vela_models::ModelRegistry); the provider registers one
//! adapter per model id it exposes, and the registry is shared read-only from
//! then on.
//!
//! # Supported Providers
//!
//! | Provider | Feature Flag | Description |
//! |----------|--------------|-------------|
//! | SambaNova | `sambanova` (default) | SambaNova cloud inference API |
//!
//! # Feature Flags
//!
//! Each provider is gated behind a feature flag to avoid pulling in
//! unnecessary dependencies.
//!
//! ```toml
//! # Enable only SambaNova (default)
//! vela_model_providers = { path = "../vela_model_providers" }
//! ```
//!
//! # Usage
//!
//! Providers register nothing when their credential is absent, so enabling a
//! provider without configuring a key is a silent no-op.
//!
//! ```no_run
//! # #[cfg(feature = "sambanova")]
//! # {
//! use std::sync::Arc;
//! use vela_models::{KeyStore, ModelRegistry};
//!
//! let keys = Arc::new(KeyStore::new());
//! let mut registry = ModelRegistry::new();
//! vela_model_providers::sambanova::register_models(&mut registry, &keys);
//! # }
//! ```

#[cfg(feature = "sambanova")]
pub mod sambanova;
