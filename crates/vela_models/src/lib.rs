//! Model interface and registry for Vela.
//!
//! Provides a unified interface for remote model access, decoupling consumers
//! from provider implementations.
//!
//! # Overview
//!
//! - Provider-agnostic: Consumers depend only on this crate, not specific provider crates.
//!
//! - Modular providers: Provider crates construct [`llm::Model`] instances and
//!   register them at startup, allowing models to be swapped via configuration
//!   without code changes.
//!
//! - Minimal dependencies: Each provider lives in a separate crate.
//!
//! # Example
//!
//! ```ignore
//! use vela_models::{KeyStore, ModelRegistry};
//! use vela_models::llm::Prompt;
//! use futures_util::StreamExt;
//!
//! let mut registry = ModelRegistry::new();
//! let keys = std::sync::Arc::new(KeyStore::new());
//! vela_model_providers::sambanova::register_models(&mut registry, &keys);
//!
//! let model = registry.model("sambanova/Meta-Llama-3.1-8B-Instruct")?;
//! let mut fragments = model.execute(&Prompt::new("Hello!"), true, None).await?;
//! while let Some(fragment) = fragments.next().await {
//!     print!("{}", fragment?);
//! }
//! ```

pub mod error;
mod keys;
pub mod llm;
mod registry;

pub use keys::KeyStore;
pub use registry::ModelRegistry;
