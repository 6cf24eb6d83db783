//! Credential storage with environment fallback.

use std::collections::HashMap;

/// Named credential store with environment-variable fallback.
///
/// Lookups check the store first, then the process environment. Empty values
/// are treated as absent in both places, so an empty entry cannot mask a
/// configured environment variable.
#[derive(Default, Clone)]
pub struct KeyStore {
    entries: HashMap<String, String>,
}

impl core::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyStore")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl KeyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a credential under `name`.
    pub fn insert(&mut self, name: impl Into<String>, key: impl Into<String>) {
        self.entries.insert(name.into(), key.into());
    }

    /// Looks up the credential stored under `name`, falling back to the
    /// `env_fallback` environment variable.
    ///
    /// Returns `None` when neither source holds a non-empty value.
    #[must_use]
    pub fn get(&self, name: &str, env_fallback: &str) -> Option<String> {
        if let Some(key) = self.entries.get(name)
            && !key.is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(env_fallback).ok().filter(|key| !key.is_empty())
    }
}
