//! Secret lookup for the chat command
//!
//! The command needs exactly one capability: look a secret up by name.
//! Backed by the process environment in production and by a static map in
//! tests.

use secrecy::SecretString;
use std::collections::HashMap;
use tracing::debug;

/// Capability to look up named secrets
pub trait SecretProvider: Send + Sync {
    /// The secret value, if configured
    fn get_secret(&self, name: &str) -> Option<SecretString>;
}

/// Secrets read from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretProvider for EnvSecrets {
    fn get_secret(&self, name: &str) -> Option<SecretString> {
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
            _ => {
                debug!(secret = %name, "Secret not present in environment");
                None
            }
        }
    }
}

/// Fixed secrets for tests
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretProvider for StaticSecrets {
    fn get_secret(&self, name: &str) -> Option<SecretString> {
        self.values
            .get(name)
            .map(|value| SecretString::from(value.clone()))
    }
}
