//! Secret source boundary.
//!
//! Credential values live outside this program; a [`SecretSource`] supplies
//! them at plan-build time. A missing credential is a fatal configuration
//! error, surfaced before any resource reaches the provisioning engine.

use std::collections::HashMap;

use secrecy::SecretString;

use crate::errors::{ConfigResult, Error};

#[cfg(test)]
#[path = "secrets_tests.rs"]
mod tests;

/// Supplies named credential values during plan construction.
pub trait SecretSource {
    /// Resolves a secret by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSecret`] when the source cannot supply the
    /// named credential.
    fn resolve(&self, name: &str) -> ConfigResult<SecretString>;
}

/// Secret source backed by process environment variables.
///
/// Secret names map to environment variable names, optionally behind a
/// prefix (`HC_CONFIG_SECRET_` turns `RELEASE_AUTOMATION_TOKEN` into
/// `HC_CONFIG_SECRET_RELEASE_AUTOMATION_TOKEN`).
#[derive(Debug, Clone, Default)]
pub struct EnvSecretSource {
    prefix: String,
}

impl EnvSecretSource {
    /// Creates a source reading unprefixed environment variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source reading environment variables behind a prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl SecretSource for EnvSecretSource {
    fn resolve(&self, name: &str) -> ConfigResult<SecretString> {
        let variable = format!("{}{}", self.prefix, name);
        match std::env::var(&variable) {
            Ok(value) => Ok(SecretString::from(value)),
            Err(_) => Err(Error::MissingSecret {
                name: name.to_string(),
                reason: format!("environment variable {} is not set", variable),
            }),
        }
    }
}

/// In-memory secret source for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretSource {
    values: HashMap<String, String>,
}

impl MemorySecretSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret value.
    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretSource for MemorySecretSource {
    fn resolve(&self, name: &str) -> ConfigResult<SecretString> {
        self.values
            .get(name)
            .map(|value| SecretString::from(value.clone()))
            .ok_or_else(|| Error::MissingSecret {
                name: name.to_string(),
                reason: "not present in memory source".to_string(),
            })
    }
}
