//! Actions secret resource descriptions.
//!
//! Secret values are wrapped in [`secrecy::SecretString`] so they are
//! redacted from `Debug` output and log lines. Serialization exposes the
//! value, since the serialized plan is the handoff to the provisioning
//! engine, which writes the secret to the repository.

use secrecy::{ExposeSecret, SecretString};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;

/// Desired Actions secret on a repository.
///
/// # Examples
///
/// ```rust
/// use github_resources::ActionsSecretSpec;
///
/// let secret = ActionsSecretSpec::new("lair", "RELEASE_AUTOMATION_TOKEN", "ghs_example".into());
/// let printed = format!("{:?}", secret);
/// assert!(!printed.contains("ghs_example"));
/// ```
#[derive(Debug, Deserialize)]
pub struct ActionsSecretSpec {
    /// Name of the repository
    pub repository: String,

    /// Secret name as referenced by workflows
    pub secret_name: String,

    /// Secret value, redacted from debug output
    pub plaintext_value: SecretString,
}

impl ActionsSecretSpec {
    /// Creates a secret description.
    pub fn new(
        repository: impl Into<String>,
        secret_name: impl Into<String>,
        plaintext_value: SecretString,
    ) -> Self {
        Self {
            repository: repository.into(),
            secret_name: secret_name.into(),
            plaintext_value,
        }
    }
}

impl Serialize for ActionsSecretSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The plan document is the engine boundary; the secret value must
        // cross it in the clear.
        let mut state = serializer.serialize_struct("ActionsSecretSpec", 3)?;
        state.serialize_field("repository", &self.repository)?;
        state.serialize_field("secret_name", &self.secret_name)?;
        state.serialize_field("plaintext_value", self.plaintext_value.expose_secret())?;
        state.end()
    }
}
