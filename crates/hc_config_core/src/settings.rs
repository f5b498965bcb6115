//! Organization settings.
//!
//! TOML-loadable knobs that vary per deployment of this program: the
//! organization name, the teams granted access to every repository, and the
//! name of the release automation credential. Defaults reproduce the
//! Holochain organization's conventions.

use github_resources::TeamPermission;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigResult, Error};

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// Organization-wide settings.
///
/// # TOML Format
///
/// ```toml
/// organization = "holochain"
/// release_token_secret = "RELEASE_AUTOMATION_TOKEN"
///
/// [[team_grants]]
/// team = "core-dev"
/// permission = "admin"
///
/// [[team_grants]]
/// team = "holochain-devs"
/// permission = "maintain"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrgSettings {
    /// GitHub organization the repositories belong to
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Teams granted access to every managed repository
    #[serde(default = "TeamGrant::standard_grants")]
    pub team_grants: Vec<TeamGrant>,

    /// Name of the release automation credential, used both as the secret
    /// source lookup key and as the Actions secret name
    #[serde(default = "default_release_token_secret")]
    pub release_token_secret: String,
}

impl Default for OrgSettings {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            team_grants: TeamGrant::standard_grants(),
            release_token_secret: default_release_token_secret(),
        }
    }
}

impl OrgSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] when the text is not valid TOML or
    /// does not match the settings schema.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|e| Error::InvalidSettings {
            reason: e.to_string(),
        })
    }
}

fn default_organization() -> String {
    "holochain".to_string()
}

fn default_release_token_secret() -> String {
    "RELEASE_AUTOMATION_TOKEN".to_string()
}

/// A team and the permission it holds on every managed repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamGrant {
    /// Team slug
    pub team: String,

    /// Permission level
    pub permission: TeamPermission,
}

impl TeamGrant {
    /// The organization's standard grants: core-dev administers, the wider
    /// developer team maintains.
    pub fn standard_grants() -> Vec<Self> {
        vec![
            Self {
                team: "core-dev".to_string(),
                permission: TeamPermission::Admin,
            },
            Self {
                team: "holochain-devs".to_string(),
                permission: TeamPermission::Maintain,
            },
        ]
    }
}
