//! Team permission resource descriptions.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;

/// Grants a team a permission level on a repository.
///
/// # Examples
///
/// ```rust
/// use github_resources::{TeamAccessSpec, TeamPermission};
///
/// let grant = TeamAccessSpec {
///     repository: "kitsune2".to_string(),
///     team: "core-dev".to_string(),
///     permission: TeamPermission::Admin,
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamAccessSpec {
    /// Name of the repository
    pub repository: String,

    /// Team slug
    pub team: String,

    /// Permission level granted to the team
    pub permission: TeamPermission,
}

/// Permission level a team can hold on a repository.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamPermission {
    /// Read-only access
    Pull,
    /// Read access plus issue management
    Triage,
    /// Read and write access
    Push,
    /// Write access plus repository management without settings
    Maintain,
    /// Full administrative access
    Admin,
}
