//! Repository resource descriptions.
//!
//! This module contains the type describing the desired settings of a single
//! GitHub repository: visibility, feature toggles, and merge policy.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Desired settings for a GitHub repository.
///
/// All fields are the engine's repository resource arguments. Construct with
/// [`RepositorySpec::new`] and adjust individual fields for repositories that
/// deviate from the defaults.
///
/// # Examples
///
/// ```rust
/// use github_resources::RepositorySpec;
///
/// let mut spec = RepositorySpec::new("lair").with_description("secret lair private keystore");
/// spec.allow_rebase_merge = false;
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositorySpec {
    /// Repository name
    pub name: String,

    /// Repository description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Repository visibility
    pub visibility: RepositoryVisibility,

    /// Whether downloads are enabled
    pub has_downloads: bool,

    /// Whether the issue tracker is enabled
    pub has_issues: bool,

    /// Whether projects are enabled
    pub has_projects: bool,

    /// Whether the wiki is enabled
    pub has_wiki: bool,

    /// Whether dependency vulnerability alerts are enabled
    pub vulnerability_alerts: bool,

    /// Whether pull requests may be queued for auto-merge
    pub allow_auto_merge: bool,

    /// Whether head branches are deleted after merging
    pub delete_branch_on_merge: bool,

    /// Whether pull request branches may be updated from the base branch
    pub allow_update_branch: bool,

    /// Whether squash merging is allowed
    pub allow_squash_merge: bool,

    /// Whether rebase merging is allowed
    pub allow_rebase_merge: bool,

    /// Whether merge commits are allowed
    pub allow_merge_commit: bool,

    /// Default title for squash-merge commits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_merge_commit_title: Option<SquashMergeCommitTitle>,

    /// Repository topics
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

impl RepositorySpec {
    /// Creates a repository description with the organization's defaults.
    ///
    /// Public, issues and projects enabled, wiki and downloads disabled,
    /// vulnerability alerts on. Merge policy: squash and rebase allowed,
    /// merge commits not, auto-merge enabled, head branches deleted after
    /// merge.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            visibility: RepositoryVisibility::Public,
            has_downloads: false,
            has_issues: true,
            has_projects: true,
            has_wiki: false,
            vulnerability_alerts: true,
            allow_auto_merge: true,
            delete_branch_on_merge: true,
            allow_update_branch: true,
            allow_squash_merge: true,
            allow_rebase_merge: true,
            allow_merge_commit: false,
            squash_merge_commit_title: None,
            topics: vec![],
        }
    }

    /// Sets the repository description.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }
}

/// Repository visibility.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryVisibility {
    /// Visible to everyone
    Public,
    /// Visible to collaborators only
    Private,
    /// Visible to organization members
    Internal,
}

/// Default title used for squash-merge commits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SquashMergeCommitTitle {
    /// Use the pull request title
    #[serde(rename = "PR_TITLE")]
    PrTitle,
    /// Use the commit title for single-commit pull requests, the pull
    /// request title otherwise
    #[serde(rename = "COMMIT_OR_PR_TITLE")]
    CommitOrPrTitle,
}
