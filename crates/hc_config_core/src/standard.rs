//! Standard repository conventions.
//!
//! Helpers producing the resource descriptions shared by every managed
//! repository: the standard repository settings, the standard team grants,
//! and the `main` default branch.

use github_resources::{DefaultBranchSpec, RepositorySpec, TeamAccessSpec};

use crate::settings::TeamGrant;

#[cfg(test)]
#[path = "standard_tests.rs"]
mod tests;

/// Default branch name required across the organization.
pub const DEFAULT_BRANCH: &str = "main";

/// Standard repository settings, with an optional description.
pub fn standard_repository(name: &str, description: Option<&str>) -> RepositorySpec {
    let spec = RepositorySpec::new(name);
    match description {
        Some(description) => spec.with_description(description),
        None => spec,
    }
}

/// The standard team grants applied to a repository.
pub fn standard_access(repository: &str, grants: &[TeamGrant]) -> Vec<TeamAccessSpec> {
    grants
        .iter()
        .map(|grant| TeamAccessSpec {
            repository: repository.to_string(),
            team: grant.team.clone(),
            permission: grant.permission.clone(),
        })
        .collect()
}

/// Requires `main` as the default branch; the branch must already exist.
pub fn main_default_branch(repository: &str) -> DefaultBranchSpec {
    DefaultBranchSpec {
        repository: repository.to_string(),
        branch: DEFAULT_BRANCH.to_string(),
        rename: false,
    }
}

/// Renames the current default branch to `main`.
///
/// For repositories that still default to an older branch name and need
/// their history carried over.
pub fn migrate_default_branch_to_main(repository: &str) -> DefaultBranchSpec {
    DefaultBranchSpec {
        repository: repository.to_string(),
        branch: DEFAULT_BRANCH.to_string(),
        rename: true,
    }
}
