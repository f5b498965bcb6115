//! Default branch resource descriptions.

use serde::{Deserialize, Serialize};

/// Desired default branch for a repository.
///
/// With `rename: false` the named branch must already exist and is marked as
/// the default. With `rename: true` the current default branch is renamed to
/// `branch`, carrying its history along (used when migrating repositories
/// that still default to an older branch name).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultBranchSpec {
    /// Name of the repository
    pub repository: String,

    /// Name of the desired default branch
    pub branch: String,

    /// Whether to rename the current default branch instead of switching
    pub rename: bool,
}
