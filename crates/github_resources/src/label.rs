//! Issue label resource descriptions.

use serde::{Deserialize, Serialize};

/// Desired issue label on a repository.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueLabelSpec {
    /// Name of the repository
    pub repository: String,

    /// Label name
    pub name: String,

    /// Label color as a six character hex code, without the leading `#`
    pub color: String,

    /// Label description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
