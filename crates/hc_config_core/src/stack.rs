//! Resource stack: the handoff to the provisioning engine.
//!
//! The program's output is an ordered list of declarative resource requests.
//! The external engine consumes the serialized stack and performs the actual
//! work: diffing desired against actual state, ordering API calls, and
//! retrying transient failures. Registration order is preserved so the
//! engine sees resources in dependency order (repository before its branch,
//! access, rulesets, and secrets).

use std::collections::HashSet;

use github_resources::{
    ActionsSecretSpec, DefaultBranchSpec, IssueLabelSpec, RepositoryRuleset, RepositorySpec,
    TeamAccessSpec,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::{ConfigResult, Error};

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;

/// A single declarative resource.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    /// A repository and its settings
    Repository(RepositorySpec),
    /// A repository's default branch
    DefaultBranch(DefaultBranchSpec),
    /// A team permission grant
    TeamAccess(TeamAccessSpec),
    /// A branch protection ruleset
    Ruleset(RepositoryRuleset),
    /// An Actions secret
    ActionsSecret(ActionsSecretSpec),
    /// An issue label
    IssueLabel(IssueLabelSpec),
}

impl Resource {
    /// The resource kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Repository(_) => "repository",
            Resource::DefaultBranch(_) => "default_branch",
            Resource::TeamAccess(_) => "team_access",
            Resource::Ruleset(_) => "ruleset",
            Resource::ActionsSecret(_) => "actions_secret",
            Resource::IssueLabel(_) => "issue_label",
        }
    }
}

/// A resource registered under a logical name.
///
/// The logical name identifies the resource across program runs. An import
/// id tells the engine to adopt an already-existing cloud resource instead
/// of creating it.
#[derive(Debug, Serialize)]
pub struct ResourceRequest {
    /// Stable name identifying this resource across runs
    pub logical_name: String,

    /// Existing cloud resource to adopt, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,

    /// The resource description
    pub resource: Resource,
}

/// Ordered collection of resource requests with unique logical names.
#[derive(Debug, Default, Serialize)]
pub struct ResourceStack {
    resources: Vec<ResourceRequest>,
    #[serde(skip)]
    names: HashSet<String>,
}

impl ResourceStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource to be created by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateResourceName`] if the logical name is
    /// already taken.
    pub fn register(
        &mut self,
        logical_name: impl Into<String>,
        resource: Resource,
    ) -> ConfigResult<()> {
        self.push(logical_name.into(), None, resource)
    }

    /// Registers a resource that adopts an existing cloud resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateResourceName`] if the logical name is
    /// already taken.
    pub fn register_imported(
        &mut self,
        logical_name: impl Into<String>,
        import_id: impl Into<String>,
        resource: Resource,
    ) -> ConfigResult<()> {
        self.push(logical_name.into(), Some(import_id.into()), resource)
    }

    fn push(
        &mut self,
        logical_name: String,
        import_id: Option<String>,
        resource: Resource,
    ) -> ConfigResult<()> {
        if !self.names.insert(logical_name.clone()) {
            return Err(Error::DuplicateResourceName { logical_name });
        }

        debug!(
            logical_name = logical_name.as_str(),
            kind = resource.kind(),
            imported = import_id.is_some(),
            "Registered resource"
        );

        self.resources.push(ResourceRequest {
            logical_name,
            import_id,
            resource,
        });
        Ok(())
    }

    /// The registered requests, in registration order.
    pub fn resources(&self) -> &[ResourceRequest] {
        &self.resources
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Renders the plan document consumed by the engine.
    pub fn to_plan_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
