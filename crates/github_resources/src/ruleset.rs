//! Repository ruleset resource descriptions.
//!
//! This module contains the types describing a desired branch protection
//! ruleset. Rulesets are the enforceable governance policies attached to a
//! repository: merge restrictions, required status checks, and required
//! reviews.
//!
//! The serialized form is consumed by the provisioning engine's "repository
//! ruleset" resource type and must reproduce its schema exactly: a rules
//! block of per-rule booleans plus the pull-request and status-check
//! sub-policies, ref-name include/exclude globs, and an optional bypass
//! actor list.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "ruleset_tests.rs"]
mod tests;

/// Describes a repository ruleset to be created by the provisioning engine.
///
/// # Examples
///
/// ```rust
/// use github_resources::{
///     RepositoryRuleset, RulesetConditions, RulesetEnforcement, RulesetRules, RulesetTarget,
/// };
///
/// let ruleset = RepositoryRuleset {
///     name: "default".to_string(),
///     repository: "kitsune2".to_string(),
///     target: RulesetTarget::Branch,
///     enforcement: RulesetEnforcement::Active,
///     conditions: RulesetConditions::default_branch(),
///     rules: RulesetRules::default(),
///     bypass_actors: vec![],
/// };
/// assert_eq!(ruleset.conditions.ref_name.includes, vec!["~DEFAULT_BRANCH"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RepositoryRuleset {
    /// Ruleset name as shown in the repository settings UI
    pub name: String,

    /// Name of the repository the ruleset is attached to
    pub repository: String,

    /// Target type (branch or tag)
    pub target: RulesetTarget,

    /// Enforcement level
    pub enforcement: RulesetEnforcement,

    /// Conditions selecting the refs this ruleset applies to
    pub conditions: RulesetConditions,

    /// The rules block
    pub rules: RulesetRules,

    /// Actors who can bypass this ruleset
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bypass_actors: Vec<BypassActor>,
}

/// Target type for a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RulesetTarget {
    /// Ruleset applies to branches
    Branch,
    /// Ruleset applies to tags
    Tag,
}

/// Enforcement level for a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RulesetEnforcement {
    /// Ruleset is disabled
    Disabled,
    /// Ruleset is active and enforced
    Active,
    /// Ruleset is in evaluation mode (logs only, doesn't block)
    Evaluate,
}

/// Conditions for when a ruleset applies.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesetConditions {
    /// Reference name patterns
    pub ref_name: RefNameCondition,
}

impl RulesetConditions {
    /// Conditions matching only the repository's current default branch.
    ///
    /// `~DEFAULT_BRANCH` is the engine's placeholder that tracks the default
    /// branch even if it is later renamed.
    pub fn default_branch() -> Self {
        Self {
            ref_name: RefNameCondition {
                includes: vec!["~DEFAULT_BRANCH".to_string()],
                excludes: vec![],
            },
        }
    }

    /// Conditions matching a fixed set of ref-name glob patterns.
    pub fn ref_patterns<I, S>(includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ref_name: RefNameCondition {
                includes: includes.into_iter().map(Into::into).collect(),
                excludes: vec![],
            },
        }
    }
}

/// Reference name condition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefNameCondition {
    /// Glob patterns for refs the ruleset applies to
    pub includes: Vec<String>,

    /// Glob patterns for refs the ruleset never applies to
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// The rules block of a ruleset.
///
/// Each boolean enables the corresponding restriction for matching refs.
/// The pull-request and required-status-checks sub-policies are optional;
/// when absent the corresponding rule is not part of the ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RulesetRules {
    /// Whether matching refs may be created
    pub creation: bool,

    /// Whether matching refs may be updated directly; `false` routes all
    /// changes through pull requests
    pub update: bool,

    /// Whether matching refs may be deleted
    pub deletion: bool,

    /// Require linear history (no merge commits) on matching refs
    pub required_linear_history: bool,

    /// Require signed commits on matching refs
    pub required_signatures: bool,

    /// Pull request requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRule>,

    /// Required status checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_status_checks: Option<RequiredStatusChecksRule>,
}

impl Default for RulesetRules {
    fn default() -> Self {
        Self {
            creation: false,
            update: false,
            deletion: false,
            required_linear_history: false,
            required_signatures: false,
            pull_request: None,
            required_status_checks: None,
        }
    }
}

/// Pull request requirements for a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestRule {
    /// Dismiss stale reviews when new commits are pushed
    pub dismiss_stale_reviews_on_push: bool,

    /// Require a review from a code owner
    pub require_code_owner_review: bool,

    /// Require an approval on the most recent push
    pub require_last_push_approval: bool,

    /// Number of approving reviews required before merging
    pub required_approving_review_count: u32,

    /// Require all review threads to be resolved before merging
    pub required_review_thread_resolution: bool,
}

/// Required status checks for a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequiredStatusChecksRule {
    /// Checks that must pass before a ref can be updated
    pub required_checks: Vec<StatusCheck>,

    /// Require branches to be up to date with the base before merging
    pub strict_required_status_checks_policy: bool,

    /// Skip enforcement when a matching ref is first created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_enforce_on_create: Option<bool>,
}

/// A single required status check.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCheck {
    /// Status check context name, as reported by CI
    pub context: String,

    /// The integration that must report the check (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<u64>,
}

impl StatusCheck {
    /// A status check identified by context name only.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            integration_id: None,
        }
    }

    /// Pins this check to a specific integration (GitHub App).
    pub fn from_integration(self, integration_id: u64) -> Self {
        Self {
            integration_id: Some(integration_id),
            ..self
        }
    }
}

/// Actor who can bypass a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BypassActor {
    /// Actor ID; for `RepositoryRole` this is the role ID in GitHub's role
    /// system (5 is the repository admin role)
    pub actor_id: u64,

    /// Actor type
    pub actor_type: BypassActorType,

    /// Bypass mode
    pub bypass_mode: BypassMode,
}

impl BypassActor {
    /// The repository admin role with unconditional bypass.
    pub fn repository_admin() -> Self {
        Self {
            actor_id: 5,
            actor_type: BypassActorType::RepositoryRole,
            bypass_mode: BypassMode::Always,
        }
    }
}

/// Type of actor that can bypass a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum BypassActorType {
    /// Organization admin role
    OrganizationAdmin,
    /// Repository-level role (admin, maintain, write); the actor_id selects
    /// which one
    RepositoryRole,
    /// Team (use team ID as actor_id)
    Team,
    /// Integration (GitHub App)
    Integration,
}

/// Mode for bypassing a ruleset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BypassMode {
    /// Always allow bypass
    Always,
    /// Allow bypass only via pull request
    #[serde(rename = "pull_request")]
    PullRequest,
}
