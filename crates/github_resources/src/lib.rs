//! # GitHub Resources
//!
//! Declarative resource descriptions for GitHub repository configuration.
//!
//! This crate defines the data model handed to the external provisioning
//! engine: repositories, default branches, team permission grants, branch
//! protection rulesets, Actions secrets, and issue labels. Every type here
//! describes *desired* state only; the engine owns diffing against actual
//! cloud state, ordering API calls, and retrying transient failures.
//!
//! The serialized shape of these types is the engine's wire contract and must
//! not drift. Field names and enum renames match the engine's repository
//! ruleset schema exactly.
//!
//! ## Examples
//!
//! ```rust
//! use github_resources::{RepositorySpec, RepositoryVisibility};
//!
//! let spec = RepositorySpec::new("kitsune2");
//! assert_eq!(spec.visibility, RepositoryVisibility::Public);
//! ```

mod branch;
mod label;
mod repository;
mod ruleset;
mod secret;
mod team;

pub use branch::DefaultBranchSpec;
pub use label::IssueLabelSpec;
pub use repository::{RepositorySpec, RepositoryVisibility, SquashMergeCommitTitle};
pub use ruleset::{
    BypassActor, BypassActorType, BypassMode, PullRequestRule, RefNameCondition,
    RepositoryRuleset, RequiredStatusChecksRule, RulesetConditions, RulesetEnforcement,
    RulesetRules, RulesetTarget, StatusCheck,
};
pub use secret::ActionsSecretSpec;
pub use team::{TeamAccessSpec, TeamPermission};
