//! # Holochain GitHub Configuration Core
//!
//! This crate builds the declarative configuration plan for the Holochain
//! organization's GitHub repositories. It knows three things:
//!
//! 1. **The conventions**: standard repository settings, team grants, and
//!    the `main` default branch.
//! 2. **The policies**: the default branch and release branch protection
//!    rulesets, parameterized per repository by [`RulesetOptions`].
//! 3. **The catalog**: every managed repository and its deviations from the
//!    conventions.
//!
//! The output is a [`ResourceStack`]: an ordered list of resource requests
//! serialized as the plan document an external provisioning engine consumes.
//! Nothing in this crate talks to the network; misconfiguration is surfaced
//! as a fatal [`Error`] while the plan is being built, long before any
//! provisioning call is attempted.
//!
//! ## Examples
//!
//! ```rust
//! use hc_config_core::{plan_organization, MemorySecretSource, OrgSettings};
//!
//! let settings = OrgSettings::default();
//! let secrets = MemorySecretSource::new()
//!     .with_secret("RELEASE_AUTOMATION_TOKEN", "ghs_example");
//!
//! let stack = plan_organization(&settings, &secrets)?;
//! let plan = stack.to_plan_json().expect("plan serializes");
//! assert!(plan.contains("kitsune2"));
//! # Ok::<(), hc_config_core::Error>(())
//! ```

mod catalog;
mod errors;
mod release_integration;
mod ruleset;
mod secrets;
mod settings;
mod stack;
mod standard;

pub use catalog::{managed_repositories, plan_organization, RepositoryEntry};
pub use errors::{ConfigResult, Error};
pub use release_integration::{
    add_release_integration_support, RELEASE_HOTFIX_LABEL, RELEASE_SKIP_LABEL,
};
pub use ruleset::{
    default_branch_ruleset, release_ruleset, RulesetOptions, StatusCheckPolicy,
    BASELINE_CHECK_CONTEXT, RELEASE_BRANCH_PATTERNS,
};
pub use secrets::{EnvSecretSource, MemorySecretSource, SecretSource};
pub use settings::{OrgSettings, TeamGrant};
pub use stack::{Resource, ResourceRequest, ResourceStack};
pub use standard::{
    main_default_branch, migrate_default_branch_to_main, standard_access, standard_repository,
    DEFAULT_BRANCH,
};
