//! Ruleset policy builder.
//!
//! This module turns a repository name and a [`RulesetOptions`] value into
//! the branch protection policies attached to the organization's
//! repositories:
//!
//! - the **default** ruleset, protecting the repository's default branch, and
//! - the **release** ruleset, protecting the release, versioned-main and
//!   develop branch families.
//!
//! Both are pure functions: no I/O, no side effects, deterministic output.
//! Every repository defines a single CI job that reports whether all of its
//! required checks passed; that baseline check is required everywhere unless
//! a repository explicitly opts out of status checks.

use github_resources::{
    BypassActor, PullRequestRule, RepositoryRuleset, RequiredStatusChecksRule, RulesetConditions,
    RulesetEnforcement, RulesetRules, RulesetTarget, StatusCheck,
};

use crate::errors::{ConfigResult, Error};

#[cfg(test)]
#[path = "ruleset_tests.rs"]
mod tests;

/// Context name of the baseline check every repository must report.
pub const BASELINE_CHECK_CONTEXT: &str = "ci_pass";

/// Ref-name globs covered by the release ruleset.
///
/// Versioned maintenance branches (`main-0.3`, `develop-0.2`, `release-0.1`)
/// and the integration branch. Plain `main` stays under the default ruleset.
pub const RELEASE_BRANCH_PATTERNS: [&str; 5] = [
    "refs/heads/release/*",
    "refs/heads/release-*",
    "refs/heads/main-*",
    "refs/heads/develop-*",
    "refs/heads/develop",
];

/// Status check policy for a ruleset.
///
/// The three states are mutually exclusive by construction: a ruleset either
/// requires the baseline check, the baseline check plus repository-specific
/// extras, or no checks at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusCheckPolicy {
    /// Require only the baseline check
    #[default]
    Baseline,

    /// Require the baseline check followed by these extras, in order
    Extended(Vec<StatusCheck>),

    /// Require no status checks
    Disabled,
}

impl StatusCheckPolicy {
    /// The full check list for this policy, or `None` when checks are
    /// disabled. The baseline check always comes first.
    pub fn required_checks(&self) -> Option<Vec<StatusCheck>> {
        match self {
            StatusCheckPolicy::Baseline => Some(vec![StatusCheck::new(BASELINE_CHECK_CONTEXT)]),
            StatusCheckPolicy::Extended(extras) => {
                let mut checks = Vec::with_capacity(extras.len() + 1);
                checks.push(StatusCheck::new(BASELINE_CHECK_CONTEXT));
                checks.extend(extras.iter().cloned());
                Some(checks)
            }
            StatusCheckPolicy::Disabled => None,
        }
    }
}

/// Per-repository overrides for the generated rulesets.
///
/// One value is built per repository, threaded through the ruleset builders,
/// and discarded. Builder methods consume the value and return an adjusted
/// copy, so a shared options value can never be mutated behind a caller's
/// back.
///
/// # Examples
///
/// ```rust
/// use hc_config_core::{default_branch_ruleset, RulesetOptions};
///
/// let options = RulesetOptions::new().no_linear_history_required();
/// let ruleset = default_branch_ruleset("lair", &options);
/// assert!(!ruleset.rules.required_linear_history);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulesetOptions {
    status_checks: StatusCheckPolicy,
    no_linear_history: bool,
    no_reviews_required: bool,
}

impl RulesetOptions {
    /// Options producing the organization's standard rulesets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires additional status checks after the baseline check.
    ///
    /// May be called more than once; later extras are appended in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingStatusCheckPolicy`] if status checks were
    /// already disabled on this options value.
    pub fn with_extra_status_checks<I>(self, checks: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = StatusCheck>,
    {
        let status_checks = match self.status_checks {
            StatusCheckPolicy::Baseline => {
                StatusCheckPolicy::Extended(checks.into_iter().collect())
            }
            StatusCheckPolicy::Extended(mut extras) => {
                extras.extend(checks);
                StatusCheckPolicy::Extended(extras)
            }
            StatusCheckPolicy::Disabled => {
                return Err(Error::ConflictingStatusCheckPolicy {
                    reason: "cannot add extra status checks, checks are disabled".to_string(),
                })
            }
        };
        Ok(Self {
            status_checks,
            ..self
        })
    }

    /// Disables required status checks entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingStatusCheckPolicy`] if extra status checks
    /// were already requested on this options value.
    pub fn no_status_checks(self) -> ConfigResult<Self> {
        match self.status_checks {
            StatusCheckPolicy::Extended(_) => Err(Error::ConflictingStatusCheckPolicy {
                reason: "cannot disable status checks, extra checks are configured".to_string(),
            }),
            StatusCheckPolicy::Baseline | StatusCheckPolicy::Disabled => Ok(Self {
                status_checks: StatusCheckPolicy::Disabled,
                ..self
            }),
        }
    }

    /// Drops the linear history requirement from the generated rulesets.
    pub fn no_linear_history_required(self) -> Self {
        Self {
            no_linear_history: true,
            ..self
        }
    }

    /// Drops the approving review requirement from the default ruleset.
    ///
    /// Used by repositories whose default branch only receives generated
    /// commits. The release ruleset never requires reviews.
    pub fn no_reviews_required(self) -> Self {
        Self {
            no_reviews_required: true,
            ..self
        }
    }

    /// The status check policy carried by this options value.
    pub fn status_checks(&self) -> &StatusCheckPolicy {
        &self.status_checks
    }

    fn required_linear_history(&self) -> bool {
        !self.no_linear_history
    }

    fn default_branch_review_count(&self) -> u32 {
        if self.no_reviews_required {
            0
        } else {
            1
        }
    }
}

/// Builds the ruleset protecting the repository's default branch.
///
/// Changes reach the default branch through reviewed pull requests: direct
/// updates are off, one approving review is required (unless the options say
/// otherwise), stale reviews are dismissed on push, the last push needs an
/// approval, and review threads must be resolved. The branch itself may be
/// created and deleted. No bypass actors; misconfiguration on the default
/// branch should be fixed, not bypassed.
pub fn default_branch_ruleset(repository: &str, options: &RulesetOptions) -> RepositoryRuleset {
    RepositoryRuleset {
        name: "default".to_string(),
        repository: repository.to_string(),
        target: RulesetTarget::Branch,
        enforcement: RulesetEnforcement::Active,
        conditions: RulesetConditions::default_branch(),
        rules: RulesetRules {
            creation: true,
            update: false,
            deletion: true,
            required_linear_history: options.required_linear_history(),
            required_signatures: false,
            pull_request: Some(PullRequestRule {
                dismiss_stale_reviews_on_push: true,
                require_code_owner_review: false,
                require_last_push_approval: true,
                required_approving_review_count: options.default_branch_review_count(),
                required_review_thread_resolution: true,
            }),
            required_status_checks: required_status_checks(options, false),
        },
        bypass_actors: vec![],
    }
}

/// Builds the ruleset protecting the release branch families.
///
/// Targets the globs in [`RELEASE_BRANCH_PATTERNS`]. Review count is zero so
/// release branches accept expedited merges, checks are not enforced when a
/// release branch is first cut, and repository admins can bypass the ruleset
/// for hotfixes.
pub fn release_ruleset(repository: &str, options: &RulesetOptions) -> RepositoryRuleset {
    RepositoryRuleset {
        name: "release".to_string(),
        repository: repository.to_string(),
        target: RulesetTarget::Branch,
        enforcement: RulesetEnforcement::Active,
        conditions: RulesetConditions::ref_patterns(RELEASE_BRANCH_PATTERNS),
        rules: RulesetRules {
            creation: true,
            update: false,
            deletion: true,
            required_linear_history: options.required_linear_history(),
            required_signatures: false,
            pull_request: Some(PullRequestRule {
                dismiss_stale_reviews_on_push: true,
                require_code_owner_review: false,
                require_last_push_approval: true,
                required_approving_review_count: 0,
                required_review_thread_resolution: true,
            }),
            required_status_checks: required_status_checks(options, true),
        },
        bypass_actors: vec![BypassActor::repository_admin()],
    }
}

fn required_status_checks(
    options: &RulesetOptions,
    skip_on_create: bool,
) -> Option<RequiredStatusChecksRule> {
    options
        .status_checks
        .required_checks()
        .map(|required_checks| RequiredStatusChecksRule {
            required_checks,
            strict_required_status_checks_policy: true,
            do_not_enforce_on_create: skip_on_create.then_some(true),
        })
}
