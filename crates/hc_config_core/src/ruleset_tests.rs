//! Tests for the ruleset policy builder.

use super::*;

fn check_contexts(ruleset: &RepositoryRuleset) -> Vec<String> {
    ruleset
        .rules
        .required_status_checks
        .as_ref()
        .expect("Expected required status checks")
        .required_checks
        .iter()
        .map(|check| check.context.clone())
        .collect()
}

// ============================================================================
// Status Check Composition Tests
// ============================================================================

/// With default options, both rulesets require exactly the baseline check.
#[test]
fn test_default_options_require_only_baseline_check() {
    let options = RulesetOptions::new();

    for ruleset in [
        default_branch_ruleset("kitsune2", &options),
        release_ruleset("kitsune2", &options),
    ] {
        assert_eq!(check_contexts(&ruleset), vec![BASELINE_CHECK_CONTEXT]);
    }
}

/// Extra checks are appended after the baseline check, order preserved.
#[test]
fn test_extra_checks_preserve_order_after_baseline() {
    let options = RulesetOptions::new()
        .with_extra_status_checks([
            StatusCheck::new("performance_tests_pass"),
            StatusCheck::new("release").from_integration(1234),
        ])
        .expect("Extras on fresh options must compose");

    let ruleset = default_branch_ruleset("wind-tunnel", &options);
    let checks = &ruleset
        .rules
        .required_status_checks
        .as_ref()
        .unwrap()
        .required_checks;

    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0].context, BASELINE_CHECK_CONTEXT);
    assert_eq!(checks[1].context, "performance_tests_pass");
    assert_eq!(checks[2].context, "release");
    assert_eq!(checks[2].integration_id, Some(1234));
}

/// Repeated extra-check calls append in order.
#[test]
fn test_extra_checks_accumulate_across_calls() {
    let options = RulesetOptions::new()
        .with_extra_status_checks([StatusCheck::new("first")])
        .unwrap()
        .with_extra_status_checks([StatusCheck::new("second")])
        .unwrap();

    let contexts = check_contexts(&default_branch_ruleset("tx5", &options));
    assert_eq!(contexts, vec![BASELINE_CHECK_CONTEXT, "first", "second"]);
}

/// Disabling checks removes the status check rule entirely.
#[test]
fn test_no_status_checks_omits_rule() {
    let options = RulesetOptions::new()
        .no_status_checks()
        .expect("Disabling on fresh options must compose");

    let ruleset = default_branch_ruleset("binaries", &options);
    assert!(ruleset.rules.required_status_checks.is_none());

    let ruleset = release_ruleset("binaries", &options);
    assert!(ruleset.rules.required_status_checks.is_none());
}

// ============================================================================
// Conflict Tests
// ============================================================================

/// Extra checks after disabling checks is a configuration conflict.
#[test]
fn test_extra_checks_after_disable_conflicts() {
    let result = RulesetOptions::new()
        .no_status_checks()
        .unwrap()
        .with_extra_status_checks([StatusCheck::new("release")]);

    assert!(matches!(
        result,
        Err(Error::ConflictingStatusCheckPolicy { .. })
    ));
}

/// Disabling checks after adding extras is a configuration conflict.
#[test]
fn test_disable_after_extra_checks_conflicts() {
    let result = RulesetOptions::new()
        .with_extra_status_checks([StatusCheck::new("release")])
        .unwrap()
        .no_status_checks();

    assert!(matches!(
        result,
        Err(Error::ConflictingStatusCheckPolicy { .. })
    ));
}

/// Disabling twice stays disabled rather than erroring.
#[test]
fn test_disable_is_idempotent() {
    let options = RulesetOptions::new()
        .no_status_checks()
        .unwrap()
        .no_status_checks()
        .unwrap();

    assert_eq!(options.status_checks(), &StatusCheckPolicy::Disabled);
}

// ============================================================================
// Linear History Tests
// ============================================================================

/// Linear history is required by default on both rulesets.
#[test]
fn test_linear_history_required_by_default() {
    let options = RulesetOptions::new();

    assert!(
        default_branch_ruleset("kitsune2", &options)
            .rules
            .required_linear_history
    );
    assert!(
        release_ruleset("kitsune2", &options)
            .rules
            .required_linear_history
    );
}

/// The override drops the requirement on both rulesets.
#[test]
fn test_no_linear_history_override() {
    let options = RulesetOptions::new().no_linear_history_required();

    assert!(
        !default_branch_ruleset("lair", &options)
            .rules
            .required_linear_history
    );
    assert!(
        !release_ruleset("lair", &options)
            .rules
            .required_linear_history
    );
}

/// Builder methods return adjusted copies; the original value is unaffected.
#[test]
fn test_options_are_copy_on_write() {
    let base = RulesetOptions::new();
    let adjusted = base.clone().no_linear_history_required();

    assert_ne!(base, adjusted);
    assert!(default_branch_ruleset("sbd", &base).rules.required_linear_history);
}

// ============================================================================
// Default Branch Ruleset Tests
// ============================================================================

/// Spec of the standard default branch protection, checked field by field.
#[test]
fn test_default_branch_ruleset_shape() {
    let ruleset = default_branch_ruleset("kitsune2", &RulesetOptions::new());

    assert_eq!(ruleset.name, "default");
    assert_eq!(ruleset.repository, "kitsune2");
    assert_eq!(ruleset.target, RulesetTarget::Branch);
    assert_eq!(ruleset.enforcement, RulesetEnforcement::Active);
    assert_eq!(
        ruleset.conditions.ref_name.includes,
        vec!["~DEFAULT_BRANCH"]
    );
    assert!(ruleset.conditions.ref_name.excludes.is_empty());

    assert!(ruleset.rules.creation);
    assert!(!ruleset.rules.update);
    assert!(ruleset.rules.deletion);
    assert!(ruleset.rules.required_linear_history);
    assert!(!ruleset.rules.required_signatures);

    let pr = ruleset.rules.pull_request.as_ref().expect("PR rule");
    assert!(pr.dismiss_stale_reviews_on_push);
    assert!(!pr.require_code_owner_review);
    assert!(pr.require_last_push_approval);
    assert_eq!(pr.required_approving_review_count, 1);
    assert!(pr.required_review_thread_resolution);

    let checks = ruleset.rules.required_status_checks.as_ref().unwrap();
    assert!(checks.strict_required_status_checks_policy);
    assert_eq!(checks.do_not_enforce_on_create, None);

    // Default branch protections are not bypassable
    assert!(ruleset.bypass_actors.is_empty());
}

/// Review-exempt repositories get a zero review count on the default branch.
#[test]
fn test_no_reviews_required_override() {
    let options = RulesetOptions::new().no_reviews_required();
    let ruleset = default_branch_ruleset("binaries", &options);

    let pr = ruleset.rules.pull_request.as_ref().unwrap();
    assert_eq!(pr.required_approving_review_count, 0);
}

// ============================================================================
// Release Ruleset Tests
// ============================================================================

/// Spec of the release branch protection, checked field by field.
#[test]
fn test_release_ruleset_shape() {
    let ruleset = release_ruleset("lair", &RulesetOptions::new().no_linear_history_required());

    assert_eq!(ruleset.name, "release");
    assert_eq!(ruleset.repository, "lair");
    assert_eq!(ruleset.enforcement, RulesetEnforcement::Active);
    assert!(ruleset
        .conditions
        .ref_name
        .includes
        .contains(&"refs/heads/release/*".to_string()));
    assert_eq!(
        ruleset.conditions.ref_name.includes,
        RELEASE_BRANCH_PATTERNS
    );

    assert!(!ruleset.rules.required_linear_history);

    // Release branches accept expedited merges
    let pr = ruleset.rules.pull_request.as_ref().expect("PR rule");
    assert_eq!(pr.required_approving_review_count, 0);

    // Newly cut release branches are not retroactively blocked
    let checks = ruleset.rules.required_status_checks.as_ref().unwrap();
    assert_eq!(checks.do_not_enforce_on_create, Some(true));

    // Repository admins can bypass for hotfixes
    assert_eq!(
        ruleset.bypass_actors,
        vec![github_resources::BypassActor::repository_admin()]
    );
}

/// The release ruleset review count is zero regardless of options.
#[test]
fn test_release_review_count_always_zero() {
    for options in [
        RulesetOptions::new(),
        RulesetOptions::new().no_reviews_required(),
        RulesetOptions::new().no_linear_history_required(),
    ] {
        let ruleset = release_ruleset("tx5", &options);
        let pr = ruleset.rules.pull_request.as_ref().unwrap();
        assert_eq!(pr.required_approving_review_count, 0);
    }
}

/// Builders are deterministic for equal inputs.
#[test]
fn test_builders_are_deterministic() {
    let options = RulesetOptions::new()
        .with_extra_status_checks([StatusCheck::new("release")])
        .unwrap();

    assert_eq!(
        default_branch_ruleset("tx5", &options),
        default_branch_ruleset("tx5", &options)
    );
    assert_eq!(
        release_ruleset("tx5", &options),
        release_ruleset("tx5", &options)
    );
}
