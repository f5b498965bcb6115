//! Tests for the organization catalog.

use super::*;
use crate::secrets::MemorySecretSource;
use crate::settings::TeamGrant;

fn secrets() -> MemorySecretSource {
    MemorySecretSource::new().with_secret("RELEASE_AUTOMATION_TOKEN", "ghs_value")
}

fn plan() -> ResourceStack {
    plan_organization(&OrgSettings::default(), &secrets()).expect("plan builds")
}

/// Every catalog entry is registered, repositories adopted by import.
#[test]
fn test_every_repository_planned() {
    let entries = managed_repositories().expect("catalog builds");
    let stack = plan();

    let repositories: Vec<&str> = stack
        .resources()
        .iter()
        .filter_map(|request| match &request.resource {
            Resource::Repository(spec) => Some(spec.name.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(repositories.len(), entries.len());
    assert!(repositories.contains(&"hc-github-config"));
    assert!(repositories.contains(&"kitsune2"));
    assert!(repositories.contains(&"holochain-serialization-python"));

    for request in stack.resources() {
        if let Resource::Repository(spec) = &request.resource {
            assert_eq!(request.import_id.as_deref(), Some(spec.name.as_str()));
        }
    }
}

/// Per-repository resources come in provisioning order.
#[test]
fn test_per_repository_resource_order() {
    let stack = plan();

    let kitsune2: Vec<(&str, &str)> = stack
        .resources()
        .iter()
        .filter(|request| request.logical_name.starts_with("kitsune2"))
        .map(|request| (request.logical_name.as_str(), request.resource.kind()))
        .collect();

    assert_eq!(
        kitsune2,
        vec![
            ("kitsune2", "repository"),
            ("kitsune2-default-branch", "default_branch"),
            ("kitsune2-collaborator-core-dev", "team_access"),
            ("kitsune2-collaborator-holochain-devs", "team_access"),
            ("kitsune2-ruleset-default", "ruleset"),
            ("kitsune2-ruleset-release", "ruleset"),
            ("kitsune2-release-token", "actions_secret"),
            ("kitsune2-label-release-skip", "issue_label"),
            ("kitsune2-label-release-hotfix", "issue_label"),
        ]
    );
}

/// Catalog deviations from the standard settings hold.
#[test]
fn test_catalog_deviations() {
    let entries = managed_repositories().expect("catalog builds");
    let by_name = |name: &str| {
        entries
            .iter()
            .find(|entry| entry.spec.name == name)
            .unwrap_or_else(|| panic!("missing entry {name}"))
    };

    // lair merges by squash only, titled from the PR
    let lair = by_name("lair");
    assert!(!lair.spec.allow_rebase_merge);
    assert_eq!(
        lair.spec.squash_merge_commit_title,
        Some(github_resources::SquashMergeCommitTitle::PrTitle)
    );
    assert!(lair.release_integration);

    // wind-tunnel queues no auto-merges and requires its perf check
    let wind_tunnel = by_name("wind-tunnel");
    assert!(!wind_tunnel.spec.allow_auto_merge);
    assert!(wind_tunnel.default_ruleset.is_some());

    // the config repo itself merges by rebase only
    let this_repo = by_name("hc-github-config");
    assert!(!this_repo.spec.allow_squash_merge);
    assert!(this_repo.spec.allow_rebase_merge);

    // python client carries its topics
    let python = by_name("holochain-client-python");
    assert_eq!(python.spec.topics.len(), 4);

    // serialization still needs its default branch renamed
    assert!(by_name("holochain-serialization").migrate_default_branch);
}

/// The default ruleset never carries bypass actors, the release ruleset
/// always carries the repository admin.
#[test]
fn test_bypass_asymmetry_in_plan() {
    let stack = plan();

    for request in stack.resources() {
        if let Resource::Ruleset(ruleset) = &request.resource {
            match ruleset.name.as_str() {
                "default" => assert!(
                    ruleset.bypass_actors.is_empty(),
                    "default ruleset on {} must not be bypassable",
                    ruleset.repository
                ),
                "release" => assert_eq!(
                    ruleset.bypass_actors,
                    vec![github_resources::BypassActor::repository_admin()],
                    "release ruleset on {} grants admin bypass",
                    ruleset.repository
                ),
                other => panic!("unexpected ruleset name {other}"),
            }
        }
    }
}

/// A missing release token fails the whole plan.
#[test]
fn test_missing_release_token_fails_plan() {
    let err = plan_organization(&OrgSettings::default(), &MemorySecretSource::new()).unwrap_err();
    assert!(matches!(err, crate::Error::MissingSecret { .. }));
}

/// Custom team grants flow into every repository's access resources.
#[test]
fn test_custom_team_grants() {
    let mut settings = OrgSettings::default();
    settings.team_grants = vec![TeamGrant {
        team: "bots".to_string(),
        permission: github_resources::TeamPermission::Push,
    }];

    let stack = plan_organization(&settings, &secrets()).expect("plan builds");

    let grants: Vec<&github_resources::TeamAccessSpec> = stack
        .resources()
        .iter()
        .filter_map(|request| match &request.resource {
            Resource::TeamAccess(grant) => Some(grant),
            _ => None,
        })
        .collect();

    assert!(!grants.is_empty());
    assert!(grants.iter().all(|grant| grant.team == "bots"));
}
