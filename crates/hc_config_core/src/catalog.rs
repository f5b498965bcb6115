//! The organization catalog.
//!
//! One entry per managed repository, carrying its deviations from the
//! standard settings and its ruleset and release-integration attachments.
//! [`plan_organization`] walks the catalog and registers every resource in
//! provisioning order: repository, default branch, team access, rulesets,
//! then release integration.

use github_resources::{RepositorySpec, SquashMergeCommitTitle, StatusCheck};
use tracing::info;

use crate::errors::ConfigResult;
use crate::release_integration::add_release_integration_support;
use crate::ruleset::{default_branch_ruleset, release_ruleset, RulesetOptions};
use crate::secrets::SecretSource;
use crate::settings::OrgSettings;
use crate::stack::{Resource, ResourceStack};
use crate::standard::{
    main_default_branch, migrate_default_branch_to_main, standard_access, standard_repository,
};

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

/// A managed repository and its attachments.
#[derive(Clone, Debug, PartialEq)]
pub struct RepositoryEntry {
    /// Desired repository settings
    pub spec: RepositorySpec,

    /// Whether the current default branch must be renamed to `main` instead
    /// of merely selected
    pub migrate_default_branch: bool,

    /// Options for the default branch ruleset, if one is attached
    pub default_ruleset: Option<RulesetOptions>,

    /// Options for the release ruleset, if one is attached
    pub release_ruleset: Option<RulesetOptions>,

    /// Whether the repository participates in automated releases
    pub release_integration: bool,
}

impl RepositoryEntry {
    fn standard(name: &str, description: Option<&str>) -> Self {
        Self {
            spec: standard_repository(name, description),
            migrate_default_branch: false,
            default_ruleset: None,
            release_ruleset: None,
            release_integration: false,
        }
    }
}

/// Builds the catalog of managed repositories.
///
/// # Errors
///
/// Returns [`crate::Error::ConflictingStatusCheckPolicy`] if an entry's
/// ruleset options are contradictory; the program aborts before any plan is
/// produced.
pub fn managed_repositories() -> ConfigResult<Vec<RepositoryEntry>> {
    let mut entries = Vec::new();

    // This repository: the configuration program itself. Rebase merges only,
    // so upstream changes apply cleanly.
    let mut this_repo = RepositoryEntry::standard(
        "hc-github-config",
        Some("Automation for GitHub repository configurations for the Holochain organization."),
    );
    this_repo.spec.allow_squash_merge = false;
    this_repo.default_ruleset = Some(RulesetOptions::new());
    entries.push(this_repo);

    entries.push(RepositoryEntry::standard("holochain-wasmer", None));

    let mut wind_tunnel = RepositoryEntry::standard(
        "wind-tunnel",
        Some("Performance testing for Holochain"),
    );
    wind_tunnel.spec.allow_auto_merge = false;
    wind_tunnel.default_ruleset = Some(
        RulesetOptions::new()
            .with_extra_status_checks([StatusCheck::new("performance_tests_pass")])?,
    );
    entries.push(wind_tunnel);

    entries.push(RepositoryEntry::standard(
        "holochain-client-js",
        Some("A JavaScript client for the Holochain Conductor API"),
    ));

    entries.push(RepositoryEntry::standard(
        "holochain-client-rust",
        Some("A Rust client for the Holochain Conductor API"),
    ));

    entries.push(RepositoryEntry::standard(
        "tryorama",
        Some("Toolset to manage Holochain conductors and facilitate test scenarios"),
    ));

    entries.push(RepositoryEntry::standard(
        "holonix",
        Some("Holochain app development environment based on Nix."),
    ));

    // Release artifacts land here as generated commits; reviews would only
    // slow the pipeline down.
    let mut binaries = RepositoryEntry::standard(
        "binaries",
        Some("Holochain binaries for supported platforms"),
    );
    binaries.default_ruleset = Some(RulesetOptions::new().no_reviews_required());
    entries.push(binaries);

    entries.push(RepositoryEntry::standard(
        "sbd",
        Some("Simple websocket-based message relay servers and clients"),
    ));

    let mut tx5 = RepositoryEntry::standard(
        "tx5",
        Some("Holochain WebRTC P2P Communication Ecosystem"),
    );
    tx5.spec.squash_merge_commit_title = Some(SquashMergeCommitTitle::PrTitle);
    tx5.default_ruleset = Some(RulesetOptions::new());
    tx5.release_ruleset = Some(RulesetOptions::new());
    tx5.release_integration = true;
    entries.push(tx5);

    let mut lair = RepositoryEntry::standard("lair", Some("secret lair private keystore"));
    lair.spec.allow_rebase_merge = false;
    lair.spec.squash_merge_commit_title = Some(SquashMergeCommitTitle::PrTitle);
    lair.default_ruleset = Some(RulesetOptions::new());
    lair.release_ruleset = Some(RulesetOptions::new().no_linear_history_required());
    lair.release_integration = true;
    entries.push(lair);

    entries.push(RepositoryEntry::standard(
        "hc-chc-service",
        Some("A local web server that implements the CHC (Chain Head Coordinator) interface in Rust"),
    ));

    let mut serialization = RepositoryEntry::standard(
        "holochain-serialization",
        Some("Abstractions to probably serialize and deserialize things properly without forgetting or doubling"),
    );
    serialization.migrate_default_branch = true;
    entries.push(serialization);

    entries.push(RepositoryEntry::standard(
        "influxive",
        Some("Opinionated tools for working with InfluxDB from Rust"),
    ));

    let mut python_client = RepositoryEntry::standard(
        "holochain-client-python",
        Some("A Python client for the Holochain Conductor API "),
    );
    python_client.spec.topics = vec![
        "python".to_string(),
        "python3".to_string(),
        "holochain".to_string(),
        "conductor-api".to_string(),
    ];
    entries.push(python_client);

    entries.push(RepositoryEntry::standard(
        "holochain-serialization-python",
        None,
    ));

    entries.push(RepositoryEntry::standard("nix-cache-check", None));

    let mut kitsune2 = RepositoryEntry::standard(
        "kitsune2",
        Some("p2p / dht communication framework"),
    );
    kitsune2.default_ruleset = Some(RulesetOptions::new());
    kitsune2.release_ruleset = Some(RulesetOptions::new());
    kitsune2.release_integration = true;
    entries.push(kitsune2);

    Ok(entries)
}

/// Builds the full organization plan.
///
/// Every repository is registered as an import (the repositories already
/// exist; the engine adopts them) followed by its default branch, team
/// grants, rulesets, and release integration resources.
///
/// # Errors
///
/// Propagates the first configuration error encountered; a partial plan is
/// never returned.
pub fn plan_organization(
    settings: &OrgSettings,
    secrets: &dyn SecretSource,
) -> ConfigResult<ResourceStack> {
    let entries = managed_repositories()?;

    info!(
        organization = settings.organization.as_str(),
        repositories = entries.len(),
        "Building organization plan"
    );

    let mut stack = ResourceStack::new();

    for entry in entries {
        configure_repository(&mut stack, &entry, settings, secrets)?;
    }

    info!(resources = stack.len(), "Organization plan complete");

    Ok(stack)
}

fn configure_repository(
    stack: &mut ResourceStack,
    entry: &RepositoryEntry,
    settings: &OrgSettings,
    secrets: &dyn SecretSource,
) -> ConfigResult<()> {
    let name = entry.spec.name.clone();

    stack.register_imported(&name, &name, Resource::Repository(entry.spec.clone()))?;

    if entry.migrate_default_branch {
        stack.register(
            format!("{name}-default-branch-migrate"),
            Resource::DefaultBranch(migrate_default_branch_to_main(&name)),
        )?;
    } else {
        stack.register(
            format!("{name}-default-branch"),
            Resource::DefaultBranch(main_default_branch(&name)),
        )?;
    }

    for grant in standard_access(&name, &settings.team_grants) {
        stack.register(
            format!("{name}-collaborator-{}", grant.team),
            Resource::TeamAccess(grant),
        )?;
    }

    if let Some(options) = &entry.default_ruleset {
        stack.register(
            format!("{name}-ruleset-default"),
            Resource::Ruleset(default_branch_ruleset(&name, options)),
        )?;
    }

    if let Some(options) = &entry.release_ruleset {
        stack.register(
            format!("{name}-ruleset-release"),
            Resource::Ruleset(release_ruleset(&name, options)),
        )?;
    }

    if entry.release_integration {
        add_release_integration_support(stack, &name, &settings.release_token_secret, secrets)?;
    }

    Ok(())
}
