//! Release integration support.
//!
//! Repositories that participate in automated releases need two things on
//! top of the standard configuration: the release automation credential as
//! an Actions secret, and the labels the release workflows use to
//! coordinate.

use github_resources::{ActionsSecretSpec, IssueLabelSpec};
use tracing::debug;

use crate::errors::ConfigResult;
use crate::secrets::SecretSource;
use crate::stack::{Resource, ResourceStack};

#[cfg(test)]
#[path = "release_integration_tests.rs"]
mod tests;

/// Label that excludes a pull request from release notes.
pub const RELEASE_SKIP_LABEL: &str = "release/skip";

/// Label that marks a pull request as a hotfix for an existing release.
pub const RELEASE_HOTFIX_LABEL: &str = "release/hotfix";

/// Registers the release automation resources for one repository.
///
/// Resolves the release token from the secret source and registers it as an
/// Actions secret, then registers the release coordination labels.
///
/// # Errors
///
/// Returns [`crate::Error::MissingSecret`] when the secret source cannot
/// supply the token, and [`crate::Error::DuplicateResourceName`] when the
/// repository was already given release support.
pub fn add_release_integration_support(
    stack: &mut ResourceStack,
    repository: &str,
    token_secret_name: &str,
    secrets: &dyn SecretSource,
) -> ConfigResult<()> {
    let token = secrets.resolve(token_secret_name)?;

    stack.register(
        format!("{repository}-release-token"),
        Resource::ActionsSecret(ActionsSecretSpec::new(repository, token_secret_name, token)),
    )?;

    stack.register(
        format!("{repository}-label-release-skip"),
        Resource::IssueLabel(IssueLabelSpec {
            repository: repository.to_string(),
            name: RELEASE_SKIP_LABEL.to_string(),
            color: "ededed".to_string(),
            description: Some("Exclude this change from release notes".to_string()),
        }),
    )?;

    stack.register(
        format!("{repository}-label-release-hotfix"),
        Resource::IssueLabel(IssueLabelSpec {
            repository: repository.to_string(),
            name: RELEASE_HOTFIX_LABEL.to_string(),
            color: "d93f0b".to_string(),
            description: Some("Targets an existing release branch".to_string()),
        }),
    )?;

    debug!(
        repository = repository,
        "Added release integration support"
    );

    Ok(())
}
