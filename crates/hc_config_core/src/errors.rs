//! Configuration error types.
//!
//! Every error here is a build-time configuration defect. The program fails
//! fast during plan construction rather than handing the provisioning engine
//! an inconsistent plan; nothing is retried or swallowed.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while assembling the organization plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Contradictory status check options were combined on one ruleset.
    ///
    /// Extra status checks and "no status checks" are mutually exclusive;
    /// requesting both on the same options value is a contract violation.
    #[error("Conflicting status check policy: {reason}")]
    ConflictingStatusCheckPolicy { reason: String },

    /// Two resources were registered under the same logical name.
    ///
    /// Logical names identify resources across program runs; the engine
    /// requires them to be unique within a stack.
    #[error("Duplicate resource name: {logical_name}")]
    DuplicateResourceName { logical_name: String },

    /// A named credential could not be supplied by the secret source.
    #[error("Missing secret '{name}': {reason}")]
    MissingSecret { name: String, reason: String },

    /// The organization settings file could not be parsed.
    #[error("Invalid organization settings: {reason}")]
    InvalidSettings { reason: String },
}

/// Result type alias for plan construction.
pub type ConfigResult<T> = Result<T, Error>;
