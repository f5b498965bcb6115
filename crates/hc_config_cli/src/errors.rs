//! CLI error types.

use thiserror::Error;

/// Errors surfaced to the command line user.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    SettingsRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The plan document could not be written.
    #[error("Failed to write plan to {path}: {source}")]
    PlanWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Plan construction failed.
    #[error(transparent)]
    Config(#[from] hc_config_core::Error),

    /// The plan document could not be serialized.
    #[error("Failed to serialize plan: {0}")]
    PlanSerialization(#[from] serde_json::Error),
}
