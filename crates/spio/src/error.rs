use std::time::Duration;

/// Failures of the generation pipeline and the sync command.
#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("AI API error: {0}")]
    Model(String),

    #[error("AI returned empty code")]
    EmptyOutput,

    #[error("Failed to write to vault: {0}")]
    Persistence(String),

    #[error("Failed to run sync command: {0}")]
    SyncSpawn(String),

    #[error("Sync command timed out after {0:?}")]
    SyncTimeout(Duration),

    #[error("Request task failed: {0}")]
    Task(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
