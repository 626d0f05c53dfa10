//! Error types for the report binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Stats(#[from] workout_stats::StatsError),

    #[error("background read failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for report operations.
pub type CliResult<T> = Result<T, CliError>;
