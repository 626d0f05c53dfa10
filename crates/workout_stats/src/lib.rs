//! Readers and aggregates for workout CSV logs and health JSON exports.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub mod aggregate;
pub mod config;
pub mod health;
pub mod report;
pub mod workouts;

pub use aggregate::{count, parse_number, sum_field};
pub use health::{HealthEntry, count_health_entries, read_health_json};
pub use report::{GoalStatus, Summary};
pub use workouts::{
    REQUIRED_COLUMNS, WorkoutRecord, WorkoutTotals, count_workouts, read_workout_csv,
    summarize_workouts, total_minutes,
};

/// Which input a failure belongs to, so callers can tell the user which file to fix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    Workout,
    Health,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Workout => f.write_str("Workout"),
            Dataset::Health => f.write_str("Health"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{dataset} data file not found at {}", .path.display())]
    FileNotFound { dataset: Dataset, path: PathBuf },
    #[error("Corrupted CSV at {}: {reason}", .path.display())]
    CorruptedInput { path: PathBuf, reason: String },
    #[error("Invalid JSON in {}: {reason}", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },
    #[error(
        "CSV is missing expected column \"{field}\". Available columns: {}",
        .available.join(", ")
    )]
    MissingColumn { field: String, available: Vec<String> },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(String),
}

impl StatsError {
    /// Map an I/O failure on `path` into `FileNotFound` or `Io`.
    pub(crate) fn from_io(dataset: Dataset, path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StatsError::FileNotFound { dataset, path }
        } else {
            StatsError::Io { path, source: err }
        }
    }
}

pub type StatsResult<T> = Result<T, StatsError>;
