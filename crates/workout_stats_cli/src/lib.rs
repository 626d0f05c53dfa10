//! Report orchestration for `workout-stats`.
//!
//! Both datasets are read on tokio's blocking pool at the same time; the workout log is
//! parsed once and both the workout count and the minute total are taken from that parse.
//! The first failure from either side aborts the run.

use tokio::task::JoinHandle;

use workout_stats::config::Config;
use workout_stats::{StatsResult, Summary, count_health_entries, summarize_workouts};

pub mod error;
pub mod logging;
pub mod render;

pub use error::{CliError, CliResult};

/// Read both datasets described by `config` and merge them into a [`Summary`].
pub async fn process_files(config: &Config) -> CliResult<Summary> {
    let workout_path = config.workout_path.clone();
    let health_path = config.health_path.clone();
    let field = config.minutes_field.clone();

    tracing::info!(
        workouts = %workout_path.display(),
        health = %health_path.display(),
        field = %field,
        "reading workout and health data"
    );

    let workouts = tokio::task::spawn_blocking(move || summarize_workouts(&workout_path, &field));
    let health = tokio::task::spawn_blocking(move || count_health_entries(&health_path));
    let (totals, health_entries) = tokio::try_join!(joined(workouts), joined(health))?;

    tracing::info!(
        workouts = totals.workouts,
        minutes = totals.minutes,
        health_entries,
        "data processed"
    );

    Ok(Summary {
        user: config.user_name.clone(),
        goal: config.weekly_goal,
        workouts: totals.workouts,
        minutes: totals.minutes,
        health_entries,
    })
}

async fn joined<T>(handle: JoinHandle<StatsResult<T>>) -> CliResult<T> {
    Ok(handle.await??)
}
