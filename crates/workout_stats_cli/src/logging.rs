//! Log filter selection for the `workout-stats` binary.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the log filter from `WORKOUT_STATS_LOG_LEVEL`, then `RUST_LOG`, then `warn`.
///
/// Returns the requested directive string alongside the filter; an unparsable directive
/// falls back to the default filter.
pub fn log_filter<F>(mut get: F) -> (String, EnvFilter)
where
    F: FnMut(&str) -> Option<String>,
{
    let requested = get("WORKOUT_STATS_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let filter =
        EnvFilter::try_new(&requested).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    (requested, filter)
}
