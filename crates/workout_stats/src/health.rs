use std::path::Path;

use serde_json::Value;

use crate::{Dataset, StatsError, StatsResult, aggregate};

/// One element of a health export. The shape is left to the producer.
pub type HealthEntry = Value;

/// Read the health export at `path`, which must hold a JSON array.
pub fn read_health_json(path: impl AsRef<Path>) -> StatsResult<Vec<HealthEntry>> {
    let path = path.as_ref();
    let raw = std::fs::read(path)
        .map_err(|e| StatsError::from_io(Dataset::Health, path.to_path_buf(), e))?;
    let parsed: Value = serde_json::from_slice(&raw).map_err(|e| StatsError::InvalidFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let Value::Array(entries) = parsed else {
        return Err(StatsError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "expected an array of entries".into(),
        });
    };
    tracing::debug!(path = %path.display(), entries = entries.len(), "read health export");
    Ok(entries)
}

/// Number of entries in the health export at `path`.
pub fn count_health_entries(path: impl AsRef<Path>) -> StatsResult<usize> {
    let entries = read_health_json(path)?;
    Ok(aggregate::count(&entries))
}
