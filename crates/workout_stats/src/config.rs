use std::path::PathBuf;

use crate::{StatsError, aggregate};

pub const DEFAULT_WORKOUT_PATH: &str = "./data/workouts.csv";
pub const DEFAULT_HEALTH_PATH: &str = "./data/health.json";
pub const DEFAULT_MINUTES_FIELD: &str = "minutes";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub user_name: String,
    /// Weekly goal in minutes; zero or less disables the goal check.
    pub weekly_goal: f64,
    pub workout_path: PathBuf,
    pub health_path: PathBuf,
    pub minutes_field: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: "User".into(),
            weekly_goal: 0.0,
            workout_path: PathBuf::from(DEFAULT_WORKOUT_PATH),
            health_path: PathBuf::from(DEFAULT_HEALTH_PATH),
            minutes_field: DEFAULT_MINUTES_FIELD.into(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, StatsError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, StatsError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |v: String| (!v.trim().is_empty()).then_some(v);

        let user_name = get("USER_NAME")
            .and_then(non_empty)
            .unwrap_or(defaults.user_name);
        // an unparsable goal means "no goal", not a startup failure
        let weekly_goal = get("WEEKLY_GOAL")
            .as_deref()
            .and_then(aggregate::parse_number)
            .unwrap_or(0.0);
        let workout_path = get("WORKOUT_STATS_WORKOUT_PATH")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or(defaults.workout_path);
        let health_path = get("WORKOUT_STATS_HEALTH_PATH")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or(defaults.health_path);
        let minutes_field = get("WORKOUT_STATS_MINUTES_FIELD")
            .and_then(non_empty)
            .unwrap_or(defaults.minutes_field);
        let format = match get("WORKOUT_STATS_FORMAT").as_deref().map(str::trim) {
            None | Some("") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(other) => {
                return Err(StatsError::Config(format!(
                    "WORKOUT_STATS_FORMAT must be `text` or `json`, got `{other}`"
                )));
            }
        };

        Ok(Self {
            user_name,
            weekly_goal,
            workout_path,
            health_path,
            minutes_field,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_uses_defaults_when_unset() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.user_name, "User");
        assert_eq!(cfg.minutes_field, "minutes");
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "USER_NAME" => Some("Alice".into()),
            "WEEKLY_GOAL" => Some("150".into()),
            "WORKOUT_STATS_WORKOUT_PATH" => Some("/data/w.csv".into()),
            "WORKOUT_STATS_HEALTH_PATH" => Some("/data/h.json".into()),
            "WORKOUT_STATS_MINUTES_FIELD" => Some("duration".into()),
            "WORKOUT_STATS_FORMAT" => Some("JSON".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.user_name, "Alice");
        assert_eq!(cfg.weekly_goal, 150.0);
        assert_eq!(cfg.workout_path, PathBuf::from("/data/w.csv"));
        assert_eq!(cfg.health_path, PathBuf::from("/data/h.json"));
        assert_eq!(cfg.minutes_field, "duration");
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn from_env_non_numeric_goal_is_zero() {
        let get = |k: &str| (k == "WEEKLY_GOAL").then(|| "lots".to_string());
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.weekly_goal, 0.0);
    }

    #[test]
    fn from_env_rejects_unknown_format() {
        let get = |k: &str| (k == "WORKOUT_STATS_FORMAT").then(|| "xml".to_string());
        let res = Config::from_env_with(get);
        assert!(matches!(res, Err(StatsError::Config(_))));
    }
}
