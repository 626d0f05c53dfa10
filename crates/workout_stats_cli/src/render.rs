//! Text and JSON renderings of a [`Summary`].

use std::fmt::Write as _;

use serde::Serialize;
use workout_stats::{GoalStatus, Summary};

use crate::CliResult;

/// Lines printed before any data is read: who the report is for, then progress lines.
pub fn preamble(user: &str) -> String {
    format!("Processing data for: {user}\nReading workout data...\nReading health data...\n")
}

/// Per-dataset totals followed by the summary block and the goal line, if any.
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "Total workouts: {}", summary.workouts);
    let _ = writeln!(out, "Total minutes: {}", summary.minutes);
    let _ = writeln!(out, "Total health entries: {}", summary.health_entries);
    let _ = writeln!(out);
    let _ = writeln!(out, "=== SUMMARY ===");
    let _ = writeln!(out, "Workouts found: {}", summary.workouts);
    let _ = writeln!(out, "Total workout minutes: {}", summary.minutes);
    let _ = writeln!(out, "Health entries found: {}", summary.health_entries);
    let _ = writeln!(out, "Weekly goal: {} minutes", summary.goal);
    match summary.goal_status() {
        GoalStatus::NoGoal => {}
        GoalStatus::Met => {
            let _ = writeln!(
                out,
                "Congratulations {}! You have met or exceeded your weekly goal!",
                summary.user
            );
        }
        GoalStatus::Remaining(left) => {
            let _ = writeln!(
                out,
                "{}, you are {left} minutes away from your weekly goal. Keep going!",
                summary.user
            );
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    goal_status: GoalStatus,
}

/// Pretty-printed JSON of the summary plus its goal status.
pub fn render_json(summary: &Summary) -> CliResult<String> {
    let report = JsonReport {
        summary,
        goal_status: summary.goal_status(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
