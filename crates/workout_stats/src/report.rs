use serde::Serialize;

/// Merged result of one run over both datasets.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub user: String,
    pub goal: f64,
    pub workouts: usize,
    pub minutes: f64,
    pub health_entries: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "minutes_left", rename_all = "snake_case")]
pub enum GoalStatus {
    NoGoal,
    Met,
    Remaining(f64),
}

impl Summary {
    pub fn goal_status(&self) -> GoalStatus {
        if self.goal <= 0.0 {
            GoalStatus::NoGoal
        } else if self.minutes >= self.goal {
            GoalStatus::Met
        } else {
            GoalStatus::Remaining(self.goal - self.minutes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(goal: f64, minutes: f64) -> Summary {
        Summary {
            user: "Sam".into(),
            goal,
            workouts: 3,
            minutes,
            health_entries: 2,
        }
    }

    #[test]
    fn goal_status_variants() {
        assert_eq!(summary(0.0, 10.0).goal_status(), GoalStatus::NoGoal);
        assert_eq!(summary(-5.0, 10.0).goal_status(), GoalStatus::NoGoal);
        assert_eq!(summary(100.0, 100.0).goal_status(), GoalStatus::Met);
        assert_eq!(summary(100.0, 75.0).goal_status(), GoalStatus::Remaining(25.0));
    }

    #[test]
    fn goal_status_serializes_tagged() {
        let v = serde_json::to_value(GoalStatus::Remaining(25.0)).unwrap();
        assert_eq!(v["status"], "remaining");
        assert_eq!(v["minutes_left"], 25.0);
        let v = serde_json::to_value(GoalStatus::Met).unwrap();
        assert_eq!(v["status"], "met");
    }
}
