use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remote view of today's exercise goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatus {
    #[serde(default)]
    pub goal_reached_today: bool,

    #[serde(default)]
    pub workout_minutes_today: u32,
}

impl GoalStatus {
    pub fn new(goal_reached_today: bool, workout_minutes_today: u32) -> Self {
        Self {
            goal_reached_today,
            workout_minutes_today,
        }
    }

    /// Reads whatever JSON document the endpoint returned.
    ///
    /// Anything that is not an object, and any field of the wrong type,
    /// falls back to `false` / `0`. After a reset the endpoint holds the
    /// bare literal `false`, which reads as the default status.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let goal_reached_today = object
            .get("goalReachedToday")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let workout_minutes_today = object
            .get("workoutMinutesToday")
            .and_then(|v| {
                v.as_u64()
                    .or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            })
            .map(|m| u32::try_from(m).unwrap_or(u32::MAX))
            .unwrap_or(0);

        Self {
            goal_reached_today,
            workout_minutes_today,
        }
    }
}

/// Snapshot written for the frontend: `{"minutes": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSnapshot {
    pub minutes: u32,
}

/// Snapshot written for the frontend: `{"goalReachedToday": b}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSnapshot {
    pub goal_reached_today: bool,
}
