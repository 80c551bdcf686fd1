use async_trait::async_trait;
use goalgate_application::ports::StatusSnapshotWriter;
use goalgate_domain::{GoalSnapshot, PollerError, WorkoutSnapshot};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Frontend snapshot files: `current_workout.json` and `goal_status.json`.
pub struct JsonSnapshotFiles {
    workout_path: PathBuf,
    goal_path: PathBuf,
}

impl JsonSnapshotFiles {
    pub fn new(workout_path: impl Into<PathBuf>, goal_path: impl Into<PathBuf>) -> Self {
        Self {
            workout_path: workout_path.into(),
            goal_path: goal_path.into(),
        }
    }

    async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PollerError> {
        let json = serde_json::to_string(value)
            .map_err(|e| PollerError::Config(format!("Failed to encode snapshot: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                PollerError::Config(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(path, json).await.map_err(|e| {
            PollerError::Config(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}

#[async_trait]
impl StatusSnapshotWriter for JsonSnapshotFiles {
    async fn write_workout_minutes(&self, minutes: u32) -> Result<(), PollerError> {
        Self::write_json(&self.workout_path, &WorkoutSnapshot { minutes }).await
    }

    async fn write_goal_status(&self, goal_reached_today: bool) -> Result<(), PollerError> {
        Self::write_json(&self.goal_path, &GoalSnapshot { goal_reached_today }).await
    }
}
