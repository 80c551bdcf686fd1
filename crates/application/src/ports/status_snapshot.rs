use async_trait::async_trait;
use goalgate_domain::PollerError;

/// Snapshot files the frontend reads to display progress.
#[async_trait]
pub trait StatusSnapshotWriter: Send + Sync {
    async fn write_workout_minutes(&self, minutes: u32) -> Result<(), PollerError>;

    async fn write_goal_status(&self, goal_reached_today: bool) -> Result<(), PollerError>;
}
