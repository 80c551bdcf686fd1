use super::apply::{ApplyEnforcementUseCase, EnforcementReport};
use crate::ports::{BlockConfigRepository, GoalStatusSource, StatusSnapshotWriter};
use goalgate_domain::{EnforcementDecision, GoalStatus};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub status: GoalStatus,
    /// False when the remote fetch failed and defaults were used.
    pub fetched: bool,
    /// `Some(success)` when the daily reset ran during this tick.
    pub reset: Option<bool>,
    pub enforcement: EnforcementReport,
}

/// One poll of the enforcement loop:
/// fetch status, load config, publish snapshots, daily reset, enforce.
///
/// Nothing in here fails the tick; every step degrades and logs.
pub struct RunEnforcementTickUseCase {
    goal_source: Arc<dyn GoalStatusSource>,
    config_repo: Arc<dyn BlockConfigRepository>,
    snapshots: Arc<dyn StatusSnapshotWriter>,
    apply: Arc<ApplyEnforcementUseCase>,
}

impl RunEnforcementTickUseCase {
    pub fn new(
        goal_source: Arc<dyn GoalStatusSource>,
        config_repo: Arc<dyn BlockConfigRepository>,
        snapshots: Arc<dyn StatusSnapshotWriter>,
        apply: Arc<ApplyEnforcementUseCase>,
    ) -> Self {
        Self {
            goal_source,
            config_repo,
            snapshots,
            apply,
        }
    }

    pub async fn execute(&self) -> TickReport {
        let fetched = self.goal_source.fetch().await;
        let status = fetched.unwrap_or_default();
        if fetched.is_none() {
            warn!("Goal status unavailable, assuming goal not reached");
        }

        let config = self.config_repo.load().await;

        self.publish_snapshots(&status).await;

        let reset = if self.goal_source.should_reset_today() {
            match self.goal_source.reset().await {
                Ok(()) => {
                    info!("Daily goal reset performed");
                    Some(true)
                }
                Err(e) => {
                    error!(kind = e.kind(), error = %e, "Daily goal reset failed, continuing");
                    Some(false)
                }
            }
        } else {
            None
        };

        let decision = EnforcementDecision::for_status(&status);
        if decision == EnforcementDecision::Block {
            info!(goal_reached_today = false, "Detected goal not reached");
        }

        let enforcement = self.apply.execute(decision, &config).await;

        debug!(
            goal_reached_today = status.goal_reached_today,
            workout_minutes = status.workout_minutes_today,
            killed = enforcement.processes_killed,
            "Tick completed"
        );

        TickReport {
            status,
            fetched: fetched.is_some(),
            reset,
            enforcement,
        }
    }

    async fn publish_snapshots(&self, status: &GoalStatus) {
        if let Err(e) = self
            .snapshots
            .write_workout_minutes(status.workout_minutes_today)
            .await
        {
            error!(error = %e, "Failed to update workout minutes");
        }

        if let Err(e) = self
            .snapshots
            .write_goal_status(status.goal_reached_today)
            .await
        {
            error!(error = %e, "Failed to update goal status");
        }
    }
}
