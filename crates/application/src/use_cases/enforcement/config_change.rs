use super::apply::{ApplyEnforcementUseCase, EnforcementReport};
use crate::ports::{BlockConfigRepository, GoalStatusSource};
use goalgate_domain::EnforcementDecision;
use std::sync::Arc;
use tracing::info;

/// Re-applies enforcement right after the block config changed on disk,
/// without waiting for the next poll.
pub struct HandleConfigChangeUseCase {
    goal_source: Arc<dyn GoalStatusSource>,
    config_repo: Arc<dyn BlockConfigRepository>,
    apply: Arc<ApplyEnforcementUseCase>,
}

impl HandleConfigChangeUseCase {
    pub fn new(
        goal_source: Arc<dyn GoalStatusSource>,
        config_repo: Arc<dyn BlockConfigRepository>,
        apply: Arc<ApplyEnforcementUseCase>,
    ) -> Self {
        Self {
            goal_source,
            config_repo,
            apply,
        }
    }

    pub async fn execute(&self) -> EnforcementReport {
        let config = self.config_repo.load().await;
        info!(apps = ?config.apps, sites = ?config.sites, "Block config updated");

        let status = self.goal_source.fetch().await.unwrap_or_default();
        let decision = EnforcementDecision::for_status(&status);

        self.apply.execute(decision, &config).await
    }
}
