use crate::ports::{BlockConfigRepository, Heartbeat};
use crate::services::hosts_enforcer::HostsChange;
use crate::services::{HostsEnforcer, ProcessEnforcer};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub hosts: Option<HostsChange>,
    pub heartbeat_removed: bool,
}

/// Shutdown unwind: unblock apps, clear every hosts redirect regardless of
/// goal state, remove the heartbeat marker.
///
/// Best-effort. Each step runs even if the previous one failed.
pub struct CleanupUseCase {
    config_repo: Arc<dyn BlockConfigRepository>,
    processes: Arc<ProcessEnforcer>,
    hosts: Arc<HostsEnforcer>,
    heartbeat: Arc<dyn Heartbeat>,
}

impl CleanupUseCase {
    pub fn new(
        config_repo: Arc<dyn BlockConfigRepository>,
        processes: Arc<ProcessEnforcer>,
        hosts: Arc<HostsEnforcer>,
        heartbeat: Arc<dyn Heartbeat>,
    ) -> Self {
        Self {
            config_repo,
            processes,
            hosts,
            heartbeat,
        }
    }

    pub async fn execute(&self) -> CleanupReport {
        info!("Cleaning up, unblocking apps and websites");

        let config = self.config_repo.load().await;
        self.processes.unblock(&config.apps).await;

        let hosts = self.hosts.clear_all(true).await.ok();

        let heartbeat_removed = match self.heartbeat.clear().await {
            Ok(true) => {
                info!("Heartbeat file removed");
                true
            }
            Ok(false) => false,
            Err(e) => {
                error!(kind = e.kind(), error = %e, "Failed to remove heartbeat");
                false
            }
        };

        CleanupReport {
            hosts,
            heartbeat_removed,
        }
    }
}
