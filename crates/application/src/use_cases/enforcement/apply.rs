use crate::services::hosts_enforcer::HostsChange;
use crate::services::{HostsEnforcer, ProcessEnforcer};
use goalgate_domain::{BlockConfig, EnforcementDecision, PollerError};
use std::sync::Arc;
use tracing::{error, instrument};

/// Outcome of driving both enforcers once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnforcementReport {
    pub decision: EnforcementDecision,
    pub processes_killed: usize,
    pub hosts: Option<HostsChange>,
    pub process_error: Option<PollerError>,
    pub hosts_error: Option<PollerError>,
}

impl EnforcementReport {
    fn new(decision: EnforcementDecision) -> Self {
        Self {
            decision,
            processes_killed: 0,
            hosts: None,
            process_error: None,
            hosts_error: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.process_error.is_none() && self.hosts_error.is_none()
    }
}

/// The single decision routine shared by the poll tick and config changes.
///
/// Both enforcers always run: a hosts failure does not skip the process
/// scan and the other way round. Failures are logged and reported, never
/// returned.
pub struct ApplyEnforcementUseCase {
    processes: Arc<ProcessEnforcer>,
    hosts: Arc<HostsEnforcer>,
}

impl ApplyEnforcementUseCase {
    pub fn new(processes: Arc<ProcessEnforcer>, hosts: Arc<HostsEnforcer>) -> Self {
        Self { processes, hosts }
    }

    #[instrument(skip(self, config), fields(decision = %decision))]
    pub async fn execute(
        &self,
        decision: EnforcementDecision,
        config: &BlockConfig,
    ) -> EnforcementReport {
        let mut report = EnforcementReport::new(decision);

        match decision {
            EnforcementDecision::Block => {
                match self.processes.block(&config.apps).await {
                    Ok(killed) => report.processes_killed = killed,
                    Err(e) => {
                        error!(kind = e.kind(), error = %e, "Failed to block apps");
                        report.process_error = Some(e);
                    }
                }

                match self.hosts.block(&config.sites).await {
                    Ok(change) => report.hosts = Some(change),
                    Err(e) => report.hosts_error = Some(e),
                }
            }
            EnforcementDecision::Unblock => {
                self.processes.unblock(&config.apps).await;

                match self.hosts.unblock(&config.sites).await {
                    Ok(change) => report.hosts = Some(change),
                    Err(e) => report.hosts_error = Some(e),
                }
            }
        }

        report
    }
}
