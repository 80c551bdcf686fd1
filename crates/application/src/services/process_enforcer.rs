use goalgate_domain::PollerError;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{KillOutcome, Notification, Notifier, ProcessTable};

const BLOCKED_TITLE: &str = "Applications Blocked";
const BLOCKED_MESSAGE: &str = "Please complete your goals before using blocked applications.";
const BLOCKED_SOUND: &str = "Pop";

/// Kills running processes whose name contains a blocked substring.
///
/// Killing is irreversible, so `unblock` has nothing to undo and only logs.
pub struct ProcessEnforcer {
    table: Arc<dyn ProcessTable>,
    notifier: Option<Arc<dyn Notifier>>,
    own_pid: u32,
}

impl ProcessEnforcer {
    pub fn new(table: Arc<dyn ProcessTable>) -> Self {
        Self {
            table,
            notifier: None,
            own_pid: std::process::id(),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Pid that is never killed, whatever its name (defaults to this process).
    pub fn with_own_pid(mut self, pid: u32) -> Self {
        self.own_pid = pid;
        self
    }

    /// Kill every matching process and return how many were killed.
    ///
    /// Processes that vanish or refuse the signal are skipped; one failure
    /// never stops the scan.
    #[instrument(skip_all, fields(patterns = apps.len()))]
    pub async fn block(&self, apps: &[String]) -> Result<usize, PollerError> {
        let patterns: Vec<String> = apps
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();

        if patterns.is_empty() {
            debug!("No blocked apps configured");
            return Ok(0);
        }

        let processes = self.table.list().await?;
        let mut killed = 0;

        for process in processes {
            if process.pid == self.own_pid {
                continue;
            }

            let name = process.name.to_lowercase();
            if !patterns.iter().any(|p| name.contains(p.as_str())) {
                continue;
            }

            match self.table.kill(process.pid).await {
                Ok(KillOutcome::Killed) => {
                    info!(pid = process.pid, name = %process.name, "Force-killed blocked app");
                    killed += 1;
                }
                Ok(KillOutcome::NotRunning) => {
                    debug!(pid = process.pid, name = %process.name, "Process exited before kill");
                }
                Err(e) => {
                    warn!(pid = process.pid, name = %process.name, error = %e, "Skipping process");
                }
            }
        }

        if killed > 0 {
            self.notify_blocked().await;
            info!(killed, "Applications blocked");
        } else {
            info!("No blocked apps were running");
        }

        Ok(killed)
    }

    pub async fn unblock(&self, apps: &[String]) {
        debug!(apps = apps.len(), "unblock called for apps, nothing to do");
    }

    async fn notify_blocked(&self) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        let notification = Notification::new(BLOCKED_TITLE, BLOCKED_MESSAGE).with_sound(BLOCKED_SOUND);
        if let Err(e) = notifier.notify(&notification).await {
            error!(error = %e, "Failed to display notification");
        }
    }
}
