use goalgate_domain::hosts::{block_sites, clear_all_redirects, unblock_sites};
use goalgate_domain::{HostsRewrite, PollerError};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::ports::{EnforcementGuard, HostsFile};

/// Counts of lines a single hosts operation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostsChange {
    pub added: usize,
    pub removed: usize,
}

impl From<&HostsRewrite> for HostsChange {
    fn from(rewrite: &HostsRewrite) -> Self {
        Self {
            added: rewrite.added,
            removed: rewrite.removed,
        }
    }
}

/// Redirects blocked sites to loopback through the hosts file.
///
/// Every operation is read whole file, rewrite, write whole file. Content
/// that already matches the target is not written again.
pub struct HostsEnforcer {
    file: Arc<dyn HostsFile>,
    guard: Option<Arc<dyn EnforcementGuard>>,
}

impl HostsEnforcer {
    pub fn new(file: Arc<dyn HostsFile>) -> Self {
        Self { file, guard: None }
    }

    pub fn with_guard(mut self, guard: Arc<dyn EnforcementGuard>) -> Self {
        self.guard = Some(guard);
        self
    }

    pub async fn block(&self, sites: &[String]) -> Result<HostsChange, PollerError> {
        info!(sites = sites.len(), "Blocking distracting websites");
        self.apply("block", |content| block_sites(content, sites)).await
    }

    pub async fn unblock(&self, sites: &[String]) -> Result<HostsChange, PollerError> {
        info!(sites = sites.len(), "Unblocking distracting websites");
        self.apply("unblock", |content| unblock_sites(content, sites)).await
    }

    /// Remove every managed redirect, keeping localhost, broadcast and
    /// comment lines. `skip_guard` bypasses the guard; shutdown sets it.
    pub async fn clear_all(&self, skip_guard: bool) -> Result<HostsChange, PollerError> {
        if !skip_guard {
            if let Some(guard) = &self.guard {
                guard.check_clear_allowed().await?;
            }
        }

        info!("Clearing all blocked sites from hosts file");
        self.apply("clear_all", clear_all_redirects).await
    }

    async fn apply(
        &self,
        operation: &'static str,
        rewrite: impl FnOnce(&str) -> HostsRewrite,
    ) -> Result<HostsChange, PollerError> {
        let result = self.rewrite_file(rewrite).await;

        match &result {
            Ok(change) => debug!(
                operation,
                added = change.added,
                removed = change.removed,
                "Hosts file updated"
            ),
            Err(e) if e.is_permission_denied() => error!(
                operation,
                kind = e.kind(),
                path = %self.file.location(),
                "Permission denied while modifying hosts file, retry with elevated privileges"
            ),
            Err(e) => error!(operation, kind = e.kind(), error = %e, "Failed to update hosts file"),
        }

        result
    }

    async fn rewrite_file(
        &self,
        rewrite: impl FnOnce(&str) -> HostsRewrite,
    ) -> Result<HostsChange, PollerError> {
        let content = self.file.read().await?;
        let rewritten = rewrite(&content);

        if rewritten.changed() {
            self.file.write(&rewritten.content).await?;
        }

        Ok(HostsChange::from(&rewritten))
    }
}
