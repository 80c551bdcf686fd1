use async_trait::async_trait;
use goalgate_domain::PollerError;
use std::sync::Arc;
use tracing::warn;

use crate::ports::{EnforcementGuard, Heartbeat};

/// Refuses to clear redirects while the daemon's heartbeat marker exists,
/// i.e. while enforcement is supposed to be active.
pub struct HeartbeatGuard {
    heartbeat: Arc<dyn Heartbeat>,
}

impl HeartbeatGuard {
    pub fn new(heartbeat: Arc<dyn Heartbeat>) -> Self {
        Self { heartbeat }
    }
}

#[async_trait]
impl EnforcementGuard for HeartbeatGuard {
    async fn check_clear_allowed(&self) -> Result<(), PollerError> {
        if self.heartbeat.is_alive().await {
            warn!("Refusing to clear hosts redirects while the daemon is running");
            return Err(PollerError::HostsFile(
                "enforcement is active; stop the daemon first".to_string(),
            ));
        }
        Ok(())
    }
}
