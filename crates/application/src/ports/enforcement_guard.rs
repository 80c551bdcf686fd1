use async_trait::async_trait;
use goalgate_domain::PollerError;

/// Policy hook consulted before every hosts redirect is cleared outside of
/// shutdown.
#[async_trait]
pub trait EnforcementGuard: Send + Sync {
    /// # Errors
    ///
    /// * `PollerError::HostsFile` - If clearing must be refused right now
    async fn check_clear_allowed(&self) -> Result<(), PollerError>;
}
