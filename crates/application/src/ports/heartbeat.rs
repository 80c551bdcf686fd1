use async_trait::async_trait;
use goalgate_domain::PollerError;

/// Liveness marker for external monitors.
#[async_trait]
pub trait Heartbeat: Send + Sync {
    async fn beat(&self) -> Result<(), PollerError>;

    /// Remove the marker. Returns whether a marker was present.
    async fn clear(&self) -> Result<bool, PollerError>;

    async fn is_alive(&self) -> bool;
}
