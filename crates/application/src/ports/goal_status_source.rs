use async_trait::async_trait;
use goalgate_domain::{GoalStatus, PollerError};

/// Remote source of today's goal status.
#[async_trait]
pub trait GoalStatusSource: Send + Sync {
    /// Fetch the current status.
    ///
    /// Returns `None` on network, timeout or HTTP failure; the failure is
    /// logged by the implementation. Callers treat `None` as "goal not
    /// reached, zero minutes".
    async fn fetch(&self) -> Option<GoalStatus>;

    /// Set the remote goal flag back to `false`.
    ///
    /// # Errors
    ///
    /// * `PollerError::Firebase` - If the request fails or is rejected
    async fn reset(&self) -> Result<(), PollerError>;

    /// True at most once per calendar day. Returning `true` marks the day
    /// as handled.
    fn should_reset_today(&self) -> bool;
}
