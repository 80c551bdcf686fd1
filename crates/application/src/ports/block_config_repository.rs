use async_trait::async_trait;
use goalgate_domain::{BlockConfig, PollerError};
use std::path::Path;

/// Durable store of the blocked apps and sites.
#[async_trait]
pub trait BlockConfigRepository: Send + Sync {
    /// Reads the current record.
    ///
    /// Never fails: read or parse errors are logged by the implementation
    /// and an empty config is returned.
    async fn load(&self) -> BlockConfig;

    /// Replaces the whole record.
    ///
    /// # Errors
    ///
    /// * `PollerError::Config` - If the record cannot be written
    async fn update(&self, config: &BlockConfig) -> Result<(), PollerError>;

    /// File backing the record, watched for external edits.
    fn location(&self) -> &Path;
}
