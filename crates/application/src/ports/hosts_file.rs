use async_trait::async_trait;
use goalgate_domain::PollerError;

/// Whole-file access to the system hosts file.
///
/// There is no locking: the enforcer reads everything, computes the new
/// content and writes everything back. Last writer wins.
#[async_trait]
pub trait HostsFile: Send + Sync {
    /// # Errors
    ///
    /// * `PollerError::HostsPermissionDenied` - If the file is not readable
    /// * `PollerError::HostsFile` - On any other I/O failure
    async fn read(&self) -> Result<String, PollerError>;

    /// # Errors
    ///
    /// * `PollerError::HostsPermissionDenied` - If the file is not writable
    /// * `PollerError::HostsFile` - On any other I/O failure
    async fn write(&self, content: &str) -> Result<(), PollerError>;

    fn location(&self) -> String;
}
