use async_trait::async_trait;
use goalgate_domain::PollerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
}

impl ProcessInfo {
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    Killed,
    /// The process exited between listing and the kill.
    NotRunning,
}

/// View of the running processes on this machine.
#[async_trait]
pub trait ProcessTable: Send + Sync {
    /// Snapshot of running processes. Entries that disappear while the
    /// table is read are left out rather than failing the listing.
    async fn list(&self) -> Result<Vec<ProcessInfo>, PollerError>;

    /// Forcefully terminate `pid` (SIGKILL on Unix).
    ///
    /// # Errors
    ///
    /// * `PollerError::Process` - If the process exists but cannot be killed
    async fn kill(&self, pid: u32) -> Result<KillOutcome, PollerError>;
}
