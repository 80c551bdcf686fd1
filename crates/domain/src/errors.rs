use thiserror::Error;

/// Every failure the daemon can report.
///
/// Each variant carries a human-readable cause. Callers inside the
/// enforcement loop log these and degrade to a safe default; only bootstrap
/// failures (settings, log sink, config record, heartbeat) are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollerError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Firebase error: {0}")]
    Firebase(String),

    #[error("Hosts file error: {0}")]
    HostsFile(String),

    #[error("Permission denied while modifying {0}, retry with elevated privileges")]
    HostsPermissionDenied(String),

    #[error("Process error: {0}")]
    Process(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Heartbeat error: {0}")]
    Heartbeat(String),
}

impl PollerError {
    /// Short tag used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Firebase(_) => "firebase",
            Self::HostsFile(_) => "hosts_file",
            Self::HostsPermissionDenied(_) => "hosts_permission_denied",
            Self::Process(_) => "process",
            Self::Logging(_) => "logging",
            Self::Heartbeat(_) => "heartbeat",
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::HostsPermissionDenied(_))
    }
}
