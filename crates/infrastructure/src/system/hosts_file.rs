use async_trait::async_trait;
use goalgate_application::ports::HostsFile;
use goalgate_domain::PollerError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// The hosts file on disk (`/etc/hosts` by default).
///
/// Writes go to the file in place rather than through a temp file and
/// rename, which keeps the owner, mode and inode of the system file.
pub struct FsHostsFile {
    path: PathBuf,
}

impl FsHostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn map_io_error(&self, action: &str, e: std::io::Error) -> PollerError {
        if e.kind() == ErrorKind::PermissionDenied {
            PollerError::HostsPermissionDenied(self.location())
        } else {
            PollerError::HostsFile(format!("Failed to {} {}: {}", action, self.location(), e))
        }
    }
}

impl Default for FsHostsFile {
    fn default() -> Self {
        Self::new("/etc/hosts")
    }
}

#[async_trait]
impl HostsFile for FsHostsFile {
    async fn read(&self) -> Result<String, PollerError> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.map_io_error("read", e))
    }

    async fn write(&self, content: &str) -> Result<(), PollerError> {
        fs::write(&self.path, content)
            .await
            .map_err(|e| self.map_io_error("write", e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
