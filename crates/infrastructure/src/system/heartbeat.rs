use async_trait::async_trait;
use goalgate_application::ports::Heartbeat;
use goalgate_domain::PollerError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

const HEARTBEAT_CONTENT: &str = "Poller is running\n";

/// Marker file whose existence tells monitors the daemon is alive.
pub struct FileHeartbeat {
    path: PathBuf,
}

impl FileHeartbeat {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Heartbeat for FileHeartbeat {
    async fn beat(&self) -> Result<(), PollerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PollerError::Heartbeat(format!("Failed to write heartbeat: {}", e)))?;
        }

        fs::write(&self.path, HEARTBEAT_CONTENT)
            .await
            .map_err(|e| PollerError::Heartbeat(format!("Failed to write heartbeat: {}", e)))?;

        info!(path = %self.path.display(), "Heartbeat file written");
        Ok(())
    }

    async fn clear(&self) -> Result<bool, PollerError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PollerError::Heartbeat(format!(
                "Failed to remove heartbeat: {}",
                e
            ))),
        }
    }

    async fn is_alive(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }
}
