use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigEvent {
    Changed,
}

/// Modification time and length; `None` while the file is missing.
type Fingerprint = Option<(Option<SystemTime>, u64)>;

/// Polls the block config file's metadata and reports changes to the
/// enforcement loop. It never enforces anything itself.
pub struct ConfigWatchJob {
    path: PathBuf,
    interval_ms: u64,
    events: mpsc::Sender<ConfigEvent>,
    shutdown: CancellationToken,
}

impl ConfigWatchJob {
    pub fn new(path: impl Into<PathBuf>, events: mpsc::Sender<ConfigEvent>) -> Self {
        Self {
            path: path.into(),
            interval_ms: 1000,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    async fn fingerprint(&self) -> Fingerprint {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => Some((meta.modified().ok(), meta.len())),
            Err(_) => None,
        }
    }

    pub async fn run(self) {
        info!(path = %self.path.display(), "Started watching block config");

        let mut last = self.fingerprint().await;
        let mut interval = tokio::time::interval(Duration::from_millis(self.interval_ms));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("ConfigWatchJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let current = self.fingerprint().await;
                    if current == last {
                        continue;
                    }
                    last = current;

                    if current.is_none() {
                        warn!(path = %self.path.display(), "Block config file disappeared");
                        continue;
                    }

                    debug!(path = %self.path.display(), "Block config modified");
                    match self.events.try_send(ConfigEvent::Changed) {
                        // A queued event already covers this change.
                        Ok(()) | Err(TrySendError::Full(_)) => {}
                        Err(TrySendError::Closed(_)) => {
                            info!("ConfigWatchJob: enforcement loop gone, stopping");
                            break;
                        }
                    }
                }
            }
        }
    }
}
