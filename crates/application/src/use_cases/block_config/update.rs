use crate::ports::BlockConfigRepository;
use goalgate_domain::{BlockConfig, PollerError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct UpdateBlockConfigUseCase {
    repository: Arc<dyn BlockConfigRepository>,
}

impl UpdateBlockConfigUseCase {
    pub fn new(repository: Arc<dyn BlockConfigRepository>) -> Self {
        Self { repository }
    }

    /// Replace the blocked apps and sites. The config watcher picks the
    /// change up and re-applies enforcement.
    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        apps: Vec<String>,
        sites: Vec<String>,
    ) -> Result<BlockConfig, PollerError> {
        let config = BlockConfig::new(apps, sites);
        self.repository.update(&config).await?;

        info!(apps = ?config.apps, sites = ?config.sites, "Config updated");
        Ok(config)
    }

    /// Read-modify-write helper for single-entry edits.
    pub async fn modify(
        &self,
        edit: impl FnOnce(BlockConfig) -> BlockConfig + Send,
    ) -> Result<BlockConfig, PollerError> {
        let current = self.repository.load().await;
        let updated = edit(current).normalized();
        self.repository.update(&updated).await?;

        info!(apps = ?updated.apps, sites = ?updated.sites, "Config updated");
        Ok(updated)
    }
}
