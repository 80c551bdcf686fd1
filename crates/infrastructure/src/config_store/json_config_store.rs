use async_trait::async_trait;
use goalgate_application::ports::BlockConfigRepository;
use goalgate_domain::{BlockConfig, PollerError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info};

/// Block config persisted as `{"apps": [...], "sites": [...]}`.
pub struct JsonBlockConfigRepository {
    path: PathBuf,
}

impl JsonBlockConfigRepository {
    /// Opens the record at `path`, writing an empty one first if none
    /// exists yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, PollerError> {
        let repo = Self { path: path.into() };

        let exists = fs::try_exists(&repo.path).await.map_err(|e| {
            PollerError::Config(format!("Failed to initialize config file: {}", e))
        })?;

        if !exists {
            repo.write(&BlockConfig::empty()).await.map_err(|e| {
                PollerError::Config(format!("Failed to initialize config file: {}", e))
            })?;
            info!(path = %repo.path.display(), "Created empty block config");
        }

        Ok(repo)
    }

    /// Serialize to a sibling temp file, then rename over the record so
    /// readers never see a half-written file.
    async fn write(&self, config: &BlockConfig) -> Result<(), PollerError> {
        let body = serde_json::to_string_pretty(config)
            .map_err(|e| PollerError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PollerError::Config(format!("Failed to write config: {}", e)))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, body)
            .await
            .map_err(|e| PollerError::Config(format!("Failed to write config: {}", e)))?;

        fs::rename(&tmp, &self.path).await.map_err(|e| {
            PollerError::Config(format!("Failed to write config: {}", e))
        })
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "blocked_config.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

#[async_trait]
impl BlockConfigRepository for JsonBlockConfigRepository {
    async fn load(&self) -> BlockConfig {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to load config");
                return BlockConfig::empty();
            }
        };

        match serde_json::from_str::<BlockConfig>(&raw) {
            Ok(config) => {
                let config = config.normalized();
                debug!(apps = config.apps.len(), sites = config.sites.len(), "Block config loaded");
                config
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to load config");
                BlockConfig::empty()
            }
        }
    }

    async fn update(&self, config: &BlockConfig) -> Result<(), PollerError> {
        if let Err(e) = self.write(config).await {
            error!(error = %e, "Failed to update config");
            return Err(e);
        }

        info!(apps = ?config.apps, sites = ?config.sites, "Config written");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
