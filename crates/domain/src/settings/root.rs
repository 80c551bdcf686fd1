use super::{EnforcementConfig, LoggingConfig, PathsConfig, RemoteConfig, SettingsError};
use crate::validators::{validate_non_empty_path, validate_url};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file picked up from the working directory when no `--config`
/// flag is given.
pub const DEFAULT_SETTINGS_FILE: &str = "goalgate.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub enforcement: EnforcementConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_dir: Option<PathBuf>,
    pub hosts_file: Option<PathBuf>,
    pub poll_interval_secs: Option<u64>,
    pub goal_url: Option<String>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Loads settings from `path`, or from `goalgate.toml` in the working
    /// directory when it exists, or falls back to defaults.
    pub fn load(path: Option<&Path>, overrides: CliOverrides) -> Result<Self, SettingsError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_SETTINGS_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        settings.apply_overrides(overrides);
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_toml(&raw).map_err(|reason| SettingsError::Parse {
            path: path.display().to_string(),
            reason,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(base_dir) = overrides.base_dir {
            self.paths.base_dir = base_dir;
        }
        if let Some(hosts_file) = overrides.hosts_file {
            self.paths.hosts_file = hosts_file;
        }
        if let Some(secs) = overrides.poll_interval_secs {
            self.enforcement.poll_interval_secs = secs;
        }
        if let Some(url) = overrides.goal_url {
            self.remote.goal_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.enforcement.poll_interval_secs == 0 {
            return Err(SettingsError::Invalid(
                "poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.enforcement.watch_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "watch_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.remote.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        validate_url(&self.remote.goal_url).map_err(SettingsError::Invalid)?;
        validate_url(self.remote.reset_url()).map_err(SettingsError::Invalid)?;

        for (name, path) in [
            ("hosts_file", &self.paths.hosts_file),
            ("block_config", &self.paths.block_config),
            ("workout_snapshot", &self.paths.workout_snapshot),
            ("goal_snapshot", &self.paths.goal_snapshot),
            ("heartbeat", &self.paths.heartbeat),
            ("log_file", &self.paths.log_file),
        ] {
            validate_non_empty_path(name, path).map_err(SettingsError::Invalid)?;
        }

        Ok(())
    }
}
