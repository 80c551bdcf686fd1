use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Every file the daemon touches.
///
/// Relative paths are resolved against `base_dir`; absolute paths are used
/// as-is.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    #[serde(default = "default_hosts_file")]
    pub hosts_file: PathBuf,

    /// JSON record of blocked apps and sites
    #[serde(default = "default_block_config")]
    pub block_config: PathBuf,

    /// Snapshot `{"minutes": n}` read by the frontend
    #[serde(default = "default_workout_snapshot")]
    pub workout_snapshot: PathBuf,

    /// Snapshot `{"goalReachedToday": b}` read by the frontend
    #[serde(default = "default_goal_snapshot")]
    pub goal_snapshot: PathBuf,

    #[serde(default = "default_heartbeat")]
    pub heartbeat: PathBuf,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl PathsConfig {
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn hosts_file_path(&self) -> PathBuf {
        self.resolve(&self.hosts_file)
    }

    pub fn block_config_path(&self) -> PathBuf {
        self.resolve(&self.block_config)
    }

    pub fn workout_snapshot_path(&self) -> PathBuf {
        self.resolve(&self.workout_snapshot)
    }

    pub fn goal_snapshot_path(&self) -> PathBuf {
        self.resolve(&self.goal_snapshot)
    }

    pub fn heartbeat_path(&self) -> PathBuf {
        self.resolve(&self.heartbeat)
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.resolve(&self.log_file)
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            hosts_file: default_hosts_file(),
            block_config: default_block_config(),
            workout_snapshot: default_workout_snapshot(),
            goal_snapshot: default_goal_snapshot(),
            heartbeat: default_heartbeat(),
            log_file: default_log_file(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_hosts_file() -> PathBuf {
    PathBuf::from("/etc/hosts")
}

fn default_block_config() -> PathBuf {
    PathBuf::from("frontend/blocked_config.json")
}

fn default_workout_snapshot() -> PathBuf {
    PathBuf::from("frontend/current_workout.json")
}

fn default_goal_snapshot() -> PathBuf {
    PathBuf::from("frontend/goal_status.json")
}

fn default_heartbeat() -> PathBuf {
    PathBuf::from("poller_heartbeat.txt")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("nopainnogame.log")
}
