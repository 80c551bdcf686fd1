use serde::{Deserialize, Serialize};

/// Timing of the enforcement loop and the config watcher
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnforcementConfig {
    /// Seconds between two goal-status polls (default: 10)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Milliseconds between two checks of the block config file (default: 1000)
    #[serde(default = "default_watch_interval")]
    pub watch_interval_ms: u64,

    /// Show a desktop notification when blocked apps are killed (default: true)
    #[serde(default = "default_true")]
    pub notify: bool,
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            watch_interval_ms: default_watch_interval(),
            notify: true,
        }
    }
}

fn default_poll_interval() -> u64 {
    10
}

fn default_watch_interval() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}
