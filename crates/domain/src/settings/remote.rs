use serde::{Deserialize, Serialize};

pub const DEFAULT_GOAL_URL: &str = "https://nopainnogameapp-default-rtdb.firebaseio.com/.json";

/// Remote goal endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// URL answering `GET` with `{goalReachedToday, workoutMinutesToday}`
    #[serde(default = "default_goal_url")]
    pub goal_url: String,

    /// URL receiving the daily `PUT false` (default: same as `goal_url`)
    #[serde(default)]
    pub reset_url: Option<String>,

    /// Timeout for every request in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn reset_url(&self) -> &str {
        self.reset_url.as_deref().unwrap_or(&self.goal_url)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            goal_url: default_goal_url(),
            reset_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_goal_url() -> String {
    DEFAULT_GOAL_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}
