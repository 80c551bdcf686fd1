use async_trait::async_trait;
use chrono::Local;
use goalgate_application::ports::GoalStatusSource;
use goalgate_domain::{DailyResetTracker, GoalStatus, PollerError};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, error, info};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Goal status stored in a Firebase realtime database (plain REST).
///
/// Every request is bounded by `timeout`, so a stalled endpoint can delay
/// a tick but never hang it.
pub struct FirebaseGoalSource {
    client: reqwest::Client,
    goal_url: String,
    reset_url: String,
    timeout: Duration,
    reset_tracker: Mutex<DailyResetTracker>,
}

impl FirebaseGoalSource {
    pub fn new(goal_url: impl Into<String>, timeout: Duration) -> Self {
        let goal_url = goal_url.into();
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            reset_url: goal_url.clone(),
            goal_url,
            timeout,
            reset_tracker: Mutex::new(DailyResetTracker::starting_on(Local::now().date_naive())),
        }
    }

    pub fn with_reset_url(mut self, url: impl Into<String>) -> Self {
        self.reset_url = url.into();
        self
    }

    pub fn with_reset_tracker(mut self, tracker: DailyResetTracker) -> Self {
        self.reset_tracker = Mutex::new(tracker);
        self
    }

    async fn try_fetch(&self) -> Result<GoalStatus, PollerError> {
        let response = tokio::time::timeout(self.timeout, self.client.get(&self.goal_url).send())
            .await
            .map_err(|_| PollerError::Firebase(format!("Timeout contacting {}", self.goal_url)))?
            .map_err(|e| PollerError::Firebase(format!("Request to {} failed: {}", self.goal_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollerError::Firebase(format!(
                "{} returned HTTP {}",
                self.goal_url,
                status.as_u16()
            )));
        }

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| PollerError::Firebase(format!("Timeout reading {}", self.goal_url)))?
            .map_err(|e| PollerError::Firebase(format!("Failed to read response: {}", e)))?;

        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| PollerError::Firebase(format!("Invalid JSON from {}: {}", self.goal_url, e)))?;

        Ok(GoalStatus::from_json(&value))
    }
}

#[async_trait]
impl GoalStatusSource for FirebaseGoalSource {
    async fn fetch(&self) -> Option<GoalStatus> {
        match self.try_fetch().await {
            Ok(status) => {
                debug!(
                    goal_reached_today = status.goal_reached_today,
                    workout_minutes = status.workout_minutes_today,
                    "Goal status fetched"
                );
                Some(status)
            }
            Err(e) => {
                error!(error = %e, "Error contacting Firebase");
                None
            }
        }
    }

    async fn reset(&self) -> Result<(), PollerError> {
        let request = self
            .client
            .put(&self.reset_url)
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body("false")
            .send();

        let response = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(error = %e, "Exception during goal reset");
                return Err(PollerError::Firebase(format!("Failed to reset goal: {}", e)));
            }
            Err(_) => {
                error!(url = %self.reset_url, "Goal reset timed out");
                return Err(PollerError::Firebase("Failed to reset goal: timeout".to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            info!("Reset goalReachedToday to false at midnight");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = status.as_u16(), body = %body, "Failed to reset goal");
        Err(PollerError::Firebase(format!(
            "Failed to reset goal: HTTP {}",
            status.as_u16()
        )))
    }

    fn should_reset_today(&self) -> bool {
        let today = Local::now().date_naive();
        let mut tracker = match self.reset_tracker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tracker.should_reset(today)
    }
}
