use async_trait::async_trait;
use goalgate_application::ports::{Notification, Notifier};
use goalgate_domain::PollerError;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Desktop notification through the platform's command-line tool:
/// `osascript` on macOS, `notify-send` on Linux. Other platforms only log.
pub struct OsNotifier {
    timeout: Duration,
}

impl OsNotifier {
    pub fn new() -> Self {
        Self {
            timeout: NOTIFY_TIMEOUT,
        }
    }

    /// AppleScript string literal body: backslashes and quotes escaped.
    pub fn escape_applescript(text: &str) -> String {
        text.replace('\\', "\\\\").replace('"', "\\\"")
    }

    /// `display notification` script for `osascript -e`.
    pub fn applescript(notification: &Notification) -> String {
        let mut script = format!(
            "display notification \"{}\" with title \"{}\"",
            Self::escape_applescript(&notification.message),
            Self::escape_applescript(&notification.title)
        );
        if let Some(subtitle) = &notification.subtitle {
            script.push_str(&format!(" subtitle \"{}\"", Self::escape_applescript(subtitle)));
        }
        if let Some(sound) = &notification.sound {
            script.push_str(&format!(" sound name \"{}\"", Self::escape_applescript(sound)));
        }
        script
    }

    fn command(notification: &Notification) -> Option<Command> {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("osascript");
            cmd.arg("-e").arg(Self::applescript(notification));
            Some(cmd)
        } else if cfg!(target_os = "linux") {
            let summary = match &notification.subtitle {
                Some(subtitle) => format!("{} - {}", notification.title, subtitle),
                None => notification.title.clone(),
            };
            let mut cmd = Command::new("notify-send");
            cmd.arg(summary).arg(&notification.message);
            Some(cmd)
        } else {
            None
        }
    }
}

impl Default for OsNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for OsNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), PollerError> {
        let Some(mut cmd) = Self::command(notification) else {
            debug!(title = %notification.title, "Notifications unsupported on this platform");
            return Ok(());
        };
        cmd.kill_on_drop(true);

        let status = tokio::time::timeout(self.timeout, cmd.status())
            .await
            .map_err(|_| PollerError::Process("Notification command timed out".to_string()))?
            .map_err(|e| PollerError::Process(format!("Failed to display notification: {}", e)))?;

        if !status.success() {
            return Err(PollerError::Process(format!(
                "Notification command exited with {}",
                status
            )));
        }

        debug!(title = %notification.title, "Notification displayed");
        Ok(())
    }
}
