use goalgate_application::ports::GoalStatusSource;
use goalgate_domain::Settings;
use goalgate_infrastructure::remote::FirebaseGoalSource;
use std::process::ExitCode;
use std::time::Duration;

/// Fetches the goal status once and prints it as JSON.
pub async fn status(settings: &Settings) -> anyhow::Result<ExitCode> {
    let source = FirebaseGoalSource::new(
        settings.remote.goal_url.clone(),
        Duration::from_secs(settings.remote.timeout_secs),
    );

    match source.fetch().await {
        Some(status) => {
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Goal status unavailable from {}", settings.remote.goal_url);
            Ok(ExitCode::FAILURE)
        }
    }
}
