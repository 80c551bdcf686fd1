use goalgate_domain::{CliOverrides, Settings};
use std::path::Path;
use tracing::info;

pub fn load_settings(
    settings_path: Option<&Path>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Settings> {
    let settings = Settings::load(settings_path, cli_overrides)?;
    settings.validate()?;
    Ok(settings)
}

/// Logged once the subscriber is up, since settings load before logging.
pub fn log_settings(settings_path: Option<&Path>, settings: &Settings) {
    info!(
        settings_file = %settings_path.map(|p| p.display().to_string()).unwrap_or_else(|| "default".to_string()),
        hosts_file = %settings.paths.hosts_file_path().display(),
        block_config = %settings.paths.block_config_path().display(),
        poll_interval_secs = settings.enforcement.poll_interval_secs,
        "Configuration loaded"
    );
}
