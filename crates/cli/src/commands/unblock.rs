use crate::di::Adapters;
use goalgate_domain::Settings;
use tracing::info;

/// Removes every hosts redirect. Refused while the daemon is running
/// unless `force` is set.
pub async fn unblock_all(settings: &Settings, force: bool) -> anyhow::Result<()> {
    let adapters = Adapters::build(settings).await?;
    let change = adapters.hosts.clear_all(force).await?;

    info!(removed = change.removed, forced = force, "Manual unblock finished");
    println!("Removed {} redirect entries from {}", change.removed, settings.paths.hosts_file_path().display());
    Ok(())
}
