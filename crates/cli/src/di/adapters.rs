use goalgate_application::ports::{Heartbeat, Notifier};
use goalgate_application::services::{HeartbeatGuard, HostsEnforcer, ProcessEnforcer};
use goalgate_domain::{PollerError, Settings};
use goalgate_infrastructure::config_store::JsonBlockConfigRepository;
use goalgate_infrastructure::remote::FirebaseGoalSource;
use goalgate_infrastructure::status::JsonSnapshotFiles;
use goalgate_infrastructure::system::{default_process_table, FileHeartbeat, FsHostsFile, OsNotifier};
use std::sync::Arc;
use std::time::Duration;

/// Concrete adapters built from settings, shared by every command.
pub struct Adapters {
    pub config_repo: Arc<JsonBlockConfigRepository>,
    pub goal_source: Arc<FirebaseGoalSource>,
    pub snapshots: Arc<JsonSnapshotFiles>,
    pub heartbeat: Arc<FileHeartbeat>,
    pub processes: Arc<ProcessEnforcer>,
    pub hosts: Arc<HostsEnforcer>,
}

impl Adapters {
    pub async fn build(settings: &Settings) -> Result<Self, PollerError> {
        let paths = &settings.paths;

        let config_repo = Arc::new(JsonBlockConfigRepository::open(paths.block_config_path()).await?);

        let goal_source = Arc::new(
            FirebaseGoalSource::new(
                settings.remote.goal_url.clone(),
                Duration::from_secs(settings.remote.timeout_secs),
            )
            .with_reset_url(settings.remote.reset_url()),
        );

        let snapshots = Arc::new(JsonSnapshotFiles::new(
            paths.workout_snapshot_path(),
            paths.goal_snapshot_path(),
        ));

        let heartbeat = Arc::new(FileHeartbeat::new(paths.heartbeat_path()));

        let mut processes =
            ProcessEnforcer::new(default_process_table()).with_own_pid(std::process::id());
        if settings.enforcement.notify {
            let notifier: Arc<dyn Notifier> = Arc::new(OsNotifier::new());
            processes = processes.with_notifier(notifier);
        }

        let guard_heartbeat: Arc<dyn Heartbeat> = heartbeat.clone();
        let hosts = HostsEnforcer::new(Arc::new(FsHostsFile::new(paths.hosts_file_path())))
            .with_guard(Arc::new(HeartbeatGuard::new(guard_heartbeat)));

        Ok(Self {
            config_repo,
            goal_source,
            snapshots,
            heartbeat,
            processes: Arc::new(processes),
            hosts: Arc::new(hosts),
        })
    }
}
