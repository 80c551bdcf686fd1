pub mod block_config_repository;
pub mod enforcement_guard;
pub mod goal_status_source;
pub mod heartbeat;
pub mod hosts_file;
pub mod notifier;
pub mod process_table;
pub mod status_snapshot;

pub use block_config_repository::BlockConfigRepository;
pub use enforcement_guard::EnforcementGuard;
pub use goal_status_source::GoalStatusSource;
pub use heartbeat::Heartbeat;
pub use hosts_file::HostsFile;
pub use notifier::{Notification, Notifier};
pub use process_table::{KillOutcome, ProcessInfo, ProcessTable};
pub use status_snapshot::StatusSnapshotWriter;
