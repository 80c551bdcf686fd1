pub mod heartbeat;
pub mod hosts_file;
pub mod notifier;
pub mod process_table;

pub use heartbeat::FileHeartbeat;
pub use hosts_file::FsHostsFile;
pub use notifier::OsNotifier;
pub use process_table::{default_process_table, ProcfsProcessTable, PsProcessTable};
