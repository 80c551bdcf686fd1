pub mod heartbeat_guard;
pub mod hosts_enforcer;
pub mod process_enforcer;

pub use heartbeat_guard::HeartbeatGuard;
pub use hosts_enforcer::{HostsChange, HostsEnforcer};
pub use process_enforcer::ProcessEnforcer;
