//! goalgate domain layer
pub mod block_config;
pub mod daily_reset;
pub mod enforcement;
pub mod errors;
pub mod goal_status;
pub mod hosts;
pub mod settings;
pub mod validators;

pub use block_config::BlockConfig;
pub use daily_reset::DailyResetTracker;
pub use enforcement::{EnforcementDecision, EnforcementState, GoalTransition};
pub use errors::PollerError;
pub use goal_status::{GoalSnapshot, GoalStatus, WorkoutSnapshot};
pub use hosts::{HostsEntryKind, HostsRewrite};
pub use settings::{CliOverrides, Settings, SettingsError};
