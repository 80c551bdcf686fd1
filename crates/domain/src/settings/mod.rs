//! Daemon settings.
//!
//! Settings are read from an optional TOML file and then patched with
//! command-line overrides:
//! - `root`: top-level settings, loading and CLI overrides
//! - `paths`: every file the daemon reads or writes
//! - `remote`: goal endpoint and network timeout
//! - `enforcement`: poll and watch intervals
//! - `logging`: log level
//! - `errors`: settings errors

pub mod enforcement;
pub mod errors;
pub mod logging;
pub mod paths;
pub mod remote;
pub mod root;

pub use enforcement::EnforcementConfig;
pub use errors::SettingsError;
pub use logging::LoggingConfig;
pub use paths::PathsConfig;
pub use remote::RemoteConfig;
pub use root::{CliOverrides, Settings, DEFAULT_SETTINGS_FILE};
