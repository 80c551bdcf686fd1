pub mod config_watch;
pub mod enforcement_loop;
pub mod runner;

pub use config_watch::{ConfigEvent, ConfigWatchJob};
pub use enforcement_loop::EnforcementLoopJob;
pub use runner::{JobRunner, RunningJobs};
