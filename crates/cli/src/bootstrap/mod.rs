pub mod config;
pub mod logging;
pub mod signals;

pub use config::load_settings;
pub use logging::init_logging;
pub use signals::shutdown_signal;
