pub mod apply;
pub mod cleanup;
pub mod config_change;
pub mod tick;

pub use apply::{ApplyEnforcementUseCase, EnforcementReport};
pub use cleanup::{CleanupReport, CleanupUseCase};
pub use config_change::HandleConfigChangeUseCase;
pub use tick::{RunEnforcementTickUseCase, TickReport};
