pub mod block_config;
pub mod enforcement;

pub use block_config::{GetBlockConfigUseCase, UpdateBlockConfigUseCase};
pub use enforcement::{
    ApplyEnforcementUseCase, CleanupReport, CleanupUseCase, EnforcementReport, HandleConfigChangeUseCase,
    RunEnforcementTickUseCase, TickReport,
};
