use super::Adapters;
use goalgate_application::ports::BlockConfigRepository;
use goalgate_application::use_cases::{
    ApplyEnforcementUseCase, CleanupUseCase, GetBlockConfigUseCase, HandleConfigChangeUseCase,
    RunEnforcementTickUseCase, UpdateBlockConfigUseCase,
};
use goalgate_domain::{PollerError, Settings};
use goalgate_infrastructure::config_store::JsonBlockConfigRepository;
use std::sync::Arc;

pub struct UseCases {
    pub tick: Arc<RunEnforcementTickUseCase>,
    pub config_change: Arc<HandleConfigChangeUseCase>,
    pub cleanup: Arc<CleanupUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        let apply = Arc::new(ApplyEnforcementUseCase::new(
            adapters.processes.clone(),
            adapters.hosts.clone(),
        ));

        Self {
            tick: Arc::new(RunEnforcementTickUseCase::new(
                adapters.goal_source.clone(),
                adapters.config_repo.clone(),
                adapters.snapshots.clone(),
                apply.clone(),
            )),
            config_change: Arc::new(HandleConfigChangeUseCase::new(
                adapters.goal_source.clone(),
                adapters.config_repo.clone(),
                apply,
            )),
            cleanup: Arc::new(CleanupUseCase::new(
                adapters.config_repo.clone(),
                adapters.processes.clone(),
                adapters.hosts.clone(),
                adapters.heartbeat.clone(),
            )),
        }
    }
}

/// Use cases behind `goalgate config`. Only the block config record is
/// opened; no enforcement adapters are built.
pub struct ConfigUseCases {
    pub get: Arc<GetBlockConfigUseCase>,
    pub update: Arc<UpdateBlockConfigUseCase>,
}

impl ConfigUseCases {
    pub fn new(repo: Arc<dyn BlockConfigRepository>) -> Self {
        Self {
            get: Arc::new(GetBlockConfigUseCase::new(repo.clone())),
            update: Arc::new(UpdateBlockConfigUseCase::new(repo)),
        }
    }

    pub async fn open(settings: &Settings) -> Result<Self, PollerError> {
        let repo = JsonBlockConfigRepository::open(settings.paths.block_config_path()).await?;
        Ok(Self::new(Arc::new(repo)))
    }
}
