use crate::ports::BlockConfigRepository;
use goalgate_domain::BlockConfig;
use std::sync::Arc;

pub struct GetBlockConfigUseCase {
    repository: Arc<dyn BlockConfigRepository>,
}

impl GetBlockConfigUseCase {
    pub fn new(repository: Arc<dyn BlockConfigRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> BlockConfig {
        self.repository.load().await
    }
}
