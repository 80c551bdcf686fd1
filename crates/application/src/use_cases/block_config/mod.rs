pub mod get;
pub mod update;

pub use get::GetBlockConfigUseCase;
pub use update::UpdateBlockConfigUseCase;
