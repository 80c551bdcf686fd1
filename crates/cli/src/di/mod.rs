pub mod adapters;
pub mod use_cases;

pub use adapters::Adapters;
pub use use_cases::{ConfigUseCases, UseCases};
