//! goalgate application layer: ports and enforcement use cases
pub mod ports;
pub mod services;
pub mod use_cases;
