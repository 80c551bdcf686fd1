//! goalgate infrastructure: filesystem, network and OS adapters behind the
//! application ports.
pub mod config_store;
pub mod remote;
pub mod status;
pub mod system;
