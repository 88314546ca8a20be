//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod authenticator;
pub mod network_service;

pub use authenticator::Authenticator;
pub use network_service::NetworkService;
