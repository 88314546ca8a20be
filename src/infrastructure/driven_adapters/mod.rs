//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Networking API client
//! - Static credentials
//! - Configuration

pub mod authenticator;
pub mod config;
pub mod neutron;

pub use authenticator::SimpleAuthenticator;
pub use config::AppConfig;
pub use neutron::NeutronNetworkClient;
