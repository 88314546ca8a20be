//! Domain Layer
//!
//! Contains the value types and gateway traits (ports) for the networking API.
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{Authenticator, NetworkService};
pub use models::network::{CreateNetworkParameters, Network, NetworkId, NetworkQuery};
