//! Domain Models
//!
//! Value types exchanged with the networking API.

pub mod network;

pub use network::{CreateNetworkParameters, Network, NetworkId, NetworkQuery};
