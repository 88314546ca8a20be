//! Network Use Cases
//!
//! Workflows that address networks by name rather than ID.

mod delete_network_by_name;
mod find_network_by_name;

pub use delete_network_by_name::DeleteNetworkByNameUseCase;
pub use find_network_by_name::FindNetworkByNameUseCase;
