//! Network Service Gateway
//!
//! Abstract trait defining the operations available on the network resource.

use async_trait::async_trait;

use crate::domain::models::network::{CreateNetworkParameters, Network, NetworkId, NetworkQuery};
use crate::shared::errors::ClientError;

/// Service trait for network operations against the networking API
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// List all networks visible to the caller
    async fn networks(&self) -> Result<Vec<Network>, ClientError>;

    /// List networks matching the given filter
    async fn query_networks(&self, query: &NetworkQuery) -> Result<Vec<Network>, ClientError>;

    /// Get a single network by its ID
    async fn network(&self, id: &NetworkId) -> Result<Network, ClientError>;

    /// IDs of all networks with the given name, in server order
    async fn network_ids_by_name(&self, name: &str) -> Result<Vec<NetworkId>, ClientError>;

    /// Create a network, returning it as echoed by the server
    async fn create_network(&self, params: &CreateNetworkParameters) -> Result<Network, ClientError>;

    /// Delete a network by name or ID
    async fn delete_network(&self, name_or_id: &str) -> Result<(), ClientError>;
}
