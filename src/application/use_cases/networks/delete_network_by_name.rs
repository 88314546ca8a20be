//! Delete Network By Name Use Case
//!
//! Deletes every network carrying the given name.

use std::sync::Arc;

use crate::domain::gateways::NetworkService;
use crate::domain::models::network::NetworkId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting networks by name
pub struct DeleteNetworkByNameUseCase {
    network_service: Arc<dyn NetworkService>,
}

impl DeleteNetworkByNameUseCase {
    /// Create a new DeleteNetworkByNameUseCase
    #[must_use]
    pub fn new(network_service: Arc<dyn NetworkService>) -> Self {
        Self { network_service }
    }

    /// Execute the use case, returning the IDs that were deleted
    ///
    /// Stops at the first failed delete; networks deleted before it stay deleted.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no network has this name.
    /// Returns `UseCaseError::Client` if a lookup or delete request fails.
    pub async fn execute(&self, name: &str) -> Result<Vec<NetworkId>, UseCaseError> {
        tracing::info!(network_name = %name, "Deleting networks by name");

        let ids = self.network_service.network_ids_by_name(name).await?;

        if ids.is_empty() {
            tracing::warn!(network_name = %name, "Network not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Network".to_string(),
                name: name.to_string(),
            });
        }

        for id in &ids {
            self.network_service.delete_network(id.as_str()).await?;
        }

        tracing::info!(network_name = %name, deleted = ids.len(), "Networks deleted successfully");
        Ok(ids)
    }
}
