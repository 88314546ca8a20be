//! Find Network By Name Use Case
//!
//! Resolves a network name to exactly one network.

use std::sync::Arc;

use crate::domain::gateways::NetworkService;
use crate::domain::models::network::Network;
use crate::shared::errors::UseCaseError;

/// Use case for getting a network by its name
pub struct FindNetworkByNameUseCase {
    network_service: Arc<dyn NetworkService>,
}

impl FindNetworkByNameUseCase {
    /// Create a new FindNetworkByNameUseCase
    #[must_use]
    pub fn new(network_service: Arc<dyn NetworkService>) -> Self {
        Self { network_service }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no network has this name.
    /// Returns `UseCaseError::Ambiguous` if more than one network has this name.
    /// Returns `UseCaseError::Client` if a request fails.
    pub async fn execute(&self, name: &str) -> Result<Network, UseCaseError> {
        tracing::debug!(network_name = %name, "Finding network by name");

        let ids = self.network_service.network_ids_by_name(name).await?;

        let id = match ids.as_slice() {
            [] => {
                tracing::warn!(network_name = %name, "Network not found");
                return Err(UseCaseError::NotFound {
                    resource: "Network".to_string(),
                    name: name.to_string(),
                });
            }
            [id] => id,
            _ => {
                tracing::warn!(network_name = %name, matches = ids.len(), "Network name is ambiguous");
                return Err(UseCaseError::Ambiguous {
                    name: name.to_string(),
                    matches: ids.len(),
                });
            }
        };

        let network = self.network_service.network(id).await?;

        tracing::debug!(network_name = %name, network_id = %id, "Network found");
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::{CreateNetworkParameters, NetworkId, NetworkQuery};
    use crate::shared::errors::ClientError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNetworkService {
        ids_result: Mutex<Option<Result<Vec<NetworkId>, ClientError>>>,
        network_result: Mutex<Option<Result<Network, ClientError>>>,
        requested_id: Mutex<Option<NetworkId>>,
    }

    impl MockNetworkService {
        fn new() -> Self {
            Self {
                ids_result: Mutex::new(None),
                network_result: Mutex::new(None),
                requested_id: Mutex::new(None),
            }
        }

        fn with_ids(self, result: Result<Vec<NetworkId>, ClientError>) -> Self {
            *self.ids_result.lock().unwrap() = Some(result);
            self
        }

        fn with_network(self, result: Result<Network, ClientError>) -> Self {
            *self.network_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl NetworkService for MockNetworkService {
        async fn networks(&self) -> Result<Vec<Network>, ClientError> {
            Ok(vec![])
        }

        async fn query_networks(&self, _query: &NetworkQuery) -> Result<Vec<Network>, ClientError> {
            Ok(vec![])
        }

        async fn network(&self, id: &NetworkId) -> Result<Network, ClientError> {
            *self.requested_id.lock().unwrap() = Some(id.clone());
            self.network_result.lock().unwrap().take().unwrap_or_else(|| {
                Err(ClientError::NotFound {
                    resource: "network".to_string(),
                    id: id.to_string(),
                })
            })
        }

        async fn network_ids_by_name(&self, _name: &str) -> Result<Vec<NetworkId>, ClientError> {
            self.ids_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
        }

        async fn create_network(&self, _params: &CreateNetworkParameters) -> Result<Network, ClientError> {
            Err(ClientError::Validation(vec![]))
        }

        async fn delete_network(&self, _name_or_id: &str) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn create_test_network(id: &str) -> Network {
        Network {
            id: NetworkId::from(id),
            name: "networkName".to_string(),
            status: "ACTIVE".to_string(),
            subnets: vec!["10.3.5.2".to_string()],
            tenant_id: "tenantID".to_string(),
            router_external: false,
            admin_state_up: true,
            shared: false,
            port_security_enabled: true,
        }
    }

    #[tokio::test]
    async fn should_return_network_when_name_is_unique() {
        let network = create_test_network("net-1");
        let service = Arc::new(
            MockNetworkService::new()
                .with_ids(Ok(vec![NetworkId::from("net-1")]))
                .with_network(Ok(network.clone())),
        );

        let use_case = FindNetworkByNameUseCase::new(service.clone());
        let result = use_case.execute("networkName").await;

        assert_eq!(result.unwrap(), network);
        assert_eq!(
            service.requested_id.lock().unwrap().clone(),
            Some(NetworkId::from("net-1"))
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_network_matches() {
        let service = Arc::new(MockNetworkService::new().with_ids(Ok(vec![])));

        let use_case = FindNetworkByNameUseCase::new(service);
        let result = use_case.execute("missing").await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_return_ambiguous_when_several_networks_match() {
        let service = Arc::new(
            MockNetworkService::new().with_ids(Ok(vec![NetworkId::from("a"), NetworkId::from("b")])),
        );

        let use_case = FindNetworkByNameUseCase::new(service);
        let result = use_case.execute("dup").await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Ambiguous { matches: 2, .. }
        ));
    }

    #[tokio::test]
    async fn should_propagate_client_errors() {
        let service = Arc::new(MockNetworkService::new().with_ids(Err(ClientError::UnexpectedStatus {
            status: 500,
            message: "boom".to_string(),
        })));

        let use_case = FindNetworkByNameUseCase::new(service);
        let result = use_case.execute("any").await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Client(ClientError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
