//! Neutron Network Client
//!
//! Implements the NetworkService trait over HTTP using reqwest.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::dto::{self, CreateNetworkEnvelope, NetworkEnvelope, NetworkIdsEnvelope, NetworksEnvelope};
use crate::domain::gateways::{Authenticator, NetworkService};
use crate::domain::models::network::{CreateNetworkParameters, Network, NetworkId, NetworkQuery};
use crate::infrastructure::driven_adapters::authenticator::SimpleAuthenticator;
use crate::infrastructure::driven_adapters::config::NeutronConfig;
use crate::shared::errors::ClientError;

const SERVICE_TYPE: &str = "network";
const API_VERSION: &str = "2.0";
const RESOURCE: &str = "network";
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// How a non-2xx status is interpreted depends on the request kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    Get,
    Create,
    Delete,
}

/// HTTP implementation of NetworkService
pub struct NeutronNetworkClient {
    http: reqwest::Client,
    authenticator: Arc<dyn Authenticator>,
}

impl NeutronNetworkClient {
    /// Create a client with a default HTTP transport
    #[must_use]
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self::with_http_client(reqwest::Client::new(), authenticator)
    }

    /// Create a client on top of an existing HTTP transport
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, authenticator: Arc<dyn Authenticator>) -> Self {
        Self { http, authenticator }
    }

    /// Build a client and static authenticator from configuration
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn from_config(config: &NeutronConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::with_http_client(
            builder.build()?,
            Arc::new(SimpleAuthenticator::from_config(config)),
        ))
    }

    async fn base_url(&self) -> Result<String, ClientError> {
        self.authenticator.service_url(SERVICE_TYPE, API_VERSION).await
    }

    /// Attach credentials and send
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&CreateNetworkParameters>,
    ) -> Result<Response, ClientError> {
        tracing::debug!(%method, %url, "Sending networking API request");

        let token = self.authenticator.token().await?;
        let mut token_header = HeaderValue::from_str(&token)
            .map_err(|_| ClientError::Unauthorized("Token is not a valid header value".to_string()))?;
        token_header.set_sensitive(true);

        let mut request = self
            .http
            .request(method, url)
            .header(AUTH_TOKEN_HEADER, token_header)
            .header(ACCEPT, "application/json");

        if let Some(params) = body {
            request = request.json(&CreateNetworkEnvelope { network: params });
        }

        Ok(request.send().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: Operation,
        target: &str,
    ) -> Result<T, ClientError> {
        let response = self.send(Method::GET, url, None).await?;
        let response = check_status(response, operation, target).await?;
        decode(response).await
    }
}

#[async_trait]
impl NetworkService for NeutronNetworkClient {
    async fn networks(&self) -> Result<Vec<Network>, ClientError> {
        self.query_networks(&NetworkQuery::default()).await
    }

    async fn query_networks(&self, query: &NetworkQuery) -> Result<Vec<Network>, ClientError> {
        let url = with_query(networks_url(&self.base_url().await?)?, &query.to_pairs());

        let envelope: NetworksEnvelope = self.get_json(url, Operation::List, "networks").await?;

        tracing::debug!(count = envelope.networks.len(), "Networks listed");
        Ok(envelope.networks)
    }

    async fn network(&self, id: &NetworkId) -> Result<Network, ClientError> {
        tracing::debug!(network_id = %id, "Getting network by ID");

        let url = network_url(&self.base_url().await?, id.as_str())?;
        let envelope: NetworkEnvelope = self.get_json(url, Operation::Get, id.as_str()).await?;

        Ok(envelope.network)
    }

    async fn network_ids_by_name(&self, name: &str) -> Result<Vec<NetworkId>, ClientError> {
        tracing::debug!(network_name = %name, "Looking up network IDs by name");

        let pairs = [("fields", "id".to_string()), ("name", name.to_string())];
        let url = with_query(networks_url(&self.base_url().await?)?, &pairs);
        let envelope: NetworkIdsEnvelope = self.get_json(url, Operation::List, name).await?;

        Ok(envelope.networks.into_iter().map(|entry| entry.id).collect())
    }

    async fn create_network(&self, params: &CreateNetworkParameters) -> Result<Network, ClientError> {
        tracing::info!(network_name = %params.name, "Creating network");

        params.validate()?;

        let url = networks_url(&self.base_url().await?)?;
        let response = self.send(Method::POST, url, Some(params)).await?;
        let response = check_status(response, Operation::Create, &params.name).await?;
        let envelope: NetworkEnvelope = decode(response).await?;

        tracing::info!(network_id = %envelope.network.id, "Network created successfully");
        Ok(envelope.network)
    }

    async fn delete_network(&self, name_or_id: &str) -> Result<(), ClientError> {
        tracing::info!(network = %name_or_id, "Deleting network");

        let url = network_url(&self.base_url().await?, name_or_id)?;
        let response = self.send(Method::DELETE, url, None).await?;
        check_status(response, Operation::Delete, name_or_id).await?;

        tracing::info!(network = %name_or_id, "Network deleted successfully");
        Ok(())
    }
}

/// `{base}/networks`
fn networks_url(base: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|()| ClientError::InvalidUrl {
            url: base.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        })?
        .pop_if_empty()
        .push("networks");

    Ok(url)
}

/// `{base}/networks/{id}` with the ID percent-encoded as one path segment
fn network_url(base: &str, id: &str) -> Result<Url, ClientError> {
    let mut url = networks_url(base)?;
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(id);
    }
    Ok(url)
}

/// Append form-urlencoded pairs in the order given
fn with_query(mut url: Url, pairs: &[(&str, String)]) -> Url {
    if !pairs.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(key, value)| (*key, value.as_str())));
    }
    url
}

/// Map non-2xx responses to the matching error kind
///
/// `target` names the request in logs; it becomes the `NotFound` id only for
/// requests addressing a single network.
async fn check_status(response: Response, operation: Operation, target: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(body) => dto::error_message(&body, status),
        Err(e) => {
            tracing::warn!(status = status.as_u16(), error = %e, "Failed to read error response body");
            format!(
                "{} (error body unreadable: {e})",
                status.canonical_reason().unwrap_or("unknown status")
            )
        }
    };
    tracing::warn!(status = status.as_u16(), network = %target, message = %message, "Networking API request failed");

    let not_found = || ClientError::NotFound {
        resource: RESOURCE.to_string(),
        id: target.to_string(),
    };

    Err(match (status, operation) {
        // A delete either succeeds or the network is treated as absent
        (_, Operation::Delete) => not_found(),
        (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => ClientError::Unauthorized(message),
        (StatusCode::NOT_FOUND, Operation::Get) => not_found(),
        (s, Operation::Create) if s.is_client_error() => ClientError::Validation(vec![message]),
        _ => ClientError::UnexpectedStatus {
            status: status.as_u16(),
            message,
        },
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!(error = %e, "Response body did not match expected shape");
        ClientError::Decode(e)
    })
}
