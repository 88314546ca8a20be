//! Common test utilities for client integration tests
//!
//! Provides a mock networking API server and the fixtures shared by the
//! network client tests.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Match, Mock, MockBuilder, MockServer, Request, ResponseTemplate};

use neutron_network_client::domain::models::network::{Network, NetworkId};
use neutron_network_client::infrastructure::driven_adapters::{NeutronNetworkClient, SimpleAuthenticator};

/// Token every fixture expects in the `X-Auth-Token` header
pub const TEST_TOKEN: &str = "eaaafd18-0fed-4b3a-81b4-663c99ec1cbb";

/// Test server context
pub struct TestServer {
    pub server: MockServer,
    pub client: NeutronNetworkClient,
}

impl TestServer {
    /// Start a mock server and a client pointed at it
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = NeutronNetworkClient::new(Arc::new(SimpleAuthenticator::new(TEST_TOKEN, server.uri())));

        Self { server, client }
    }

    /// Expect exactly one authenticated request with the given method and path
    pub fn expect(&self, http_method: &str, request_path: &str) -> MockBuilder {
        Mock::given(method(http_method))
            .and(path(request_path))
            .and(header("X-Auth-Token", TEST_TOKEN))
    }

    /// Mount a mock that must be hit exactly once
    pub async fn mount_once(&self, builder: MockBuilder, response: ResponseTemplate) {
        builder.respond_with(response).expect(1).mount(&self.server).await;
    }
}

/// Matches the raw, still-encoded query string exactly
pub struct ExactQuery(pub &'static str);

impl Match for ExactQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == Some(self.0)
    }
}

/// Matches requests that carry no query string
pub struct NoQuery;

impl Match for NoQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none()
    }
}

/// The network every fixture returns
pub fn sample_network() -> Network {
    Network {
        id: NetworkId::from("16470140hb"),
        name: "networkName".to_string(),
        status: "active".to_string(),
        subnets: vec!["10.3.5.2".to_string(), "12.34.1.4".to_string()],
        tenant_id: "tenantID".to_string(),
        router_external: true,
        admin_state_up: false,
        shared: true,
        port_security_enabled: false,
    }
}

/// `{"networks": [sample]}`
pub fn networks_body() -> serde_json::Value {
    json!({ "networks": [sample_network()] })
}

/// `{"network": sample}`
pub fn network_body() -> serde_json::Value {
    json!({ "network": sample_network() })
}

/// Neutron-style error body
pub fn neutron_error_body(kind: &str, message: &str) -> serde_json::Value {
    json!({
        "NeutronError": {
            "type": kind,
            "message": message,
            "detail": ""
        }
    })
}
