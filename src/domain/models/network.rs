//! Network Domain Model
//!
//! Represents a virtual network as reported by the networking API, along
//! with the filter and creation parameters the client sends.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Newtype wrapper for the server-assigned Network ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Create a NetworkId from the raw identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Network as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: NetworkId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subnets: Vec<String>,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(rename = "router:external", default)]
    pub router_external: bool,
    #[serde(default)]
    pub admin_state_up: bool,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub port_security_enabled: bool,
}

/// Filter criteria for listing networks
///
/// Unset fields are left out of the query string entirely, so an explicit
/// `Some(false)` is sent while `None` is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NetworkQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub router_external: Option<bool>,
    pub admin_state_up: Option<bool>,
    pub shared: Option<bool>,
}

impl NetworkQuery {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_router_external(mut self, router_external: bool) -> Self {
        self.router_external = Some(router_external);
        self
    }

    #[must_use]
    pub fn with_admin_state_up(mut self, admin_state_up: bool) -> Self {
        self.admin_state_up = Some(admin_state_up);
        self
    }

    #[must_use]
    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Key/value pairs for every set filter, sorted by key
    ///
    /// Empty strings count as unset.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let text = |value: &Option<String>| value.as_deref().filter(|v| !v.is_empty()).map(str::to_string);
        let flag = |value: Option<bool>| value.map(|v| v.to_string());

        let pairs = [
            ("admin_state_up", flag(self.admin_state_up)),
            ("name", text(&self.name)),
            ("router:external", flag(self.router_external)),
            ("shared", flag(self.shared)),
            ("status", text(&self.status)),
        ];

        pairs
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }

    /// Whether no filter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }
}

/// Fields settable when creating a network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct CreateNetworkParameters {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,

    pub admin_state_up: bool,

    pub shared: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "tenant_id must be at most 255 characters"))]
    pub tenant_id: Option<String>,
}
