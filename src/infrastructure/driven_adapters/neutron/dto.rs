//! Wire envelopes for the networking API.

use serde::{Deserialize, Serialize};

use crate::domain::models::network::{CreateNetworkParameters, Network, NetworkId};

/// `{"networks": [...]}`
#[derive(Debug, Deserialize)]
pub(super) struct NetworksEnvelope {
    pub networks: Vec<Network>,
}

/// `{"network": {...}}`
#[derive(Debug, Deserialize)]
pub(super) struct NetworkEnvelope {
    pub network: Network,
}

/// Response to `?fields=id`, where each entry carries only its ID
#[derive(Debug, Deserialize)]
pub(super) struct NetworkIdsEnvelope {
    pub networks: Vec<NetworkIdEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct NetworkIdEntry {
    pub id: NetworkId,
}

/// Body of a create request
#[derive(Debug, Serialize)]
pub(super) struct CreateNetworkEnvelope<'a> {
    pub network: &'a CreateNetworkParameters,
}

#[derive(Debug, Deserialize)]
struct NeutronErrorEnvelope {
    #[serde(rename = "NeutronError")]
    neutron_error: NeutronErrorDetail,
}

#[derive(Debug, Deserialize)]
struct NeutronErrorDetail {
    message: String,
}

/// Human-readable message for an error response body
///
/// Prefers the `NeutronError.message` field, then the raw body, then the
/// status reason phrase.
pub(super) fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(envelope) = serde_json::from_str::<NeutronErrorEnvelope>(body) {
        return envelope.neutron_error.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        trimmed.to_string()
    }
}
