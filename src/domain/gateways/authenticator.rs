//! Authenticator Gateway
//!
//! Supplies the token and service endpoint attached to every request.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::shared::errors::ClientError;

/// Source of credentials and service endpoints
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Token sent in the `X-Auth-Token` header, wiped when the caller drops it
    async fn token(&self) -> Result<Zeroizing<String>, ClientError>;

    /// Base URL of the given service type and API version
    async fn service_url(&self, service_type: &str, version: &str) -> Result<String, ClientError>;
}
