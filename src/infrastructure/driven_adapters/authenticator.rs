//! Static Authenticator
//!
//! Hands out a fixed token and service URL, e.g. from configuration or a
//! token obtained out of band.

use async_trait::async_trait;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::config::NeutronConfig;
use crate::domain::gateways::Authenticator;
use crate::shared::errors::ClientError;

/// Authenticator with a pre-issued token and a single service endpoint
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SimpleAuthenticator {
    token: String,
    service_url: String,
}

impl SimpleAuthenticator {
    #[must_use]
    pub fn new(token: impl Into<String>, service_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            service_url: service_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &NeutronConfig) -> Self {
        Self::new(config.token.clone(), config.service_url.clone())
    }
}

impl std::fmt::Debug for SimpleAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAuthenticator")
            .field("token", &"<redacted>")
            .field("service_url", &self.service_url)
            .finish()
    }
}

#[async_trait]
impl Authenticator for SimpleAuthenticator {
    async fn token(&self) -> Result<Zeroizing<String>, ClientError> {
        if self.token.is_empty() {
            return Err(ClientError::Unauthorized("No token configured".to_string()));
        }
        Ok(Zeroizing::new(self.token.clone()))
    }

    // A single endpoint serves every service type and version.
    async fn service_url(&self, _service_type: &str, _version: &str) -> Result<String, ClientError> {
        Ok(self.service_url.clone())
    }
}
