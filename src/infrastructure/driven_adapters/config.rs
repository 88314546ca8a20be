//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::network::NetworkQuery;

/// Networking API endpoint configuration
#[derive(Clone, Deserialize)]
pub struct NeutronConfig {
    pub service_url: String,
    pub token: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for NeutronConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeutronConfig")
            .field("service_url", &self.service_url)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub neutron: NeutronConfig,
    /// Filter applied when listing networks from the command line
    #[serde(default)]
    pub query: NetworkQuery,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__NEUTRON__TOKEN)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
