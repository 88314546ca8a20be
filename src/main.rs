//! Neutron Network Client - Command-line Entry Point
//!
//! Lists the networks matching the configured filter as JSON.

use neutron_network_client::domain::gateways::NetworkService;
use neutron_network_client::infrastructure::driven_adapters::config::AppConfig;
use neutron_network_client::infrastructure::driven_adapters::NeutronNetworkClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neutron_network_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(service_url = %config.neutron.service_url, "Configuration loaded successfully");

    let client = NeutronNetworkClient::from_config(&config.neutron)?;

    let networks = client.query_networks(&config.query).await?;
    tracing::info!(count = networks.len(), "Networks retrieved");

    println!("{}", serde_json::to_string_pretty(&networks)?);

    Ok(())
}
