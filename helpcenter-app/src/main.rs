//! # Help Center Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the shared payment client
//! - Create the payment service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helpcenter_gateway::{ClientSlot, build_client};
use helpcenter_hex::{PaymentService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,helpcenter_app=debug,helpcenter_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!(
        "Starting help center server on port {} ({} mode)",
        config.port,
        config.mode
    );
    tracing::info!("Using payment API: {}", config.api_url);

    // Build the payment client once and share it from here on
    let slot = ClientSlot::new(config.mode);
    let client = build_client(&slot, &config.credentials, &config.api_url);

    // Create the payment service
    let service = PaymentService::new(client, config.webhook_secret);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
