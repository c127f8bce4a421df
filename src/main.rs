use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use dotenv::dotenv;
use roombook_api::config::ApiConfig;
use roombook_client::RestClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Client for the booking backend
    let backend = RestClient::new(
        &config.backend_url,
        Duration::from_secs(config.request_timeout),
    )?;

    // Start API server
    roombook_api::start_server(config, Arc::new(backend)).await?;

    Ok(())
}
