use std::net::TcpListener;
use std::sync::Arc;
use secrecy::ExposeSecret;

use premier_results_api::run;
use premier_results_api::config::settings::get_config;
use premier_results_api::services::FootballDataClient;
use premier_results_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "premier-results-api".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    if config.football_data.api_key.expose_secret().is_empty() {
        tracing::warn!("No football-data API key configured. Set FOOTBALL_DATA_API_KEY.");
    }

    let client = match FootballDataClient::new(&config.football_data) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Failed to create football-data client: {}", e);
            std::process::exit(1);
        }
    };

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("API corriendo en http://{}", address);

    run(
        listener,
        Arc::new(client),
        config.application.allowed_origins.clone()
    )?.await
}
