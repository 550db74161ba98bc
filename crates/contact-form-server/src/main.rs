mod routes;

use anyhow::{Context, Result};
use contact_form::{Config, HttpSubmissionClient};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut config = Config::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    if let Ok(base_url) = std::env::var("CONTACT_ENDPOINT") {
        config.endpoint.base_url = base_url;
    }
    config.validate()?;

    let client = HttpSubmissionClient::from_config(&config.endpoint)?;
    info!(endpoint = %client.endpoint(), "Submissions go to contact endpoint");

    if config.dev.mock_endpoint {
        info!("Mock contact endpoint: enabled");
    }

    let state = routes::AppState::new(Arc::new(client), &config.form);
    let app = routes::router(state, config.dev.mock_endpoint);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
