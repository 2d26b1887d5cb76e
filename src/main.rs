use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use facility_dashboard::config::Config;
use facility_dashboard::models::Catalog;
use facility_dashboard::source::HttpDataSource;
use facility_dashboard::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting Facility Dashboard Backend");
    tracing::info!("Upstream facility API: {}", config.upstream_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    let source = Arc::new(HttpDataSource::new(&config.upstream_url)?);

    let state = AppState {
        source,
        catalog: Arc::new(Catalog::default()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
