use stop_server::config::AppConfig;
use stop_server::guide::GuideConfig;
use stop_server::narrative::{GeminiClient, GeminiConfig};
use stop_server::store::{SqliteStopStore, StopStore};
use stop_server::upstream::{TransportClient, TransportConfig};
use stop_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stop_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenvy::dotenv() {
        info!(error = %e, "no .env file loaded");
    }
    let config = AppConfig::from_env()?;

    let store = SqliteStopStore::connect(&config.database_url).await?;
    info!(database = %config.database_url, stops = store.count().await?, "stop cache opened");

    let transit = TransportClient::new(
        TransportConfig::new()
            .with_base_url(&config.transport_base_url)
            .with_timeout(config.upstream_timeout_secs),
    )?;

    let narrator = GeminiClient::new(
        GeminiConfig::new(&config.google_api_key).with_model(&config.gemini_model),
    )?;

    let state = AppState::new(
        store,
        transit,
        narrator,
        config.route_config(),
        GuideConfig::new(&config.guide_path),
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "stop cache listening");
    info!("API endpoints:");
    info!("  GET    /health                  - Health check");
    info!("  PUT    /stops?query=            - Sync stops from the transit API");
    info!("  GET    /stops/{{id}}?include=     - Read a stop");
    info!("  PUT    /stops/{{id}}              - Update a stop");
    info!("  DELETE /stops/{{id}}              - Delete a stop");
    info!("  GET    /operator-profiles/{{id}}  - Operator profiles");
    info!("  GET    /guide                   - Tourism guide");

    axum::serve(listener, app).await?;
    Ok(())
}
