use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fare_server::tariff::{FareEstimator, TariffTable};
use fare_server::tfl::{JourneySource, MockTflClient, TflClient, TflConfig};
use fare_server::web::{AppState, create_router};

/// Port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = match std::env::var("PORT") {
        Ok(p) => p.parse().expect("PORT must be a port number"),
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // Load tariff
    let tariff = match std::env::var("TARIFF_FILE") {
        Ok(path) => {
            let table = TariffTable::from_file(&path).expect("Failed to load tariff file");
            info!(%path, modes = table.len(), "loaded tariff");
            table
        }
        Err(_) => TariffTable::default(),
    };
    let estimator = FareEstimator::new(Arc::new(tariff));

    if let Ok(dir) = std::env::var("TFL_MOCK_DIR") {
        let mock = MockTflClient::from_dir(&dir).expect("Failed to load mock journey data");
        info!(%dir, journeys = mock.journey_count(), "serving mock journey planner data");
        serve(addr, AppState::new(mock, estimator)).await;
        return;
    }

    let mut config = TflConfig::new();
    match std::env::var("TFL_APP_KEY") {
        Ok(key) => config = config.with_app_key(key),
        Err(_) => warn!("TFL_APP_KEY not set; requests will be rate limited"),
    }
    if let Ok(url) = std::env::var("TFL_BASE_URL") {
        config = config.with_base_url(url);
    }
    let client = TflClient::new(config).expect("Failed to create journey planner client");

    serve(addr, AppState::new(client, estimator)).await;
}

async fn serve<S>(addr: SocketAddr, state: AppState<S>)
where
    S: JourneySource + Send + Sync + 'static,
{
    let app = create_router(state);

    info!(%addr, "fare planner listening");
    info!("  GET /health           - Health check");
    info!("  GET /get_directions/  - Cheapest route between origin and destination");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
