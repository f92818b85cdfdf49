use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fare_server::crowd::{ClassifierClient, ClassifierConfig, GeoBounds, RushHours};
use fare_server::fare::FareConfig;
use fare_server::gtfs::GtfsStore;
use fare_server::journey::JourneyConfig;
use fare_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let gtfs_dir =
        PathBuf::from(std::env::var("GTFS_DIR").unwrap_or_else(|_| "dataset/gtfs".to_string()));
    let export_dir =
        PathBuf::from(std::env::var("EXPORT_DIR").unwrap_or_else(|_| "output".to_string()));
    let classifier_url =
        std::env::var("CLASSIFIER_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);

    info!(dir = %gtfs_dir.display(), "loading GTFS data");
    // The service starts even when the data is missing; requests answer
    // 500 until a reload succeeds.
    let gtfs = match GtfsStore::load(&gtfs_dir) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "GTFS data unavailable, starting without tables");
            GtfsStore::empty(&gtfs_dir)
        }
    };

    let classifier = ClassifierClient::new(ClassifierConfig::new(classifier_url))
        .expect("failed to create classifier client");

    let state = AppState::new(
        gtfs,
        classifier,
        FareConfig::default(),
        JourneyConfig::default(),
        GeoBounds::default(),
        RushHours::default(),
        export_dir,
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "fare service listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
