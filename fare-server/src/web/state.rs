//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::crowd::{ClassifierClient, GeoBounds, RushHours};
use crate::fare::FareConfig;
use crate::gtfs::GtfsStore;
use crate::journey::JourneyConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Reloadable GTFS tables.
    pub gtfs: GtfsStore,

    /// Client for the external crowd-level model service.
    pub classifier: Arc<ClassifierClient>,

    /// Fare resolution configuration.
    pub fare_config: Arc<FareConfig>,

    /// Journey estimation configuration.
    pub journey_config: Arc<JourneyConfig>,

    /// Accepted coordinate bounds for prediction requests.
    pub bounds: Arc<GeoBounds>,

    /// Rush-hour windows for feature derivation.
    pub rush_hours: Arc<RushHours>,

    /// Directory the fare export writes to.
    pub export_dir: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        gtfs: GtfsStore,
        classifier: ClassifierClient,
        fare_config: FareConfig,
        journey_config: JourneyConfig,
        bounds: GeoBounds,
        rush_hours: RushHours,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            gtfs,
            classifier: Arc::new(classifier),
            fare_config: Arc::new(fare_config),
            journey_config: Arc::new(journey_config),
            bounds: Arc::new(bounds),
            rush_hours: Arc::new(rush_hours),
            export_dir: Arc::new(export_dir),
        }
    }
}
