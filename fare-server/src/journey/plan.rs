//! Journey planning.

use crate::domain::{FareResult, Route, ShapePoint, Stop};
use crate::fare::{FareConfig, FareResolver};
use crate::geo::haversine_km;
use crate::gtfs::GtfsTables;
use crate::stops::resolve_stop;

use super::config::JourneyConfig;

/// Errors from journey planning.
///
/// `SameStop` is a validation precondition checked on the raw query
/// strings before any resolution work; the NotFound variants identify
/// which endpoint failed to resolve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JourneyError {
    /// The origin query did not match any stop.
    #[error("origin stop not found: {0}")]
    OriginNotFound(String),

    /// The destination query did not match any stop.
    #[error("destination stop not found: {0}")]
    DestinationNotFound(String),

    /// Origin and destination name the same stop.
    #[error("origin and destination are the same stop")]
    SameStop,
}

/// A planned single-leg journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// The route the leg runs on (first available, or a placeholder).
    pub route: Route,

    /// Origin first, destination second.
    pub stops: Vec<Stop>,

    /// Great-circle distance between the stops, rounded to 2 decimals.
    pub distance_km: f64,

    /// Estimated travel time in whole minutes.
    pub estimated_minutes: i64,

    /// The resolved fare for the leg.
    pub fare: FareResult,

    /// Route geometry, or a straight two-point line when none matched.
    pub shape: Vec<ShapePoint>,
}

/// Plan a single-leg journey between two named stops.
pub fn plan_journey(
    tables: &GtfsTables,
    fare_config: &FareConfig,
    config: &JourneyConfig,
    from_name: &str,
    to_name: &str,
) -> Result<Journey, JourneyError> {
    // Cheap precondition: identical queries never need a table scan.
    if from_name.trim().eq_ignore_ascii_case(to_name.trim()) {
        return Err(JourneyError::SameStop);
    }

    let origin = resolve_stop(&tables.stops, from_name)
        .ok_or_else(|| JourneyError::OriginNotFound(from_name.to_string()))?;
    let destination = resolve_stop(&tables.stops, to_name)
        .ok_or_else(|| JourneyError::DestinationNotFound(to_name.to_string()))?;

    // Two different queries can still resolve to one stop.
    if origin.stop_id == destination.stop_id {
        return Err(JourneyError::SameStop);
    }

    let route = tables
        .routes
        .first()
        .cloned()
        .unwrap_or_else(Route::placeholder);

    let fare = FareResolver::new(tables, fare_config).calculate(
        &origin.stop_id,
        &destination.stop_id,
        Some(&route.route_id),
    );

    let distance_km = haversine_km(
        origin.stop_lat,
        origin.stop_lon,
        destination.stop_lat,
        destination.stop_lon,
    );

    let shape = leg_shape(tables, &route, origin, destination);

    Ok(Journey {
        stops: vec![origin.clone(), destination.clone()],
        distance_km: (distance_km * 100.0).round() / 100.0,
        estimated_minutes: config.estimate_minutes(distance_km),
        fare,
        shape,
        route,
    })
}

/// Matched route geometry, or a straight line between the two stops.
fn leg_shape(tables: &GtfsTables, route: &Route, origin: &Stop, destination: &Stop) -> Vec<ShapePoint> {
    let matched = tables.route_shapes(&route.route_short_name);
    if !matched.is_empty() {
        return matched.into_iter().cloned().collect();
    }

    vec![
        ShapePoint {
            shape_id: "direct".to_string(),
            shape_pt_lat: origin.stop_lat,
            shape_pt_lon: origin.stop_lon,
            shape_pt_sequence: 0,
        },
        ShapePoint {
            shape_id: "direct".to_string(),
            shape_pt_lat: destination.stop_lat,
            shape_pt_lon: destination.stop_lon,
            shape_pt_sequence: 1,
        },
    ]
}
