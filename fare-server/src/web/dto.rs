//! Data transfer objects for web requests and responses.
//!
//! Fare responses use snake_case keys and journey responses camelCase,
//! matching the JSON the original mobile clients already consume.

use serde::{Deserialize, Serialize};

use crate::crowd::{Prediction, PredictionFeatures};
use crate::domain::{FareResult, ShapePoint};
use crate::journey::Journey;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// A stop in listing and search responses.
#[derive(Debug, Serialize)]
pub struct StopSummary {
    pub stop_id: String,
    pub stop_name: String,
}

/// Response for the full stop listing.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<StopSummary>,
    pub count: usize,
}

/// Query parameters for stop search.
#[derive(Debug, Deserialize)]
pub struct StopSearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Response for stop search.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopSummary>,
    pub count: usize,
    pub query: String,
}

/// Request to calculate a fare between two named stops.
#[derive(Debug, Deserialize)]
pub struct FareRequest {
    /// Origin stop name (free text).
    pub origin: String,

    /// Destination stop name (free text).
    pub destination: String,

    /// Optional route id for route-scoped pricing.
    pub route_id: Option<String>,
}

/// Response for fare calculation.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    /// Origin as queried.
    pub origin: String,

    /// Destination as queried.
    pub destination: String,

    /// Canonical name of the resolved origin stop.
    pub actual_origin_name: String,

    /// Canonical name of the resolved destination stop.
    pub actual_destination_name: String,

    pub origin_id: String,
    pub destination_id: String,

    /// Base fare before GST.
    pub fare: f64,

    pub currency: String,
    pub fare_id: String,
    pub route_id: Option<String>,

    /// Distance in km: measured when the fare came from the distance
    /// fallback, otherwise approximated back from the price.
    pub distance_km: f64,

    pub gst: f64,
    pub total: f64,

    /// Which fallback stage produced the fare.
    pub source: crate::domain::FareSource,

    pub message: &'static str,

    /// Long name of the requested route, when it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
}

/// Query parameters for journey planning.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyQuery {
    pub from_stop: String,
    pub to_stop: String,
}

/// One journey option; the endpoint returns an array of these.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyOption {
    pub route: RouteDto,
    pub stops: Vec<StopDto>,
    pub metrics: JourneyMetrics,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub shapes: Vec<ShapePointDto>,
}

/// Route descriptor for journey responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub route_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    pub route_type: i32,
}

/// Stop descriptor for journey responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

/// Journey metrics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyMetrics {
    pub distance: f64,
    pub estimated_time_minutes: i64,
    pub fare: f64,
}

/// One polyline point of a journey shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePointDto {
    pub shape_pt_lat: f64,
    pub shape_pt_lon: f64,
    pub shape_pt_sequence: u32,
}

/// Response for the prediction endpoint.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: Prediction,
    pub input: PredictionFeatures,
}

/// Response for a successful reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub status: &'static str,
    pub stops: usize,
}

/// Response for the fare export endpoint.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub export_path: String,
    pub summary: crate::gtfs::ExportSummary,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Validation error response: every violation, together.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: &'static str,
    pub details: Vec<String>,
    pub success: bool,
}

// Conversion implementations

impl JourneyOption {
    /// Placeholder schedule times; the feed carries no timetable.
    const DEPARTURE: &'static str = "09:00 AM";
    const ARRIVAL: &'static str = "09:30 AM";

    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            route: RouteDto {
                route_id: journey.route.route_id.to_string(),
                route_short_name: journey.route.route_short_name.clone(),
                route_long_name: journey.route.route_long_name.clone(),
                route_type: journey.route.route_type,
            },
            stops: journey
                .stops
                .iter()
                .map(|s| StopDto {
                    stop_id: s.stop_id.to_string(),
                    stop_name: s.stop_name.clone(),
                    stop_lat: s.stop_lat,
                    stop_lon: s.stop_lon,
                })
                .collect(),
            metrics: JourneyMetrics {
                distance: journey.distance_km,
                estimated_time_minutes: journey.estimated_minutes,
                fare: journey.fare.price,
            },
            departure_time: Self::DEPARTURE,
            arrival_time: Self::ARRIVAL,
            shapes: journey.shape.iter().map(ShapePointDto::from_point).collect(),
        }
    }
}

impl ShapePointDto {
    fn from_point(point: &ShapePoint) -> Self {
        Self {
            shape_pt_lat: point.shape_pt_lat,
            shape_pt_lon: point.shape_pt_lon,
            shape_pt_sequence: point.shape_pt_sequence,
        }
    }
}

impl FareResponse {
    /// Distance reported when the resolver measured none: approximated
    /// back from the stage-fare price at roughly 2 INR/km above the
    /// base fare, with a 1 km floor.
    fn approximate_distance(price: f64) -> f64 {
        if price > 5.0 { (price - 5.0) / 2.0 } else { 1.0 }
    }

    /// Build the response from a fare result plus resolution context.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        origin_query: String,
        destination_query: String,
        origin_name: String,
        destination_name: String,
        origin_id: String,
        destination_id: String,
        fare: &FareResult,
        gst_rate: f64,
        route_name: Option<String>,
    ) -> Self {
        let distance_km = fare
            .distance_km
            .unwrap_or_else(|| Self::approximate_distance(fare.price));

        Self {
            origin: origin_query,
            destination: destination_query,
            actual_origin_name: origin_name,
            actual_destination_name: destination_name,
            origin_id,
            destination_id,
            fare: fare.price,
            currency: fare.currency.clone(),
            fare_id: fare.fare_id.to_string(),
            route_id: fare.route_id.as_ref().map(|r| r.to_string()),
            distance_km,
            gst: fare.price * gst_rate,
            total: fare.price * (1.0 + gst_rate),
            source: fare.source,
            message: fare.source.message(),
            route_name,
        }
    }
}
