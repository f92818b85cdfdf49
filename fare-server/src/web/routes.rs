//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info};

use crate::crowd::{ClassifierError, PredictionRequest};
use crate::domain::RouteId;
use crate::fare::FareResolver;
use crate::gtfs::{GtfsError, export_fares};
use crate::journey::{JourneyError, plan_journey};
use crate::stops::{resolve_stop, search_stops};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/fare/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/stops/search", get(search_stops_handler))
        .route("/api/fare/calculate", post(calculate_fare))
        .route("/api/calculate_fare", post(calculate_fare))
        .route("/api/journey/plan", get(journey_plan))
        .route("/api/predict", post(predict))
        .route("/api/reload", post(reload))
        .route("/api/export-fares", get(export_fares_handler))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "BMTC Fare Calculation Service",
        version: "1.0",
    })
}

/// List all bus stops.
async fn list_stops(State(state): State<AppState>) -> Result<Json<StopsResponse>, AppError> {
    let tables = state.gtfs.get().await.ok_or(AppError::data_unavailable())?;

    let stops: Vec<StopSummary> = tables
        .stops
        .iter()
        .map(|s| StopSummary {
            stop_id: s.stop_id.to_string(),
            stop_name: s.stop_name.clone(),
        })
        .collect();

    let count = stops.len();
    Ok(Json(StopsResponse { stops, count }))
}

/// Search stops by name substring.
async fn search_stops_handler(
    State(state): State<AppState>,
    Query(query): Query<StopSearchQuery>,
) -> Result<Json<StopSearchResponse>, AppError> {
    let tables = state.gtfs.get().await.ok_or(AppError::data_unavailable())?;

    let stops: Vec<StopSummary> = search_stops(&tables.stops, &query.q)
        .into_iter()
        .map(|s| StopSummary {
            stop_id: s.stop_id.to_string(),
            stop_name: s.stop_name.clone(),
        })
        .collect();

    let count = stops.len();
    Ok(Json(StopSearchResponse {
        stops,
        count,
        query: query.q,
    }))
}

/// Calculate the fare between two named stops.
async fn calculate_fare(
    State(state): State<AppState>,
    Json(req): Json<FareRequest>,
) -> Result<Json<FareResponse>, AppError> {
    let tables = state.gtfs.get().await.ok_or(AppError::data_unavailable())?;

    let origin = resolve_stop(&tables.stops, &req.origin).ok_or_else(|| AppError::NotFound {
        message: format!("Origin stop \"{}\" not found", req.origin),
    })?;
    let destination =
        resolve_stop(&tables.stops, &req.destination).ok_or_else(|| AppError::NotFound {
            message: format!("Destination stop \"{}\" not found", req.destination),
        })?;

    let route_id = req.route_id.as_deref().map(RouteId::from);
    let route_name = route_id
        .as_ref()
        .and_then(|id| tables.route(id))
        .map(|r| r.route_long_name.clone());

    let fare = FareResolver::new(&tables, &state.fare_config).calculate(
        &origin.stop_id,
        &destination.stop_id,
        route_id.as_ref(),
    );

    info!(
        origin = %origin.stop_id,
        destination = %destination.stop_id,
        price = fare.price,
        source = ?fare.source,
        "fare calculated"
    );

    Ok(Json(FareResponse::build(
        req.origin,
        req.destination,
        origin.stop_name.clone(),
        destination.stop_name.clone(),
        origin.stop_id.to_string(),
        destination.stop_id.to_string(),
        &fare,
        state.fare_config.gst_rate,
        route_name,
    )))
}

/// Plan a single-leg journey between two named stops.
async fn journey_plan(
    State(state): State<AppState>,
    Query(query): Query<JourneyQuery>,
) -> Result<Json<Vec<JourneyOption>>, AppError> {
    if query.from_stop.trim().is_empty() || query.to_stop.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Origin and destination stops are required".to_string(),
        });
    }

    let tables = state.gtfs.get().await.ok_or(AppError::data_unavailable())?;

    let journey = plan_journey(
        &tables,
        &state.fare_config,
        &state.journey_config,
        &query.from_stop,
        &query.to_stop,
    )?;

    Ok(Json(vec![JourneyOption::from_journey(&journey)]))
}

/// Predict the crowd level for a stop at a time.
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let features = req
        .validate(&state.bounds, &state.rush_hours)
        .map_err(|details| AppError::Validation { details })?;

    let prediction = state.classifier.predict(&features).await?;

    info!(
        crowd_level = %prediction.crowd_level,
        confidence = prediction.confidence,
        "crowd level predicted"
    );

    Ok(Json(PredictResponse {
        success: true,
        prediction,
        input: features,
    }))
}

/// Reload the GTFS tables from disk.
async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let stops = state.gtfs.reload().await?;
    Ok(Json(ReloadResponse {
        status: "reloaded",
        stops,
    }))
}

/// Export the loaded fare data to CSV for analysis.
async fn export_fares_handler(
    State(state): State<AppState>,
) -> Result<Json<ExportResponse>, AppError> {
    let tables = state.gtfs.get().await.ok_or(AppError::data_unavailable())?;

    let summary = export_fares(&tables, &state.export_dir)?;

    Ok(Json(ExportResponse {
        status: "success",
        message: "GTFS fare data exported successfully",
        export_path: state.export_dir.display().to_string(),
        summary,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request (400).
    BadRequest { message: String },
    /// Request validation failed with one or more violations (400).
    Validation { details: Vec<String> },
    /// A named stop or resource does not exist (404).
    NotFound { message: String },
    /// Backing GTFS tables are not loaded (500).
    Unavailable { message: String },
    /// The classifier service failed (502).
    Upstream { message: String },
    /// Anything else (500).
    Internal { message: String },
}

impl AppError {
    fn data_unavailable() -> Self {
        AppError::Unavailable {
            message: "Failed to load GTFS data".to_string(),
        }
    }
}

impl From<JourneyError> for AppError {
    fn from(e: JourneyError) -> Self {
        match e {
            JourneyError::SameStop => AppError::BadRequest {
                message: e.to_string(),
            },
            JourneyError::OriginNotFound(_) | JourneyError::DestinationNotFound(_) => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<GtfsError> for AppError {
    fn from(e: GtfsError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<ClassifierError> for AppError {
    fn from(e: ClassifierError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }).into_response(),
            ),
            AppError::Validation { details } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    error: "Invalid request data",
                    details,
                    success: false,
                })
                .into_response(),
            ),
            AppError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse { error: message }).into_response(),
            ),
            AppError::Unavailable { message } | AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: message }).into_response(),
            ),
            AppError::Upstream { message } => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse { error: message }).into_response(),
            ),
        };

        error!(status = %status, "request failed");

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_errors_map_to_statuses() {
        let err: AppError = JourneyError::SameStop.into();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err: AppError = JourneyError::OriginNotFound("x".to_string()).into();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err: AppError = JourneyError::DestinationNotFound("x".to_string()).into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn not_found_response_status() {
        let resp = AppError::NotFound {
            message: "Origin stop \"nowhere\" not found".to_string(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_response_status() {
        let resp = AppError::Validation {
            details: vec!["stop_lat is required".to_string()],
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
