//! Fare records and computed fare results.

use serde::{Deserialize, Serialize};

use super::{FareId, RouteId, StopId};

/// A priced fare from `fare_attributes.txt`.
///
/// Identity is `fare_id`; many fare rules may share one attribute row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareAttribute {
    pub fare_id: FareId,
    pub price: f64,
    pub currency_type: String,
}

/// A fare rule from `fare_rules.txt`.
///
/// Prices a specific origin→destination pair, optionally scoped to a
/// route, optionally keyed by a broader zone via `contains_id`. The
/// optional columns are genuinely absent in many feeds, so they are
/// typed as `Option` and default to `None` when the column is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRule {
    pub fare_id: FareId,
    #[serde(default)]
    pub route_id: Option<RouteId>,
    pub origin_id: StopId,
    pub destination_id: StopId,
    #[serde(default)]
    pub contains_id: Option<StopId>,
}

/// Which fallback stage produced a [`FareResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FareSource {
    /// A directional fare rule matched (possibly reversed).
    Gtfs,
    /// A zone rule matched via `contains_id`.
    ContainsZone,
    /// Priced from the Haversine distance tier table.
    DistanceCalculation,
    /// No rule matched and no coordinates were available.
    DefaultFallback,
}

impl FareSource {
    /// Human-readable explanation of how the fare was derived.
    pub fn message(&self) -> &'static str {
        match self {
            FareSource::Gtfs => "Fare calculated from GTFS dataset",
            FareSource::ContainsZone => "Fare derived from zone fare rules",
            FareSource::DistanceCalculation => "Fare estimated from distance between stops",
            FareSource::DefaultFallback => "Default fare applied",
        }
    }
}

/// The outcome of fare resolution, with provenance.
///
/// Transient, computed per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareResult {
    pub price: f64,
    pub currency: String,
    pub fare_id: FareId,
    pub route_id: Option<RouteId>,
    /// Only present when the fare came from the distance fallback.
    pub distance_km: Option<f64>,
    pub source: FareSource,
}
