//! Journey estimation parameters.

/// Configuration for journey metrics.
#[derive(Debug, Clone)]
pub struct JourneyConfig {
    /// Average bus speed used for duration estimates, in km/h.
    pub average_speed_kmh: f64,
}

impl JourneyConfig {
    /// Estimated travel time in whole minutes for a distance, floored.
    pub fn estimate_minutes(&self, distance_km: f64) -> i64 {
        (distance_km / self.average_speed_kmh * 60.0) as i64
    }
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 20.0,
        }
    }
}
