//! Prediction request validation and feature derivation.

use chrono::{Datelike, Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Bounding box for accepted coordinates.
///
/// Defaults to the Bangalore service area; requests outside it are
/// rejected rather than sent to a model that was never trained on them.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    pub fn contains_lat(&self, lat: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
    }

    pub fn contains_lon(&self, lon: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&lon)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            lat_min: 12.7,
            lat_max: 13.2,
            lon_min: 77.3,
            lon_max: 77.9,
        }
    }
}

/// Rush-hour windows used to derive the `is_rush_hour` feature.
///
/// Bounds are inclusive hours of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct RushHours {
    pub morning: (u32, u32),
    pub evening: (u32, u32),
}

impl RushHours {
    pub fn is_rush(&self, hour: u32) -> bool {
        (self.morning.0..=self.morning.1).contains(&hour)
            || (self.evening.0..=self.evening.1).contains(&hour)
    }
}

impl Default for RushHours {
    fn default() -> Self {
        Self {
            morning: (7, 9),
            evening: (17, 19),
        }
    }
}

/// An incoming prediction request, before validation.
///
/// Coordinates are required; time and day default to "now" when
/// omitted. Fields are `Option` so that every missing or invalid field
/// can be reported together rather than failing on the first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionRequest {
    pub stop_lat: Option<f64>,
    pub stop_lon: Option<f64>,
    /// Time of day in HH:MM, 24-hour format.
    pub time: Option<String>,
    /// Day of week, 0–6 with Monday = 0.
    pub day_of_week: Option<i64>,
}

/// The validated feature vector sent to the classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionFeatures {
    pub hour: u32,
    pub day_of_week: u32,
    pub is_rush_hour: u8,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

impl PredictionRequest {
    /// Validate the request and derive the classifier features.
    ///
    /// All violations are collected and returned together. Missing time
    /// and day fall back to the current local time and weekday.
    pub fn validate(
        &self,
        bounds: &GeoBounds,
        rush: &RushHours,
    ) -> Result<PredictionFeatures, Vec<String>> {
        let mut errors = Vec::new();

        let lat = match self.stop_lat {
            None => {
                errors.push("stop_lat is required".to_string());
                None
            }
            Some(lat) if !bounds.contains_lat(lat) => {
                errors.push(format!(
                    "stop_lat must be between {} and {} (service area bounds)",
                    bounds.lat_min, bounds.lat_max
                ));
                None
            }
            Some(lat) => Some(lat),
        };

        let lon = match self.stop_lon {
            None => {
                errors.push("stop_lon is required".to_string());
                None
            }
            Some(lon) if !bounds.contains_lon(lon) => {
                errors.push(format!(
                    "stop_lon must be between {} and {} (service area bounds)",
                    bounds.lon_min, bounds.lon_max
                ));
                None
            }
            Some(lon) => Some(lon),
        };

        let now = Local::now();
        let hour = match &self.time {
            None => Some(now.hour()),
            Some(t) => match NaiveTime::parse_from_str(t, "%H:%M") {
                Ok(parsed) => Some(parsed.hour()),
                Err(_) => {
                    errors.push("time must be in HH:MM format (e.g. '14:30')".to_string());
                    None
                }
            },
        };

        let day_of_week = match self.day_of_week {
            None => Some(now.weekday().num_days_from_monday()),
            Some(day @ 0..=6) => Some(day as u32),
            Some(_) => {
                errors.push("day_of_week must be between 0 (Monday) and 6 (Sunday)".to_string());
                None
            }
        };

        // Every None above pushed an error, so the two arms line up.
        match (lat, lon, hour, day_of_week) {
            (Some(stop_lat), Some(stop_lon), Some(hour), Some(day_of_week))
                if errors.is_empty() =>
            {
                Ok(PredictionFeatures {
                    hour,
                    day_of_week,
                    is_rush_hour: rush.is_rush(hour) as u8,
                    stop_lat,
                    stop_lon,
                })
            }
            _ => Err(errors),
        }
    }
}
