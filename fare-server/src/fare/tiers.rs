//! Distance-tiered pricing and fare configuration.

/// One pricing band: distances up to and including `max_km` cost `price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareBand {
    pub max_km: f64,
    pub price: f64,
}

/// The distance tier table for the fare fallback.
///
/// Bands are checked in order with inclusive upper bounds; distances
/// beyond the last band cost `beyond`.
#[derive(Debug, Clone, PartialEq)]
pub struct FareTiers {
    pub bands: Vec<FareBand>,
    pub beyond: f64,
}

impl FareTiers {
    /// Price for a distance, in currency units.
    pub fn price_for(&self, distance_km: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| distance_km <= band.max_km)
            .map(|band| band.price)
            .unwrap_or(self.beyond)
    }
}

impl Default for FareTiers {
    /// The BMTC-style stage fare bands.
    fn default() -> Self {
        Self {
            bands: vec![
                FareBand { max_km: 2.0, price: 5.0 },
                FareBand { max_km: 5.0, price: 10.0 },
                FareBand { max_km: 10.0, price: 15.0 },
                FareBand { max_km: 15.0, price: 20.0 },
            ],
            beyond: 25.0,
        }
    }
}

/// Configuration for fare resolution and presentation.
#[derive(Debug, Clone)]
pub struct FareConfig {
    /// Distance tier table for the fallback pricing stage.
    pub tiers: FareTiers,

    /// Price returned when neither rules nor coordinates resolve.
    pub default_fare: f64,

    /// Currency reported by the distance and default fallback stages.
    pub currency: String,

    /// GST rate applied by the web layer on top of the base price.
    pub gst_rate: f64,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            tiers: FareTiers::default(),
            default_fare: 10.0,
            currency: "INR".to_string(),
            gst_rate: 0.05,
        }
    }
}
