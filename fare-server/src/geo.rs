//! Great-circle distance between coordinates.
//!
//! Used both as the pricing input for the distance fare fallback and
//! for journey time estimation.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Symmetric in its arguments; returns `0.0` for identical points.
/// The intermediate `a` term is clamped to `[0, 1]` so that floating
/// error near antipodal points cannot push `asin` out of domain.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical_points() {
        assert_eq!(haversine_km(12.9767, 77.5710, 12.9767, 77.5710), 0.0);
        assert_eq!(haversine_km(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(haversine_km(-45.0, 170.0, -45.0, 170.0), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn majestic_to_koramangala() {
        // Kempegowda Bus Station to Koramangala, roughly 7.4 km apart.
        let d = haversine_km(12.9767, 77.5710, 12.9352, 77.6245);
        assert!((d - 7.41).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!(d.is_finite());
        // Half the Earth's circumference at this radius.
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = (f64, f64)> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
    }

    proptest! {
        /// Distance is never negative and never NaN.
        #[test]
        fn non_negative_and_finite((lat1, lon1) in coord(), (lat2, lon2) in coord()) {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
        }

        /// A point is at distance zero from itself.
        #[test]
        fn identity((lat, lon) in coord()) {
            prop_assert_eq!(haversine_km(lat, lon, lat, lon), 0.0);
        }

        /// Swapping the endpoints gives the same distance.
        #[test]
        fn symmetric((lat1, lon1) in coord(), (lat2, lon2) in coord()) {
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let ba = haversine_km(lat2, lon2, lat1, lon1);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        /// Going via a third point is never a shortcut.
        #[test]
        fn triangle_inequality(
            (lat1, lon1) in coord(),
            (lat2, lon2) in coord(),
            (lat3, lon3) in coord(),
        ) {
            let ac = haversine_km(lat1, lon1, lat3, lon3);
            let ab = haversine_km(lat1, lon1, lat2, lon2);
            let bc = haversine_km(lat2, lon2, lat3, lon3);
            prop_assert!(ac <= ab + bc + 1e-6);
        }
    }
}
