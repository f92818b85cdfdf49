//! Bus stop records.

use serde::{Deserialize, Serialize};

use super::StopId;

/// A bus stop from `stops.txt`.
///
/// Immutable after load; identity is `stop_id`. Stops are looked up
/// either by id (exact) or by name (via the tiered matcher in
/// [`crate::stops`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: StopId,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_from_csv_row() {
        let data = "stop_id,stop_name,stop_lat,stop_lon,zone_id\n\
                    20559,Majestic,12.9767,77.5710,Z1\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let stop: Stop = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(stop.stop_id, StopId::new("20559"));
        assert_eq!(stop.stop_name, "Majestic");
        assert!((stop.stop_lat - 12.9767).abs() < 1e-9);
        assert!((stop.stop_lon - 77.5710).abs() < 1e-9);
    }

    #[test]
    fn bad_coordinate_is_a_deserialize_error() {
        let data = "stop_id,stop_name,stop_lat,stop_lon\n1,Broken,not-a-number,77.6\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let row: Result<Stop, _> = rdr.deserialize().next().unwrap();
        assert!(row.is_err());
    }
}
