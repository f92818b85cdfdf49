//! CSV loading for GTFS tables.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::domain::{FareAttribute, FareRule, Route, ShapePoint, Stop};

use super::error::GtfsError;
use super::tables::GtfsTables;

/// Load the fare-relevant GTFS tables from a directory.
///
/// `stops.txt`, `routes.txt`, `fare_attributes.txt` and
/// `fare_rules.txt` are required; `shapes.txt` is optional. Rows that
/// fail to parse are skipped with a warning rather than failing the
/// whole load.
pub fn load_dir(dir: &Path) -> Result<GtfsTables, GtfsError> {
    let stops: Vec<Stop> = read_table(&dir.join("stops.txt"))?;
    let routes: Vec<Route> = read_table(&dir.join("routes.txt"))?;
    let fare_attributes: Vec<FareAttribute> = read_table(&dir.join("fare_attributes.txt"))?;
    let fare_rules: Vec<FareRule> = read_table(&dir.join("fare_rules.txt"))?;

    let shapes_path = dir.join("shapes.txt");
    let shapes: Vec<ShapePoint> = if shapes_path.exists() {
        read_table(&shapes_path)?
    } else {
        Vec::new()
    };

    info!(
        stops = stops.len(),
        routes = routes.len(),
        fare_attributes = fare_attributes.len(),
        fare_rules = fare_rules.len(),
        shape_points = shapes.len(),
        "loaded GTFS tables"
    );

    Ok(GtfsTables::new(
        stops,
        routes,
        fare_attributes,
        fare_rules,
        shapes,
    ))
}

/// Read one table, skipping rows that fail to deserialize.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, GtfsError> {
    if !path.exists() {
        return Err(GtfsError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.deserialize() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                warn!(file = %path.display(), error = %e, "skipping malformed row");
            }
        }
    }

    if skipped > 0 {
        warn!(
            file = %path.display(),
            skipped,
            loaded = rows.len(),
            "table loaded with malformed rows skipped"
        );
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_minimal_feed(dir: &Path) {
        fs::write(
            dir.join("stops.txt"),
            "stop_id,stop_name,stop_lat,stop_lon\n\
             1,Majestic,12.9767,77.5710\n\
             2,Koramangala,12.9352,77.6245\n",
        )
        .unwrap();
        fs::write(
            dir.join("routes.txt"),
            "route_id,route_short_name,route_long_name,route_type\n\
             335E,335E,Majestic to Kadugodi,3\n",
        )
        .unwrap();
        fs::write(
            dir.join("fare_attributes.txt"),
            "fare_id,price,currency_type\nfare_1,5.0,INR\n",
        )
        .unwrap();
        fs::write(
            dir.join("fare_rules.txt"),
            "fare_id,route_id,origin_id,destination_id\nfare_1,335E,1,2\n",
        )
        .unwrap();
    }

    #[test]
    fn loads_minimal_feed_without_shapes() {
        let dir = tempdir().unwrap();
        write_minimal_feed(dir.path());

        let tables = load_dir(dir.path()).unwrap();
        assert_eq!(tables.stops.len(), 2);
        assert_eq!(tables.routes.len(), 1);
        assert_eq!(tables.fare_attributes.len(), 1);
        assert_eq!(tables.fare_rules.len(), 1);
        assert!(tables.shapes.is_empty());
    }

    #[test]
    fn loads_optional_shapes_when_present() {
        let dir = tempdir().unwrap();
        write_minimal_feed(dir.path());
        fs::write(
            dir.path().join("shapes.txt"),
            "shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence\n\
             shp_335E_0,12.97,77.57,0\n\
             shp_335E_0,12.96,77.58,1\n",
        )
        .unwrap();

        let tables = load_dir(dir.path()).unwrap();
        assert_eq!(tables.shapes.len(), 2);
    }

    #[test]
    fn missing_required_file_errors() {
        let dir = tempdir().unwrap();
        write_minimal_feed(dir.path());
        fs::remove_file(dir.path().join("fare_rules.txt")).unwrap();

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GtfsError::MissingFile { .. }));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempdir().unwrap();
        write_minimal_feed(dir.path());
        fs::write(
            dir.path().join("stops.txt"),
            "stop_id,stop_name,stop_lat,stop_lon\n\
             1,Majestic,12.9767,77.5710\n\
             2,Broken,not-a-number,77.6245\n\
             3,Koramangala,12.9352,77.6245\n",
        )
        .unwrap();

        let tables = load_dir(dir.path()).unwrap();
        assert_eq!(tables.stops.len(), 2);
        assert_eq!(tables.stops[1].stop_name, "Koramangala");
    }
}
