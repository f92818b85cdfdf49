//! In-memory GTFS tables with identifier indexes.

use std::collections::HashMap;

use crate::domain::{FareAttribute, FareId, FareRule, Route, RouteId, ShapePoint, Stop, StopId};

/// The loaded GTFS tables, read-only after construction.
///
/// Row order is preserved from the source files; the tiered matchers
/// rely on it for deterministic first-match results. Indexes map the
/// first occurrence of each identifier.
#[derive(Debug, Clone, Default)]
pub struct GtfsTables {
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub fare_attributes: Vec<FareAttribute>,
    pub fare_rules: Vec<FareRule>,
    pub shapes: Vec<ShapePoint>,

    stop_index: HashMap<StopId, usize>,
    route_index: HashMap<RouteId, usize>,
    fare_index: HashMap<FareId, usize>,
}

impl GtfsTables {
    /// Build tables from loaded rows, constructing the id indexes.
    pub fn new(
        stops: Vec<Stop>,
        routes: Vec<Route>,
        fare_attributes: Vec<FareAttribute>,
        fare_rules: Vec<FareRule>,
        shapes: Vec<ShapePoint>,
    ) -> Self {
        let mut stop_index = HashMap::with_capacity(stops.len());
        for (i, stop) in stops.iter().enumerate() {
            stop_index.entry(stop.stop_id.clone()).or_insert(i);
        }

        let mut route_index = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            route_index.entry(route.route_id.clone()).or_insert(i);
        }

        let mut fare_index = HashMap::with_capacity(fare_attributes.len());
        for (i, attr) in fare_attributes.iter().enumerate() {
            fare_index.entry(attr.fare_id.clone()).or_insert(i);
        }

        Self {
            stops,
            routes,
            fare_attributes,
            fare_rules,
            shapes,
            stop_index,
            route_index,
            fare_index,
        }
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stop_index.get(id).map(|&i| &self.stops[i])
    }

    /// Look up a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.route_index.get(id).map(|&i| &self.routes[i])
    }

    /// Look up a fare attribute by fare id.
    pub fn fare_attribute(&self, id: &FareId) -> Option<&FareAttribute> {
        self.fare_index.get(id).map(|&i| &self.fare_attributes[i])
    }

    /// Geometry for a route, matched by short name.
    ///
    /// Shape ids in this feed embed the route short name. Returns the
    /// points of the first matching shape id, sorted by sequence, or an
    /// empty vector when no geometry matches.
    pub fn route_shapes(&self, route_short_name: &str) -> Vec<&ShapePoint> {
        if route_short_name.is_empty() {
            return Vec::new();
        }

        let Some(shape_id) = self
            .shapes
            .iter()
            .find(|p| p.shape_id.contains(route_short_name))
            .map(|p| p.shape_id.as_str())
        else {
            return Vec::new();
        };

        let mut points: Vec<&ShapePoint> = self
            .shapes
            .iter()
            .filter(|p| p.shape_id == shape_id)
            .collect();
        points.sort_by_key(|p| p.shape_pt_sequence);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FareSource;

    fn sample_tables() -> GtfsTables {
        GtfsTables::new(
            vec![
                Stop {
                    stop_id: StopId::new("1"),
                    stop_name: "Majestic".to_string(),
                    stop_lat: 12.9767,
                    stop_lon: 77.5710,
                },
                Stop {
                    stop_id: StopId::new("2"),
                    stop_name: "Koramangala".to_string(),
                    stop_lat: 12.9352,
                    stop_lon: 77.6245,
                },
            ],
            vec![Route {
                route_id: RouteId::new("335E"),
                route_short_name: "335E".to_string(),
                route_long_name: "Majestic to Kadugodi".to_string(),
                route_type: 3,
            }],
            vec![FareAttribute {
                fare_id: FareId::new("fare_1"),
                price: 5.0,
                currency_type: "INR".to_string(),
            }],
            vec![FareRule {
                fare_id: FareId::new("fare_1"),
                route_id: None,
                origin_id: StopId::new("1"),
                destination_id: StopId::new("2"),
                contains_id: None,
            }],
            vec![
                ShapePoint {
                    shape_id: "shp_335E_0".to_string(),
                    shape_pt_lat: 12.98,
                    shape_pt_lon: 77.57,
                    shape_pt_sequence: 1,
                },
                ShapePoint {
                    shape_id: "shp_335E_0".to_string(),
                    shape_pt_lat: 12.97,
                    shape_pt_lon: 77.57,
                    shape_pt_sequence: 0,
                },
                ShapePoint {
                    shape_id: "shp_600_0".to_string(),
                    shape_pt_lat: 12.90,
                    shape_pt_lon: 77.60,
                    shape_pt_sequence: 0,
                },
            ],
        )
    }

    #[test]
    fn id_lookups() {
        let tables = sample_tables();

        assert_eq!(tables.stop(&StopId::new("1")).unwrap().stop_name, "Majestic");
        assert!(tables.stop(&StopId::new("99")).is_none());

        assert_eq!(
            tables.route(&RouteId::new("335E")).unwrap().route_long_name,
            "Majestic to Kadugodi"
        );

        let attr = tables.fare_attribute(&FareId::new("fare_1")).unwrap();
        assert_eq!(attr.price, 5.0);
        // Unrelated check that the source enum stays available here.
        assert_ne!(FareSource::Gtfs, FareSource::DefaultFallback);
    }

    #[test]
    fn duplicate_ids_keep_first_row() {
        let tables = GtfsTables::new(
            vec![
                Stop {
                    stop_id: StopId::new("1"),
                    stop_name: "First".to_string(),
                    stop_lat: 0.0,
                    stop_lon: 0.0,
                },
                Stop {
                    stop_id: StopId::new("1"),
                    stop_name: "Second".to_string(),
                    stop_lat: 1.0,
                    stop_lon: 1.0,
                },
            ],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(tables.stop(&StopId::new("1")).unwrap().stop_name, "First");
    }

    #[test]
    fn route_shapes_sorted_by_sequence() {
        let tables = sample_tables();
        let points = tables.route_shapes("335E");

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].shape_pt_sequence, 0);
        assert_eq!(points[1].shape_pt_sequence, 1);
    }

    #[test]
    fn route_shapes_no_match_or_empty_name() {
        let tables = sample_tables();
        assert!(tables.route_shapes("999").is_empty());
        assert!(tables.route_shapes("").is_empty());
    }
}
