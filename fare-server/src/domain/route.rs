//! Bus route records.

use serde::{Deserialize, Serialize};

use super::RouteId;

/// GTFS route type for buses.
pub const ROUTE_TYPE_BUS: i32 = 3;

fn default_route_type() -> i32 {
    ROUTE_TYPE_BUS
}

/// A route from `routes.txt`.
///
/// Name columns are optional in some feeds, so they default to empty
/// rather than failing the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: RouteId,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
    #[serde(default = "default_route_type")]
    pub route_type: i32,
}

impl Route {
    /// Placeholder route used when the route table is empty.
    ///
    /// The journey assembler does no real path-finding; when the feed
    /// carries no routes at all it still reports a plausible single-leg
    /// bus route.
    pub fn placeholder() -> Self {
        Self {
            route_id: RouteId::new("sample_route_1"),
            route_short_name: "500".to_string(),
            route_long_name: "Sample Route".to_string(),
            route_type: ROUTE_TYPE_BUS,
        }
    }
}
