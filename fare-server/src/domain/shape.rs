//! Route geometry records.

use serde::{Deserialize, Serialize};

/// A single point of route geometry from `shapes.txt`.
///
/// Points sharing a `shape_id` form one polyline, ordered by
/// `shape_pt_sequence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePoint {
    pub shape_id: String,
    pub shape_pt_lat: f64,
    pub shape_pt_lon: f64,
    pub shape_pt_sequence: u32,
}
