//! Domain types for the bus fare service.
//!
//! This module contains the core domain model types that represent
//! loaded GTFS data and computed fare results. Identifier columns are
//! wrapped in string newtypes so they are always compared as strings,
//! regardless of how the source feed typed them.

mod fare;
mod ids;
mod route;
mod shape;
mod stop;

pub use fare::{FareAttribute, FareResult, FareRule, FareSource};
pub use ids::{FareId, RouteId, StopId};
pub use route::Route;
pub use shape::ShapePoint;
pub use stop::Stop;
