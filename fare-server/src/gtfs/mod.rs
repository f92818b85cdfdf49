//! GTFS table loading and access.
//!
//! The loader reads the four fare-relevant tables (plus optional route
//! geometry) from a directory of GTFS text files into immutable
//! in-memory tables. Tables are loaded once and shared read-only; the
//! [`GtfsStore`] handle supports an explicit reload that swaps the
//! whole snapshot.

mod error;
mod export;
mod load;
mod store;
mod tables;

pub use error::GtfsError;
pub use export::{ExportSummary, export_fares};
pub use load::load_dir;
pub use store::GtfsStore;
pub use tables::GtfsTables;
