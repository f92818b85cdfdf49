//! Bus fare and journey service.
//!
//! Serves fare calculation, stop search and single-leg journey
//! planning over static GTFS data, plus crowd-level prediction
//! backed by an external classifier service.

pub mod crowd;
pub mod domain;
pub mod fare;
pub mod geo;
pub mod gtfs;
pub mod journey;
pub mod stops;
pub mod web;
