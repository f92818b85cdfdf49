//! Single-leg journey assembly.
//!
//! Combines stop resolution, fare resolution and distance estimation
//! into one journey response. There is no real path-finding: the
//! journey is always a single direct leg on the first available route
//! (or a placeholder when the feed has no routes).

mod config;
mod plan;

pub use config::JourneyConfig;
pub use plan::{Journey, JourneyError, plan_journey};
