//! Fare resolution.
//!
//! Implements the layered fallback chain: directional fare rules, zone
//! rules, distance-tiered pricing, and finally a fixed default. Each
//! stage yields an explicit `Option`; the resolver as a whole never
//! fails.

mod resolver;
mod tiers;

pub use resolver::FareResolver;
pub use tiers::{FareBand, FareConfig, FareTiers};
