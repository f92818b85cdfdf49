//! The fare fallback chain.

use crate::domain::{FareId, FareResult, FareRule, FareSource, RouteId, StopId};
use crate::geo::haversine_km;
use crate::gtfs::GtfsTables;

use super::tiers::FareConfig;

/// Resolves a fare between two stop identifiers.
///
/// Strategies are tried in strict order, each degrading a step further
/// from authoritative data:
///
/// 1. a directional fare rule for the pair (retried reversed, since
///    the fare tables are treated as symmetric)
/// 2. a zone rule whose `contains_id` covers either endpoint
/// 3. Haversine distance mapped through the tier table
/// 4. a fixed default price
///
/// The chain always terminates in a result; "no fare found" is not an
/// error here. Rows a stage cannot use (a rule whose fare id has no
/// attribute, a stop with no coordinates) make that stage a miss and
/// fall through to the next.
pub struct FareResolver<'a> {
    tables: &'a GtfsTables,
    config: &'a FareConfig,
}

impl<'a> FareResolver<'a> {
    pub fn new(tables: &'a GtfsTables, config: &'a FareConfig) -> Self {
        Self { tables, config }
    }

    /// Compute the fare between two stops, optionally scoped to a route.
    pub fn calculate(
        &self,
        origin: &StopId,
        destination: &StopId,
        route: Option<&RouteId>,
    ) -> FareResult {
        self.directional_fare(origin, destination, route)
            .or_else(|| self.zone_fare(origin, destination))
            .or_else(|| self.distance_fare(origin, destination))
            .unwrap_or_else(|| self.default_fare())
    }

    /// Stage 1: direct or reversed origin→destination rule.
    ///
    /// A supplied route id narrows the matched set but never empties
    /// it: if no rule carries that route the unfiltered set is kept.
    fn directional_fare(
        &self,
        origin: &StopId,
        destination: &StopId,
        route: Option<&RouteId>,
    ) -> Option<FareResult> {
        let mut rules: Vec<&FareRule> = self.pair_rules(origin, destination);
        if rules.is_empty() {
            rules = self.pair_rules(destination, origin);
        }
        if rules.is_empty() {
            return None;
        }

        if let Some(route) = route {
            let narrowed: Vec<&FareRule> = rules
                .iter()
                .copied()
                .filter(|r| r.route_id.as_ref() == Some(route))
                .collect();
            if !narrowed.is_empty() {
                rules = narrowed;
            }
        }

        let rule = rules.first()?;
        self.join_attribute(rule, FareSource::Gtfs)
    }

    fn pair_rules(&self, origin: &StopId, destination: &StopId) -> Vec<&'a FareRule> {
        self.tables
            .fare_rules
            .iter()
            .filter(|r| r.origin_id == *origin && r.destination_id == *destination)
            .collect()
    }

    /// Stage 2: zone rule whose `contains_id` matches either endpoint.
    fn zone_fare(&self, origin: &StopId, destination: &StopId) -> Option<FareResult> {
        let rule = self.tables.fare_rules.iter().find(|r| {
            r.contains_id
                .as_ref()
                .is_some_and(|zone| zone == origin || zone == destination)
        })?;
        self.join_attribute(rule, FareSource::ContainsZone)
    }

    /// Join a rule to its fare attribute; a dangling fare id is a miss.
    fn join_attribute(&self, rule: &FareRule, source: FareSource) -> Option<FareResult> {
        let attr = self.tables.fare_attribute(&rule.fare_id)?;
        Some(FareResult {
            price: attr.price,
            currency: attr.currency_type.clone(),
            fare_id: rule.fare_id.clone(),
            route_id: rule.route_id.clone(),
            distance_km: None,
            source,
        })
    }

    /// Stage 3: price from the distance tier table.
    fn distance_fare(&self, origin: &StopId, destination: &StopId) -> Option<FareResult> {
        let from = self.tables.stop(origin)?;
        let to = self.tables.stop(destination)?;

        let distance_km = haversine_km(from.stop_lat, from.stop_lon, to.stop_lat, to.stop_lon);

        Some(FareResult {
            price: self.config.tiers.price_for(distance_km),
            currency: self.config.currency.clone(),
            fare_id: FareId::new("distance_based"),
            route_id: None,
            distance_km: Some((distance_km * 100.0).round() / 100.0),
            source: FareSource::DistanceCalculation,
        })
    }

    /// Stage 4: the fixed default.
    fn default_fare(&self) -> FareResult {
        FareResult {
            price: self.config.default_fare,
            currency: self.config.currency.clone(),
            fare_id: FareId::new("default"),
            route_id: None,
            distance_km: None,
            source: FareSource::DefaultFallback,
        }
    }
}
