//! Fare data export for offline analysis.

use std::path::Path;

use serde::Serialize;

use crate::domain::{FareAttribute, FareId, FareRule, RouteId, StopId};

use super::error::GtfsError;
use super::tables::GtfsTables;

/// Row counts written by [`export_fares`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub fare_attributes: usize,
    pub fare_rules: usize,
    pub stops: usize,
    pub routes: usize,
    pub merged_fares: usize,
}

/// A fare rule joined with its attribute row, for the analysis export.
#[derive(Debug, Serialize)]
struct MergedFare<'a> {
    fare_id: &'a FareId,
    route_id: Option<&'a RouteId>,
    origin_id: &'a StopId,
    destination_id: &'a StopId,
    contains_id: Option<&'a StopId>,
    price: Option<f64>,
    currency_type: Option<&'a str>,
}

/// Write the loaded fare data to CSV files under `out_dir`.
///
/// Produces one file per table plus `merged_fares_analysis.csv`, a
/// left join of fare rules onto fare attributes. Creates `out_dir` if
/// needed.
pub fn export_fares(tables: &GtfsTables, out_dir: &Path) -> Result<ExportSummary, GtfsError> {
    std::fs::create_dir_all(out_dir)?;

    write_csv(&out_dir.join("fare_attributes.csv"), &tables.fare_attributes)?;
    write_csv(&out_dir.join("fare_rules.csv"), &tables.fare_rules)?;
    write_csv(&out_dir.join("stops.csv"), &tables.stops)?;
    write_csv(&out_dir.join("routes.csv"), &tables.routes)?;

    let merged: Vec<MergedFare<'_>> = tables
        .fare_rules
        .iter()
        .map(|rule| {
            let attr: Option<&FareAttribute> = tables.fare_attribute(&rule.fare_id);
            MergedFare {
                fare_id: &rule.fare_id,
                route_id: rule.route_id.as_ref(),
                origin_id: &rule.origin_id,
                destination_id: &rule.destination_id,
                contains_id: rule.contains_id.as_ref(),
                price: attr.map(|a| a.price),
                currency_type: attr.map(|a| a.currency_type.as_str()),
            }
        })
        .collect();
    write_csv(&out_dir.join("merged_fares_analysis.csv"), &merged)?;

    Ok(ExportSummary {
        fare_attributes: tables.fare_attributes.len(),
        fare_rules: tables.fare_rules.len(),
        stops: tables.stops.len(),
        routes: tables.routes.len(),
        merged_fares: merged.len(),
    })
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), GtfsError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
