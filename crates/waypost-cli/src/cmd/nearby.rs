//! `waypost nearby` — popular points around a location.

use clap::Args;
use serde::Serialize;

use waypost_core::geo::Coordinates;
use waypost_core::model::Category;

use super::Context;
use crate::output::render;

#[derive(Args, Debug)]
pub struct NearbyArgs {
    /// Latitude in degrees.
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,
    /// Longitude in degrees.
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,
    /// Search radius in meters (default from config).
    #[arg(long)]
    pub radius: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct NearbyRow<'a> {
    pub name: &'a str,
    pub category: Category,
    pub visits: u32,
    pub distance_m: f64,
}

pub fn run_nearby(ctx: &Context, args: &NearbyArgs) -> anyhow::Result<()> {
    let here = Coordinates::new(args.latitude, args.longitude);
    let radius_m = args.radius.unwrap_or(ctx.config.suggestions.radius_m);

    let rows: Vec<NearbyRow<'_>> = ctx
        .network
        .suggest_nearby(here, radius_m)
        .into_iter()
        .map(|p| NearbyRow {
            name: &p.name,
            category: p.category,
            visits: p.visits,
            distance_m: here.distance_m(&p.coordinates),
        })
        .collect();

    render(ctx.output, &rows, |rows, w| {
        if rows.is_empty() {
            return writeln!(w, "Nothing within {radius_m:.0} m.");
        }
        for row in rows {
            writeln!(
                w,
                "{:<28} {:<11} {:>4} visits  {:>6.0} m",
                row.name, row.category, row.visits, row.distance_m
            )?;
        }
        Ok(())
    })
}
