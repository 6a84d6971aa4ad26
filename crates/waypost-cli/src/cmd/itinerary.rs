//! `waypost itinerary` — cheapest trip between two points.

use clap::Args;
use tracing::warn;

use waypost_analysis::itinerary;
use waypost_core::model::format_hours;

use super::Context;
use crate::output::{kv, render, section};

#[derive(Args, Debug)]
pub struct ItineraryArgs {
    /// Starting point.
    pub from: String,
    /// Destination point.
    pub to: String,
}

pub fn run_itinerary(ctx: &Context, args: &ItineraryArgs) -> anyhow::Result<()> {
    let budget = ctx.config.routing.budget();
    let trip = itinerary(&ctx.network, &args.from, &args.to, &budget)?;
    if trip.truncated {
        warn!("search budget reached with partial routes unexplored; a shorter route may exist");
    }

    render(ctx.output, &trip, |trip, w| {
        section(w, &format!("{} → {}", args.from, args.to))?;
        kv(w, "route", trip.stops.join(" -> "))?;
        kv(w, "distance", format!("{:.2} km", trip.distance_km))?;
        kv(w, "walking", format_hours(trip.walk_time_hours))?;
        kv(w, "driving", format_hours(trip.drive_time_hours))?;
        if trip.truncated {
            writeln!(w, "(search budget reached with partial routes unexplored; a shorter route may exist)")?;
        }
        Ok(())
    })
}
