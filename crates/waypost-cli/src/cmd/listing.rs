//! `waypost vertices` and `waypost roads` — raw network listings.

use waypost_core::model::{Road, format_hours};

use super::Context;
use crate::output::render;

pub fn run_vertices(ctx: &Context) -> anyhow::Result<()> {
    let vertices: Vec<&str> = ctx.network.graph().vertices().into_iter().collect();
    render(ctx.output, &vertices, |vertices, w| {
        for v in vertices {
            writeln!(w, "{v}")?;
        }
        Ok(())
    })
}

pub fn run_roads(ctx: &Context) -> anyhow::Result<()> {
    let roads: Vec<&Road> = ctx.network.roads().collect();
    render(ctx.output, &roads, |roads, w| {
        if roads.is_empty() {
            return writeln!(w, "No roads.");
        }
        for road in roads {
            writeln!(
                w,
                "{} -> {}  {:.2} km  walk {}  drive {}",
                road.start(),
                road.end(),
                road.distance_km(),
                format_hours(road.walk_time_hours),
                format_hours(road.drive_time_hours),
            )?;
        }
        Ok(())
    })
}
