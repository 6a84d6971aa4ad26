//! `waypost points` — list points of interest.

use clap::Args;
use serde::Serialize;

use waypost_core::model::{Category, PointOfInterest};
use waypost_core::sort::sort_by_name_ascending;

use super::Context;
use crate::output::render;

#[derive(Args, Debug)]
pub struct PointsArgs {
    /// Only list points in this category: nature, culture or gastronomy.
    #[arg(short, long)]
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct PointRow<'a> {
    pub name: &'a str,
    pub category: Category,
    pub visits: u32,
    pub average_rating: f64,
    pub on_network: bool,
}

pub fn run_points(ctx: &Context, args: &PointsArgs) -> anyhow::Result<()> {
    let points: Vec<&PointOfInterest> = match args.category {
        Some(category) => ctx.network.points_in_category(category),
        None => {
            let mut named: Vec<(String, &PointOfInterest)> =
                ctx.network.points().map(|p| (p.name.clone(), p)).collect();
            sort_by_name_ascending(&mut named);
            named.into_iter().map(|(_, p)| p).collect()
        }
    };

    let rows: Vec<PointRow<'_>> = points
        .into_iter()
        .map(|p| PointRow {
            name: &p.name,
            category: p.category,
            visits: p.visits,
            average_rating: p.average_rating(),
            on_network: ctx.network.graph().contains_vertex(&p.name),
        })
        .collect();

    render(ctx.output, &rows, |rows, w| {
        if rows.is_empty() {
            return writeln!(w, "No points found.");
        }
        for row in rows {
            let marker = if row.on_network { "*" } else { " " };
            writeln!(
                w,
                "{marker} {:<28} {:<11} {:>4} visits  {:.1}★",
                row.name, row.category, row.visits, row.average_rating
            )?;
        }
        Ok(())
    })
}
