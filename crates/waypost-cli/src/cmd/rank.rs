//! `waypost rank` — centrality rankings.

use clap::{Args, ValueEnum};
use serde::Serialize;

use waypost_analysis::{rank_by_closeness, rank_by_in_degree, rank_by_out_degree};

use super::Context;
use crate::output::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Centrality {
    /// Roads leaving each point.
    Out,
    /// Roads arriving at each point.
    In,
    /// Inverse mean distance to every reachable point.
    Closeness,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Which centrality to rank by.
    #[arg(value_enum)]
    pub by: Centrality,
}

#[derive(Debug, Serialize)]
pub struct RankRow {
    pub vertex: String,
    pub score: f64,
}

#[allow(clippy::cast_precision_loss)]
fn degree_rows(ranked: Vec<(usize, String)>) -> Vec<RankRow> {
    ranked
        .into_iter()
        .map(|(degree, vertex)| RankRow {
            vertex,
            score: degree as f64,
        })
        .collect()
}

pub fn run_rank(ctx: &Context, args: &RankArgs) -> anyhow::Result<()> {
    let graph = ctx.network.graph();
    let rows = match args.by {
        Centrality::Out => degree_rows(rank_by_out_degree(graph)),
        Centrality::In => degree_rows(rank_by_in_degree(graph)),
        Centrality::Closeness => rank_by_closeness(graph)
            .into_iter()
            .map(|(score, vertex)| RankRow { vertex, score })
            .collect(),
    };

    let precision = if args.by == Centrality::Closeness { 4 } else { 0 };
    render(ctx.output, &rows, |rows, w| {
        for (i, row) in rows.iter().enumerate() {
            writeln!(w, "{:>3}. {:<28} {:.precision$}", i + 1, row.vertex, row.score)?;
        }
        Ok(())
    })
}
