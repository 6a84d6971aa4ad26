//! `waypost reroute` — close roads and list what is left.
//!
//! Closures are permanent. With `--save` the network file is rewritten once
//! every named road is closed, even when no route remains.

use clap::Args;

use waypost_analysis::reroute;
use waypost_core::NetworkError;

use super::Context;
use crate::output::{render, section};

#[derive(Args, Debug)]
pub struct RerouteArgs {
    /// Road to close, as FROM:TO. Repeat for several roads.
    #[arg(long, value_name = "FROM:TO", value_parser = parse_closure)]
    pub close: Vec<(String, String)>,

    /// Write the network back with the roads closed.
    #[arg(long)]
    pub save: bool,
}

fn parse_closure(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected FROM:TO, got '{raw}'")),
    }
}

pub fn run_reroute(ctx: &mut Context, args: &RerouteArgs) -> anyhow::Result<()> {
    let budget = ctx.config.routing.budget();
    let result = reroute(&mut ctx.network, &args.close, &budget);

    let all_closed = matches!(result, Ok(_) | Err(NetworkError::NoRoute { .. }));
    if args.save && all_closed {
        ctx.save()?;
    }

    let alternatives = result?;
    render(ctx.output, &alternatives, |alts, w| {
        section(w, &format!("Routes from {} to {}", alts.from, alts.to))?;
        for (rank, route) in alts.routes.iter().enumerate() {
            writeln!(
                w,
                "{:>3}. {:>8.2} km  {}",
                rank + 1,
                route.distance_km,
                route.stops.join(" -> ")
            )?;
        }
        if alts.truncated {
            writeln!(w, "(search budget reached; more routes may exist)")?;
        }
        Ok(())
    })
}
