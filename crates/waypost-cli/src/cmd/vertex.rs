//! `waypost vertex` — put points on the road network or take them off.
//!
//! Subcommands:
//! - `waypost vertex add <name>`: the point must already be registered
//! - `waypost vertex rm <name>`: closes every road touching the point

use clap::{Args, Subcommand};
use serde::Serialize;

use super::Context;
use crate::output::render;

#[derive(Args, Debug)]
pub struct VertexArgs {
    #[command(subcommand)]
    pub command: VertexCommand,
}

#[derive(Subcommand, Debug)]
pub enum VertexCommand {
    #[command(
        about = "Add a registered point to the road network",
        after_help = "EXAMPLES:\n    waypost vertex add \"Biscoitos\""
    )]
    Add(VertexNameArgs),

    #[command(
        visible_alias = "remove",
        about = "Take a point off the network, closing its roads",
        after_help = "EXAMPLES:\n    waypost vertex rm \"Monte Brasil\""
    )]
    Rm(VertexNameArgs),
}

#[derive(Args, Debug)]
pub struct VertexNameArgs {
    /// Point name.
    pub name: String,
}

#[derive(Debug, Serialize)]
struct VertexOutput<'a> {
    ok: bool,
    vertex: &'a str,
    roads_removed: usize,
}

pub fn run_vertex(ctx: &mut Context, args: &VertexArgs) -> anyhow::Result<()> {
    let (name, roads_removed, verb) = match &args.command {
        VertexCommand::Add(add) => {
            ctx.network.add_vertex(&add.name)?;
            (add.name.as_str(), 0, "added")
        }
        VertexCommand::Rm(rm) => {
            let before = ctx.network.roads().count();
            ctx.network.remove_vertex(&rm.name)?;
            (rm.name.as_str(), before - ctx.network.roads().count(), "removed")
        }
    };
    ctx.save()?;

    let result = VertexOutput {
        ok: true,
        vertex: name,
        roads_removed,
    };
    render(ctx.output, &result, |r, w| {
        writeln!(w, "✓ {verb} vertex: {}", r.vertex)?;
        if r.roads_removed > 0 {
            writeln!(w, "  closed {} road(s)", r.roads_removed)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(subcommand)]
        cmd: VertexCommand,
    }

    #[test]
    fn remove_is_an_alias_for_rm() {
        let w = Wrapper::parse_from(["test", "remove", "Sé"]);
        let VertexCommand::Rm(a) = w.cmd else {
            panic!("expected Rm");
        };
        assert_eq!(a.name, "Sé");
    }
}
