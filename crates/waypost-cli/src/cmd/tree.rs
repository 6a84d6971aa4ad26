//! `waypost tree` — depth-first reachability tree.

use clap::Args;
use serde::Serialize;

use waypost_analysis::{build_tree, choose_root};
use waypost_core::RoadGraph;

use super::Context;
use crate::output::render;

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Root point.
    pub root: String,
    /// Second candidate; the one with more outgoing roads wins.
    pub other: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TreeEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
pub struct TreeView<'a> {
    pub root: &'a str,
    pub vertices: Vec<&'a str>,
    pub roads: Vec<TreeEdge<'a>>,
}

/// Indented lines from `root` down, children in label order.
fn outline(tree: &RoadGraph, root: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
    while let Some((vertex, depth)) = stack.pop() {
        lines.push(format!("{}{vertex}", "  ".repeat(depth)));
        let mut children: Vec<&str> = tree.neighbors(vertex).collect();
        children.sort_unstable();
        stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
    }
    lines
}

pub fn run_tree(ctx: &Context, args: &TreeArgs) -> anyhow::Result<()> {
    let graph = ctx.network.graph();
    let root = match &args.other {
        Some(other) => choose_root(graph, &args.root, other)?,
        None => args.root.as_str(),
    };
    let tree = build_tree(graph, root)?;

    let view = TreeView {
        root,
        vertices: tree.vertices().into_iter().collect(),
        roads: tree
            .weighted_edges()
            .into_iter()
            .map(|(from, to, distance_km)| TreeEdge {
                from,
                to,
                distance_km,
            })
            .collect(),
    };

    render(ctx.output, &view, |view, w| {
        for line in outline(&tree, view.root) {
            writeln!(w, "{line}")?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_indents_by_depth() {
        let mut g = RoadGraph::new();
        for v in ["R", "A", "B", "C"] {
            g.add_vertex(v);
        }
        g.add_edge("R", "B", 1.0).unwrap();
        g.add_edge("R", "A", 1.0).unwrap();
        g.add_edge("A", "C", 1.0).unwrap();

        assert_eq!(outline(&g, "R"), vec!["R", "  A", "    C", "  B"]);
    }
}
