//! Closeness centrality over road distances.
//!
//! # Definition
//!
//! For a vertex `v`, run Dijkstra along outgoing roads and let `R` be the
//! set of other vertices it reaches:
//!
//! ```text
//! closeness(v) = |R| / Σ_{u ∈ R} dist(v, u)
//! ```
//!
//! Using the reached count rather than `n - 1` keeps the score meaningful on
//! networks that are not strongly connected. A vertex that reaches nothing
//! scores 0.
//!
//! A vertex whose every reached vertex lies at distance 0 scores
//! [`f64::INFINITY`], the limit of the ratio, and ranks first. Only graphs
//! built directly with zero-weight edges can produce it; a validated
//! [`RoadNetwork`](waypost_core::RoadNetwork) never holds a road of length 0.

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::visit::EdgeRef;
use tracing::debug;

use waypost_core::RoadGraph;
use waypost_core::sort::sort_descending;

/// Closeness score for every vertex.
#[must_use]
pub fn closeness_centrality(graph: &RoadGraph) -> HashMap<String, f64> {
    let inner = graph.inner();
    let mut scores = HashMap::with_capacity(graph.node_count());

    for idx in inner.node_indices() {
        let distances = dijkstra(inner, idx, None, |e| *e.weight());
        let (reached, total) = distances
            .iter()
            .filter(|(node, _)| **node != idx)
            .fold((0usize, 0.0f64), |(n, sum), (_, d)| (n + 1, sum + d));

        #[allow(clippy::cast_precision_loss)]
        let score = match reached {
            0 => 0.0,
            _ if total <= 0.0 => f64::INFINITY,
            n => n as f64 / total,
        };

        if let Some(label) = graph.label(idx) {
            scores.insert(label.to_string(), score);
        }
    }

    debug!(vertices = scores.len(), "computed closeness");
    scores
}

/// Every vertex paired with its closeness, highest first.
#[must_use]
pub fn rank_by_closeness(graph: &RoadGraph) -> Vec<(f64, String)> {
    let scored: Vec<(f64, String)> = closeness_centrality(graph)
        .into_iter()
        .map(|(label, score)| (score, label))
        .collect();
    sort_descending(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> RoadGraph {
        let mut g = RoadGraph::new();
        for v in ["A", "B", "C"] {
            g.add_vertex(v);
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.0).unwrap();
        g
    }

    #[test]
    fn chain_scores() {
        let scores = closeness_centrality(&chain());
        // A reaches B at 1 and C at 3.
        assert!((scores["A"] - 2.0 / 4.0).abs() < 1e-12);
        assert!((scores["B"] - 1.0 / 2.0).abs() < 1e-12);
        assert_eq!(scores["C"], 0.0);
    }

    #[test]
    fn shortcut_uses_shortest_distance() {
        let mut g = chain();
        g.add_vertex("D");
        g.add_edge("A", "D", 10.0).unwrap();
        g.add_edge("C", "D", 0.5).unwrap();
        let scores = closeness_centrality(&g);
        // A reaches D via B and C at 3.5, not directly at 10.
        assert!((scores["A"] - 3.0 / (1.0 + 3.0 + 3.5)).abs() < 1e-12);
    }

    #[test]
    fn sink_ranks_last() {
        let ranked = rank_by_closeness(&chain());
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked.last().map(|(_, v)| v.as_str()), Some("C"));
        for pair in ranked.windows(2) {
            assert!(pair[0].0 >= pair[1].0);
        }
    }

    #[test]
    fn isolated_vertex_scores_zero() {
        let mut g = RoadGraph::new();
        g.add_vertex("solo");
        assert_eq!(closeness_centrality(&g)["solo"], 0.0);
    }

    #[test]
    fn zero_distance_reach_ranks_first() {
        let mut g = RoadGraph::new();
        for v in ["A", "B", "C"] {
            g.add_vertex(v);
        }
        g.add_edge("A", "B", 0.0).unwrap();
        g.add_edge("C", "A", 2.0).unwrap();

        let scores = closeness_centrality(&g);
        assert_eq!(scores["A"], f64::INFINITY);
        assert_eq!(scores["B"], 0.0);
        // C reaches A at 2 and B at 2.
        assert!((scores["C"] - 2.0 / 4.0).abs() < 1e-12);

        let ranked = rank_by_closeness(&g);
        assert_eq!(ranked[0].1, "A");
    }
}
