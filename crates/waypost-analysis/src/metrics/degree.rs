//! Degree centrality.

use waypost_core::RoadGraph;
use waypost_core::sort::sort_descending;

/// Every vertex paired with its out-degree, highest first.
#[must_use]
pub fn rank_by_out_degree(graph: &RoadGraph) -> Vec<(usize, String)> {
    rank_by(graph, RoadGraph::out_degree)
}

/// Every vertex paired with its in-degree, highest first.
#[must_use]
pub fn rank_by_in_degree(graph: &RoadGraph) -> Vec<(usize, String)> {
    rank_by(graph, RoadGraph::in_degree)
}

fn rank_by(graph: &RoadGraph, degree: fn(&RoadGraph, &str) -> usize) -> Vec<(usize, String)> {
    let scored: Vec<(usize, String)> = graph
        .vertices()
        .into_iter()
        .map(|label| (degree(graph, label), label.to_string()))
        .collect();
    sort_descending(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> RoadGraph {
        let mut g = RoadGraph::new();
        for v in ["C", "A", "B", "D"] {
            g.add_vertex(v);
        }
        for leaf in ["A", "B", "D"] {
            g.add_edge("C", leaf, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn star_center_leads_out_degree() {
        let ranked = rank_by_out_degree(&star());
        assert_eq!(ranked[0], (3, "C".to_string()));
        assert!(ranked[1..].iter().all(|(d, _)| *d == 0));
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn star_leaves_lead_in_degree() {
        let ranked = rank_by_in_degree(&star());
        assert_eq!(ranked.last(), Some(&(0, "C".to_string())));
        let mut leaves: Vec<&str> = ranked[..3].iter().map(|(_, v)| v.as_str()).collect();
        leaves.sort_unstable();
        assert_eq!(leaves, vec!["A", "B", "D"]);
        assert!(ranked[..3].iter().all(|(d, _)| *d == 1));
    }

    #[test]
    fn empty_graph_ranks_nothing() {
        assert!(rank_by_out_degree(&RoadGraph::new()).is_empty());
    }
}
