//! Exhaustive simple-path enumeration.
//!
//! # Algorithm
//!
//! The frontier holds *partial paths*, not single vertices:
//!
//! 1. Seed the queue with `[start]`.
//! 2. Pop the oldest partial path. If it ends at `end`, emit it.
//! 3. Otherwise extend it by every outgoing neighbor not already on the
//!    path and push the extensions to the back of the queue.
//!
//! Because whole paths are tracked this yields **every** simple path, not
//! only the shortest, and the count can grow exponentially on dense cyclic
//! graphs. A path never exceeds the vertex count, so the search always
//! terminates; [`PathBudget`] bounds it further and flags truncation.
//!
//! Paths come out in non-decreasing hop count (FIFO expansion order).

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{instrument, warn};

use crate::error::{EntityKind, NetworkError};
use crate::graph::RoadGraph;

/// Limits on how much of the path space an enumeration may explore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathBudget {
    /// Stop after this many complete paths.
    pub max_paths: Option<usize>,
    /// Do not extend paths beyond this many edges.
    pub max_hops: Option<usize>,
}

impl PathBudget {
    /// No limits: enumerate every simple path.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_paths: None,
            max_hops: None,
        }
    }
}

impl Default for PathBudget {
    fn default() -> Self {
        Self {
            max_paths: Some(10_000),
            max_hops: None,
        }
    }
}

/// Result of a path enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSet {
    /// Complete paths from start to end, in discovery order.
    pub paths: Vec<Vec<String>>,
    /// `true` if a [`PathBudget`] limit cut the search short while partial
    /// paths were still unexplored.
    ///
    /// The flag is conservative: those partial paths are not followed to
    /// see whether any of them reaches `end`, so it can be set even when no
    /// further simple path exists. `false` always means the result is
    /// complete.
    pub truncated: bool,
}

impl PathSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// A path paired with its total distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath {
    pub distance_km: f64,
    pub stops: Vec<String>,
}

/// Enumerate every simple directed path from `start` to `end`.
///
/// `start == end` returns exactly `[[start]]` without looking at edges.
///
/// # Errors
///
/// Returns [`NetworkError::NotFound`] if `start` or `end` is not a vertex.
#[instrument(skip(graph, budget))]
pub fn enumerate_simple_paths(
    graph: &RoadGraph,
    start: &str,
    end: &str,
    budget: &PathBudget,
) -> Result<PathSet, NetworkError> {
    for label in [start, end] {
        if !graph.contains_vertex(label) {
            return Err(NetworkError::not_found(EntityKind::Vertex, label));
        }
    }

    if start == end {
        return Ok(PathSet {
            paths: vec![vec![start.to_string()]],
            truncated: false,
        });
    }

    let mut found: Vec<Vec<String>> = Vec::new();
    let mut truncated = false;
    let mut frontier: VecDeque<Vec<&str>> = VecDeque::from([vec![start]]);

    while let Some(path) = frontier.pop_front() {
        let Some(&last) = path.last() else {
            continue;
        };

        if last == end {
            found.push(path.iter().map(|s| (*s).to_string()).collect());
            if budget.max_paths.is_some_and(|max| found.len() >= max) {
                // Pending partial paths may all be dead ends.
                truncated = !frontier.is_empty();
                break;
            }
            continue;
        }

        let hops = path.len() - 1;
        for next in graph.neighbors(last) {
            if path.contains(&next) {
                continue;
            }
            if budget.max_hops.is_some_and(|max| hops >= max) {
                truncated = true;
                continue;
            }
            let mut extended = path.clone();
            extended.push(next);
            frontier.push_back(extended);
        }
    }

    if truncated {
        warn!(start, end, paths = found.len(), "path enumeration truncated by budget");
    }

    Ok(PathSet {
        paths: found,
        truncated,
    })
}

/// Total distance along `path`; 0 for a single-vertex path.
///
/// # Errors
///
/// Returns [`NetworkError::NotFound`] if a consecutive pair is not joined by
/// an edge in the path's direction.
pub fn path_weight<S: AsRef<str>>(graph: &RoadGraph, path: &[S]) -> Result<f64, NetworkError> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        graph
            .weight(from, to)
            .map(|w| total + w)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Road, NetworkError::road_id(from, to)))
    })
}

/// Pair every path with its total distance, preserving order.
///
/// # Errors
///
/// Propagates [`path_weight`] errors.
pub fn weigh_paths(graph: &RoadGraph, paths: Vec<Vec<String>>) -> Result<Vec<WeightedPath>, NetworkError> {
    paths
        .into_iter()
        .map(|stops| {
            Ok(WeightedPath {
                distance_km: path_weight(graph, &stops)?,
                stops,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(vertices: &[&str], edges: &[(&str, &str, f64)]) -> RoadGraph {
        let mut g = RoadGraph::new();
        for v in vertices {
            g.add_vertex(v);
        }
        for (a, b, w) in edges {
            g.add_edge(a, b, *w).unwrap();
        }
        g
    }

    fn sorted(mut paths: Vec<Vec<String>>) -> Vec<Vec<String>> {
        paths.sort();
        paths
    }

    fn p(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn trivial_path_ignores_edges() {
        let g = graph(&["A", "B"], &[("A", "B", 1.0)]);
        let set = enumerate_simple_paths(&g, "A", "A", &PathBudget::unbounded()).unwrap();
        assert_eq!(set.paths, vec![p(&["A"])]);
        assert!(!set.truncated);
    }

    #[test]
    fn all_simple_paths_in_diamond() {
        let g = graph(
            &["S", "A", "B", "T"],
            &[("S", "A", 1.0), ("S", "B", 1.0), ("A", "T", 1.0), ("B", "T", 1.0), ("A", "B", 1.0)],
        );
        let set = enumerate_simple_paths(&g, "S", "T", &PathBudget::unbounded()).unwrap();
        assert_eq!(
            sorted(set.paths),
            vec![p(&["S", "A", "B", "T"]), p(&["S", "A", "T"]), p(&["S", "B", "T"])]
        );
    }

    #[test]
    fn paths_emerge_in_hop_order() {
        let g = graph(
            &["S", "A", "B", "T"],
            &[("S", "A", 1.0), ("A", "B", 1.0), ("B", "T", 1.0), ("S", "T", 9.0)],
        );
        let set = enumerate_simple_paths(&g, "S", "T", &PathBudget::unbounded()).unwrap();
        assert_eq!(set.paths, vec![p(&["S", "T"]), p(&["S", "A", "B", "T"])]);
    }

    #[test]
    fn cycles_do_not_loop() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0), ("C", "D", 1.0)],
        );
        let set = enumerate_simple_paths(&g, "A", "D", &PathBudget::unbounded()).unwrap();
        assert_eq!(set.paths, vec![p(&["A", "B", "C", "D"])]);
    }

    #[test]
    fn direction_matters() {
        let g = graph(&["A", "B"], &[("A", "B", 1.0)]);
        let set = enumerate_simple_paths(&g, "B", "A", &PathBudget::unbounded()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn unknown_endpoint_is_not_found() {
        let g = graph(&["A"], &[]);
        let err = enumerate_simple_paths(&g, "A", "Z", &PathBudget::unbounded()).unwrap_err();
        assert_eq!(err, NetworkError::not_found(EntityKind::Vertex, "Z"));
    }

    #[test]
    fn max_paths_truncates() {
        let g = graph(
            &["S", "A", "B", "T"],
            &[("S", "A", 1.0), ("S", "B", 1.0), ("A", "T", 1.0), ("B", "T", 1.0), ("S", "T", 1.0)],
        );
        let budget = PathBudget {
            max_paths: Some(1),
            max_hops: None,
        };
        let set = enumerate_simple_paths(&g, "S", "T", &budget).unwrap();
        assert_eq!(set.paths, vec![p(&["S", "T"])]);
        assert!(set.truncated);
    }

    #[test]
    fn max_hops_truncates() {
        let g = graph(
            &["S", "A", "B", "T"],
            &[("S", "A", 1.0), ("A", "B", 1.0), ("B", "T", 1.0), ("S", "T", 5.0)],
        );
        let budget = PathBudget {
            max_paths: None,
            max_hops: Some(2),
        };
        let set = enumerate_simple_paths(&g, "S", "T", &budget).unwrap();
        assert_eq!(set.paths, vec![p(&["S", "T"])]);
        assert!(set.truncated);
    }

    #[test]
    fn truncation_flag_is_conservative() {
        // S→A→D never reaches T, but it is still pending when S→T is found.
        let g = graph(
            &["S", "A", "D", "T"],
            &[("S", "T", 1.0), ("S", "A", 1.0), ("A", "D", 1.0)],
        );
        let budget = PathBudget {
            max_paths: Some(1),
            max_hops: None,
        };
        let set = enumerate_simple_paths(&g, "S", "T", &budget).unwrap();
        assert_eq!(set.paths, vec![p(&["S", "T"])]);
        assert!(set.truncated);

        let full = enumerate_simple_paths(&g, "S", "T", &PathBudget::unbounded()).unwrap();
        assert_eq!(full.paths, set.paths);
        assert!(!full.truncated);
    }

    #[test]
    fn budget_exactly_met_is_not_truncated() {
        let g = graph(&["S", "T"], &[("S", "T", 1.0)]);
        let budget = PathBudget {
            max_paths: Some(1),
            max_hops: Some(1),
        };
        let set = enumerate_simple_paths(&g, "S", "T", &budget).unwrap();
        assert_eq!(set.paths.len(), 1);
        assert!(!set.truncated);
    }

    #[test]
    fn weight_sums_consecutive_pairs() {
        let g = graph(&["X", "Y", "Z"], &[("X", "Y", 2.0), ("Y", "Z", 3.5)]);
        assert!((path_weight(&g, &["X", "Y", "Z"]).unwrap() - 5.5).abs() < 1e-12);
        assert_eq!(path_weight(&g, &["X"]).unwrap(), 0.0);
        assert!(path_weight(&g, &["Z", "Y"]).is_err());
    }

    #[test]
    fn weigh_paths_keeps_order() {
        let g = graph(&["X", "Y", "Z"], &[("X", "Y", 2.0), ("Y", "Z", 3.0), ("X", "Z", 10.0)]);
        let weighed = weigh_paths(&g, vec![p(&["X", "Z"]), p(&["X", "Y", "Z"])]).unwrap();
        assert_eq!(weighed[0].distance_km, 10.0);
        assert_eq!(weighed[1].distance_km, 5.0);
    }
}
