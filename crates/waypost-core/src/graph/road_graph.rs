//! The road graph ADT.
//!
//! Vertices and edges live in a petgraph [`StableDiGraph`] so that indices
//! stay valid when a vertex is removed. A label → index map sits beside it,
//! the same shape the triage dependency graph uses.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeSet, HashMap};

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use tracing::debug;

use crate::error::{EntityKind, NetworkError, ValidationFailure};

/// A directed graph of road distances between labelled vertices.
///
/// Invariants:
/// - every edge joins two existing vertices;
/// - no self-loops;
/// - at most one edge per unordered pair of labels.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    graph: StableDiGraph<String, f64>,
    node_map: HashMap<String, NodeIndex>,
}

impl RoadGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of (directed) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    #[must_use]
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    /// Whether the directed edge `from → to` exists.
    #[must_use]
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.weight(from, to).is_some()
    }

    /// Whether `a` and `b` are joined in either direction.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        self.contains_edge(a, b) || self.contains_edge(b, a)
    }

    /// Add an isolated vertex. Returns `false` if `label` was already present.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        if self.node_map.contains_key(label) {
            return false;
        }
        let idx = self.graph.add_node(label.to_string());
        self.node_map.insert(label.to_string(), idx);
        debug!(vertex = label, "added vertex");
        true
    }

    /// Add the edge `from → to` with the given weight.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::NotFound`] if either endpoint is not a vertex.
    /// - [`NetworkError::ValidationFailed`] if `from == to`.
    /// - [`NetworkError::Duplicate`] if an edge already joins the two
    ///   vertices in either direction.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), NetworkError> {
        let from_idx = self.require(from)?;
        let to_idx = self.require(to)?;

        if from_idx == to_idx {
            return Err(ValidationFailure::SameEndpoints(from.to_string()).into());
        }
        if self.graph.find_edge(from_idx, to_idx).is_some()
            || self.graph.find_edge(to_idx, from_idx).is_some()
        {
            return Err(NetworkError::duplicate(
                EntityKind::Road,
                NetworkError::road_id(from, to),
            ));
        }

        self.graph.add_edge(from_idx, to_idx, weight);
        debug!(from, to, weight, "added edge");
        Ok(())
    }

    /// Remove a vertex and every edge entering or leaving it.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotFound`] if `label` is not a vertex.
    pub fn remove_vertex(&mut self, label: &str) -> Result<(), NetworkError> {
        let idx = self
            .node_map
            .remove(label)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Vertex, label))?;
        // StableGraph drops incident edges in both directions.
        self.graph.remove_node(idx);
        debug!(vertex = label, "removed vertex");
        Ok(())
    }

    /// Remove the directed edge `from → to`, returning its weight.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotFound`] if the edge does not exist.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<f64, NetworkError> {
        let edge = self
            .index(from)
            .zip(self.index(to))
            .and_then(|(a, b)| self.graph.find_edge(a, b))
            .ok_or_else(|| NetworkError::not_found(EntityKind::Road, NetworkError::road_id(from, to)))?;
        let weight = self
            .graph
            .remove_edge(edge)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Road, NetworkError::road_id(from, to)))?;
        debug!(from, to, "removed edge");
        Ok(weight)
    }

    /// Number of edges leaving `label`; 0 if absent.
    #[must_use]
    pub fn out_degree(&self, label: &str) -> usize {
        self.degree(label, Direction::Outgoing)
    }

    /// Number of edges entering `label`; 0 if absent.
    #[must_use]
    pub fn in_degree(&self, label: &str) -> usize {
        self.degree(label, Direction::Incoming)
    }

    /// All vertex labels, sorted.
    #[must_use]
    pub fn vertices(&self) -> BTreeSet<&str> {
        self.node_map.keys().map(String::as_str).collect()
    }

    /// Every connection once, in its stored direction, sorted.
    #[must_use]
    pub fn edges(&self) -> BTreeSet<(&str, &str)> {
        self.weighted_edges()
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect()
    }

    /// Every stored edge with its weight, sorted by endpoints.
    #[must_use]
    pub fn weighted_edges(&self) -> Vec<(&str, &str, f64)> {
        let mut edges: Vec<(&str, &str, f64)> = self
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                let weight = *self.graph.edge_weight(e)?;
                Some((self.label(a)?, self.label(b)?, weight))
            })
            .collect();
        edges.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
        edges
    }

    /// Weight of `from → to`, or `None` when there is no such edge.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let a = self.index(from)?;
        let b = self.index(to)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Labels reachable from `label` over one outgoing edge.
    ///
    /// Empty if `label` is absent.
    pub fn neighbors<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.index(label)
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors_directed(idx, Direction::Outgoing))
            .filter_map(move |n| self.label(n))
    }

    /// Labels with an edge pointing at `label`.
    pub fn predecessors<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.index(label)
            .into_iter()
            .flat_map(move |idx| self.graph.neighbors_directed(idx, Direction::Incoming))
            .filter_map(move |n| self.label(n))
    }

    /// Look up the petgraph index for a label.
    #[must_use]
    pub fn index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label stored at a petgraph index.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Borrow the underlying petgraph graph for algorithm crates.
    #[must_use]
    pub const fn inner(&self) -> &StableDiGraph<String, f64> {
        &self.graph
    }

    fn require(&self, label: &str) -> Result<NodeIndex, NetworkError> {
        self.index(label)
            .ok_or_else(|| NetworkError::not_found(EntityKind::Vertex, label))
    }

    fn degree(&self, label: &str, direction: Direction) -> usize {
        self.index(label)
            .map_or(0, |idx| self.graph.neighbors_directed(idx, direction).count())
    }
}
