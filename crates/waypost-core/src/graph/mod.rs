//! Directed weighted road graph and simple-path enumeration.
//!
//! # Overview
//!
//! [`RoadGraph`] is a label-only graph: vertices are point-of-interest
//! names, edges carry a distance in kilometers. Point attributes live in
//! [`crate::model`], not here.
//!
//! Storage is directed, but the network is two-way in practice: an edge is
//! rejected when either direction between the same two labels already
//! exists, so [`RoadGraph::edges`] never reports a pair twice.
//!
//! ## Pipeline
//!
//! ```text
//! RoadGraph
//!        ↓  paths::enumerate_simple_paths()
//! PathSet (every simple path start → end, FIFO expansion order)
//!        ↓  paths::weigh_paths()
//! Vec<WeightedPath>
//!        ↓  sort::sort_descending()
//! ranked routes (see waypost-analysis)
//! ```

pub mod paths;
pub mod road_graph;

pub use paths::{PathBudget, PathSet, WeightedPath, enumerate_simple_paths, path_weight, weigh_paths};
pub use road_graph::RoadGraph;
