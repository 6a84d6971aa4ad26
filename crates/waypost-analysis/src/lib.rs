#![forbid(unsafe_code)]
//! waypost-analysis library.
//!
//! Queries over a [`waypost_core::RoadNetwork`] or a bare
//! [`waypost_core::RoadGraph`]:
//!
//! - [`routing`]: cheapest itinerary and rerouting around closed roads.
//! - [`metrics`]: degree and closeness centrality rankings.
//! - [`tree`]: depth-first reachability tree from a chosen root.
//!
//! # Conventions
//!
//! - **Errors**: Return [`waypost_core::NetworkError`]; nothing here panics
//!   on user input.
//! - **Logging**: Use `tracing` macros; entry points are `#[instrument]`ed.

pub mod metrics;
pub mod routing;
pub mod tree;

pub use metrics::{closeness_centrality, rank_by_closeness, rank_by_in_degree, rank_by_out_degree};
pub use routing::{
    Alternatives, Itinerary, Route, cheapest_path, itinerary, ranked_alternatives, reroute,
    reroute_graph,
};
pub use tree::{build_tree, choose_root};
