//! Vertex centrality rankings for the road network.
//!
//! # Overview
//!
//! Each ranking answers a different question about which points matter most
//! to the network:
//!
//! - **Out-degree** (`degree`): how many roads leave a point.
//! - **In-degree** (`degree`): how many roads arrive at a point.
//! - **Closeness** (`closeness`): how cheaply a point reaches the rest of
//!   the network along its outgoing roads.
//!
//! Rankings are `(score, label)` pairs ordered highest first with
//! [`sort_descending`]. Vertices with equal scores come out in **no
//! particular order**; tests must not depend on it.
//!
//! [`sort_descending`]: waypost_core::sort::sort_descending

pub mod closeness;
pub mod degree;

pub use closeness::{closeness_centrality, rank_by_closeness};
pub use degree::{rank_by_in_degree, rank_by_out_degree};
