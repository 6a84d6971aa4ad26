#![forbid(unsafe_code)]
//! waypost-core library.
//!
//! # Conventions
//!
//! - **Errors**: Domain operations return [`error::NetworkError`]; file and
//!   config loading use `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod model;
pub mod network;
pub mod snapshot;
pub mod sort;

pub use error::{EntityKind, ErrorCode, NetworkError, ValidationFailure};
pub use graph::{PathBudget, PathSet, RoadGraph, WeightedPath};
pub use network::RoadNetwork;
