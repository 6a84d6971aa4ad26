//! Route selection over enumerated simple paths.
//!
//! Neither query runs a shortest-path algorithm. Both enumerate every simple
//! path between two points (bounded by a [`PathBudget`]), weigh them, and
//! pick from the ordered list:
//!
//! - [`itinerary`] takes the lightest path and adds walking and driving time
//!   summed road by road;
//! - [`reroute`] closes roads for good and lists every remaining path
//!   between the first closed road's endpoints, lightest first.
//!
//! [`PathBudget`]: waypost_core::PathBudget

pub mod itinerary;
pub mod reroute;

pub use itinerary::{Itinerary, Route, cheapest_path, itinerary};
pub use reroute::{Alternatives, ranked_alternatives, reroute, reroute_graph};
