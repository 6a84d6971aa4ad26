//! Domain records: points of interest and the roads between them.

pub mod point;
pub mod road;

pub use point::{Category, PointOfInterest, Rating};
pub use road::{Road, RoadRecord, format_hours};
