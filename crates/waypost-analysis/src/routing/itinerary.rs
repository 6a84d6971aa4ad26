use serde::Serialize;
use tracing::{debug, instrument};

use waypost_core::graph::{enumerate_simple_paths, weigh_paths};
use waypost_core::sort::sort_descending;
use waypost_core::{EntityKind, NetworkError, PathBudget, RoadGraph, RoadNetwork};

/// The lightest path between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub stops: Vec<String>,
    pub distance_km: f64,
    /// The enumeration hit its budget; a lighter path may exist.
    pub truncated: bool,
}

/// A [`Route`] with travel times summed over its roads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub stops: Vec<String>,
    pub distance_km: f64,
    pub walk_time_hours: f64,
    pub drive_time_hours: f64,
    pub truncated: bool,
}

/// Find the minimum-distance simple path from `start` to `end`.
///
/// Distance is total edge weight, not hop count. Among equally light paths
/// any one may be returned.
///
/// # Errors
///
/// - [`NetworkError::NotFound`] if either label is not a vertex.
/// - [`NetworkError::NoRoute`] if no path connects them.
#[instrument(skip(graph, budget))]
pub fn cheapest_path(
    graph: &RoadGraph,
    start: &str,
    end: &str,
    budget: &PathBudget,
) -> Result<Route, NetworkError> {
    let set = enumerate_simple_paths(graph, start, end, budget)?;
    let truncated = set.truncated;
    let candidates = set.paths.len();

    let weighted: Vec<(f64, Vec<String>)> = weigh_paths(graph, set.paths)?
        .into_iter()
        .map(|p| (p.distance_km, p.stops))
        .collect();

    // Heaviest first, so the answer is the last element.
    let (distance_km, stops) = sort_descending(weighted)
        .pop()
        .ok_or_else(|| NetworkError::NoRoute {
            from: start.to_string(),
            to: end.to_string(),
        })?;

    debug!(candidates, distance_km, hops = stops.len() - 1, "selected cheapest path");
    Ok(Route {
        stops,
        distance_km,
        truncated,
    })
}

/// Plan the shortest trip between two points of a network.
///
/// Walking and driving times are the sums of each traversed road's own
/// times, since roads have different speeds.
///
/// # Errors
///
/// Same as [`cheapest_path`], plus [`NetworkError::NotFound`] if a road on
/// the path has no stored record.
pub fn itinerary(
    network: &RoadNetwork,
    start: &str,
    end: &str,
    budget: &PathBudget,
) -> Result<Itinerary, NetworkError> {
    let route = cheapest_path(network.graph(), start, end, budget)?;

    let (walk_time_hours, drive_time_hours) =
        route
            .stops
            .windows(2)
            .try_fold((0.0, 0.0), |(walk, drive), pair| {
                let road = network.road(&pair[0], &pair[1]).ok_or_else(|| {
                    NetworkError::not_found(
                        EntityKind::Road,
                        NetworkError::road_id(&pair[0], &pair[1]),
                    )
                })?;
                Ok::<_, NetworkError>((walk + road.walk_time_hours, drive + road.drive_time_hours))
            })?;

    Ok(Itinerary {
        stops: route.stops,
        distance_km: route.distance_km,
        walk_time_hours,
        drive_time_hours,
        truncated: route.truncated,
    })
}
