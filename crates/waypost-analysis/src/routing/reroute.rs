use serde::Serialize;
use tracing::{info, instrument};

use waypost_core::graph::{WeightedPath, enumerate_simple_paths, weigh_paths};
use waypost_core::sort::sort_ascending;
use waypost_core::{NetworkError, PathBudget, RoadGraph, RoadNetwork};

/// Every path left between a closed road's endpoints, lightest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternatives {
    pub from: String,
    pub to: String,
    pub routes: Vec<WeightedPath>,
    pub truncated: bool,
}

/// List every simple path from `from` to `to`, sorted by ascending distance.
///
/// # Errors
///
/// - [`NetworkError::NotFound`] if either label is not a vertex.
/// - [`NetworkError::NoRoute`] if the two are not connected.
pub fn ranked_alternatives(
    graph: &RoadGraph,
    from: &str,
    to: &str,
    budget: &PathBudget,
) -> Result<Alternatives, NetworkError> {
    let set = enumerate_simple_paths(graph, from, to, budget)?;
    if set.is_empty() {
        return Err(NetworkError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    let truncated = set.truncated;

    let keyed: Vec<(f64, Vec<String>)> = weigh_paths(graph, set.paths)?
        .into_iter()
        .map(|p| (p.distance_km, p.stops))
        .collect();
    let routes = sort_ascending(keyed)
        .into_iter()
        .map(|(distance_km, stops)| WeightedPath { distance_km, stops })
        .collect();

    Ok(Alternatives {
        from: from.to_string(),
        to: to.to_string(),
        routes,
        truncated,
    })
}

/// Close roads on a bare graph and list the alternatives.
///
/// Closures are applied in order and are permanent. If one of them names a
/// missing road, the ones before it stay closed.
///
/// # Errors
///
/// - [`NetworkError::NoClosures`] if `closures` is empty.
/// - [`NetworkError::NotFound`] for the first closure with no matching road.
/// - Anything [`ranked_alternatives`] returns, notably
///   [`NetworkError::NoRoute`] when the closures disconnected the endpoints.
#[instrument(skip_all, fields(closures = closures.len()))]
pub fn reroute_graph<S: AsRef<str>>(
    graph: &mut RoadGraph,
    closures: &[(S, S)],
    budget: &PathBudget,
) -> Result<Alternatives, NetworkError> {
    let (first_from, first_to) = closures.first().ok_or(NetworkError::NoClosures)?;

    for (from, to) in closures {
        graph.remove_edge(from.as_ref(), to.as_ref())?;
    }
    info!(closed = closures.len(), "closed roads");

    ranked_alternatives(graph, first_from.as_ref(), first_to.as_ref(), budget)
}

/// Close roads on a network and list the alternatives.
///
/// Same contract as [`reroute_graph`]; stored road records are removed along
/// with their edges.
///
/// # Errors
///
/// See [`reroute_graph`].
#[instrument(skip_all, fields(closures = closures.len()))]
pub fn reroute<S: AsRef<str>>(
    network: &mut RoadNetwork,
    closures: &[(S, S)],
    budget: &PathBudget,
) -> Result<Alternatives, NetworkError> {
    let (first_from, first_to) = closures.first().ok_or(NetworkError::NoClosures)?;

    for (from, to) in closures {
        network.remove_road(from.as_ref(), to.as_ref())?;
    }
    info!(closed = closures.len(), "closed roads");

    ranked_alternatives(network.graph(), first_from.as_ref(), first_to.as_ref(), budget)
}
