//! Reachability trees grown from a root vertex.

use std::collections::HashSet;

use tracing::{debug, instrument};

use waypost_core::{EntityKind, NetworkError, RoadGraph};

/// Build the depth-first discovery tree of everything reachable from `root`.
///
/// The frontier is an explicit stack. A vertex is marked visited when it is
/// pushed, so it is discovered exactly once, and the road that discovered it
/// is copied into the tree with its distance. The result is acyclic and
/// every vertex in it is reachable from `root`.
///
/// # Errors
///
/// Returns [`NetworkError::NotFound`] if `root` is not a vertex.
#[instrument(skip(graph))]
pub fn build_tree(graph: &RoadGraph, root: &str) -> Result<RoadGraph, NetworkError> {
    if !graph.contains_vertex(root) {
        return Err(NetworkError::not_found(EntityKind::Vertex, root));
    }

    let mut tree = RoadGraph::new();
    tree.add_vertex(root);

    let mut visited: HashSet<&str> = HashSet::from([root]);
    let mut stack: Vec<&str> = vec![root];

    while let Some(current) = stack.pop() {
        for next in graph.neighbors(current) {
            if !visited.insert(next) {
                continue;
            }
            let weight = graph.weight(current, next).ok_or_else(|| {
                NetworkError::not_found(EntityKind::Road, NetworkError::road_id(current, next))
            })?;
            tree.add_vertex(next);
            tree.add_edge(current, next, weight)?;
            stack.push(next);
        }
    }

    debug!(vertices = tree.node_count(), "built tree");
    Ok(tree)
}

/// Of two candidate roots, pick the one with more outgoing roads.
///
/// Ties go to `a`.
///
/// # Errors
///
/// Returns [`NetworkError::NotFound`] if either candidate is not a vertex.
pub fn choose_root<'a>(graph: &RoadGraph, a: &'a str, b: &'a str) -> Result<&'a str, NetworkError> {
    for label in [a, b] {
        if !graph.contains_vertex(label) {
            return Err(NetworkError::not_found(EntityKind::Vertex, label));
        }
    }
    Ok(if graph.out_degree(a) >= graph.out_degree(b) { a } else { b })
}
