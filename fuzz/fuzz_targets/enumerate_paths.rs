#![no_main]

use libfuzzer_sys::fuzz_target;
use waypost_core::graph::{PathBudget, RoadGraph, enumerate_simple_paths, path_weight};

fuzz_target!(|data: &[u8]| {
    // First byte picks the vertex count; each following triple is an edge.
    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let n = usize::from(n % 8) + 1;
    let label = |i: u8| format!("v{}", usize::from(i) % n);

    let mut graph = RoadGraph::new();
    for i in 0..n {
        graph.add_vertex(&format!("v{i}"));
    }
    for edge in rest.chunks_exact(3) {
        let _ = graph.add_edge(&label(edge[0]), &label(edge[1]), f64::from(edge[2]));
    }

    let budget = PathBudget {
        max_paths: Some(500),
        max_hops: None,
    };
    let end = format!("v{}", n - 1);
    let set = enumerate_simple_paths(&graph, "v0", &end, &budget).expect("endpoints exist");
    for path in &set.paths {
        assert!(path_weight(&graph, path).is_ok());
    }
});
