#![allow(dead_code)]

use std::path::PathBuf;

use routefinder_lib::{Edge, RouteGraph, Station};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn graph_from(edges: &[(&str, &str, u64)]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for &(source, destination, weight) in edges {
        graph.add_edge(Edge {
            source: Station::new(source),
            destination: Station::new(destination),
            weight,
        });
    }
    graph
}
