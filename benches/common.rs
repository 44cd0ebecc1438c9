#![allow(dead_code)]

use fastrand::Rng;
use grafo::{
    core::marker::{Directed, EdgeType},
    gen::{gnp, with_random_weights, DEFAULT_WEIGHT_RANGE},
    storage::AdjList,
};
use petgraph::graph::NodeIndex;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// G(n, p) graph with weights from the default range.
pub fn grafo_random<Ty: EdgeType>(vertex_count: usize, density: f64, rng: &mut Rng) -> AdjList<f64, Ty> {
    let graph = gnp::<Ty>(vertex_count, density, rng).expect("density is a probability");

    with_random_weights(&graph, DEFAULT_WEIGHT_RANGE, rng)
        .expect("default weight range is not empty")
        .map_edges(|_, _, w| *w as f64)
}

/// The same graph in petgraph for comparison.
pub fn to_petgraph(graph: &AdjList<f64, Directed>) -> petgraph::Graph<(), f64, petgraph::Directed> {
    let mut converted = petgraph::Graph::with_capacity(graph.vertex_count(), graph.edge_count());

    for _ in graph.vertices() {
        converted.add_node(());
    }

    for (u, v, w) in graph.arcs() {
        converted.add_edge(NodeIndex::new(u), NodeIndex::new(v), *w);
    }

    converted
}
