//! Collection of simple utilities for various properties and calculations.

use super::marker::EdgeType;

/// Returns the number of edges in a [complete graph] given the vertex count and
/// directionality. Self-loops are not counted.
///
/// [complete graph]: https://en.wikipedia.org/wiki/Complete_graph
///
/// # Examples
///
/// ```
/// use grafo::core::{facts::complete_graph_edge_count, marker::Undirected};
///
/// assert_eq!(complete_graph_edge_count::<Undirected>(5), 10);
/// ```
pub fn complete_graph_edge_count<Ty: EdgeType>(vertex_count: usize) -> usize {
    let pairs = vertex_count * vertex_count.saturating_sub(1);
    if Ty::is_directed() {
        pairs
    } else {
        pairs / 2
    }
}

/// Returns `true` if the given vertex degree sequence can belong to a graph
/// with respect to the [handshaking lemma], i.e., the sum of degrees is even.
///
/// [handshaking lemma]: https://en.wikipedia.org/wiki/Handshaking_lemma
pub fn has_even_degree_sum(degrees: &[usize]) -> bool {
    degrees.iter().sum::<usize>() % 2 == 0
}
