//! Constructors of well-known graphs and a sanity check of graph invariants.

use thiserror::Error;

use crate::{
    core::{facts, marker::EdgeType},
    storage::AdjList,
};

pub fn create_complete<E, Ty>(vertex_count: usize) -> AdjList<E, Ty>
where
    E: Default + Clone,
    Ty: EdgeType,
{
    let mut graph = AdjList::with_vertices(vertex_count);

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !Ty::is_directed() && v > u {
                break;
            }

            graph.add_edge(u, v, E::default());
        }
    }

    debug_assert_eq!(
        graph.edge_count(),
        facts::complete_graph_edge_count::<Ty>(vertex_count)
    );

    graph
}

pub fn create_path<E, Ty>(vertex_count: usize) -> AdjList<E, Ty>
where
    E: Default + Clone,
    Ty: EdgeType,
{
    let mut graph = AdjList::with_vertices(vertex_count);

    for v in 1..vertex_count {
        graph.add_edge(v - 1, v, E::default());
    }

    graph
}

/// Path closed by an edge from the last vertex to the first one. Needs at
/// least three vertices to be a simple cycle.
pub fn create_cycle<E, Ty>(vertex_count: usize) -> AdjList<E, Ty>
where
    E: Default + Clone,
    Ty: EdgeType,
{
    let mut graph = create_path(vertex_count);

    if vertex_count > 1 {
        graph.add_edge(vertex_count - 1, 0, E::default());
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of in-degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
    #[error("edge {0} -> {1} has no counterpart {1} -> {0}")]
    Asymmetric(usize, usize),
}

pub fn check_consistency<E, Ty: EdgeType>(graph: &AdjList<E, Ty>) -> Result<(), ConsistencyCheckError> {
    let edge_count = graph.edge_count();

    let edges = graph.edges().count();
    if edges != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(edges, edge_count));
    }

    let deg_sum = graph.vertex_degrees().into_iter().sum::<usize>();

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if Ty::is_directed() {
        let in_deg_sum = graph.in_degrees().into_iter().sum::<usize>();
        if in_deg_sum != edge_count {
            return Err(ConsistencyCheckError::HandshakingLemmaDirected(in_deg_sum, edge_count));
        }
    } else {
        if deg_sum != 2 * edge_count {
            return Err(ConsistencyCheckError::HandshakingLemma(deg_sum, 2 * edge_count));
        }

        if let Some((u, v, _)) = graph
            .arcs()
            .find(|&(u, v, _)| graph.multiplicity(u, v) != graph.multiplicity(v, u))
        {
            return Err(ConsistencyCheckError::Asymmetric(u, v));
        }
    }

    Ok(())
}

/// Sorted degree sequence, used to compare graphs up to vertex relabelling.
pub fn degree_multiset<E, Ty: EdgeType>(graph: &AdjList<E, Ty>) -> Vec<usize> {
    let mut degrees = graph.vertex_degrees();
    degrees.sort_unstable();
    degrees
}
