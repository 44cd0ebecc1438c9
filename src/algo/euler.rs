//! Find an [Eulerian cycle] of an undirected graph.
//!
//! The walk starts at the first vertex with an incident edge and always tries
//! the most recently listed neighbor first. An edge is committed only if the
//! remaining edges, together with the vertex the walk moves to, still form a
//! single component, so the walk never strands part of the graph (Fleury's
//! rule).
//!
//! [Eulerian cycle]: https://en.wikipedia.org/wiki/Eulerian_path
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::EulerCycle, graph::Graph};
//!
//! let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
//! let cycle = EulerCycle::on(&graph).run().unwrap();
//!
//! assert_eq!(cycle, vec![0, 2, 1, 0]);
//! ```

use thiserror::Error;

use crate::{algo::ConnectedComponents, core::marker::Undirected, storage::AdjList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("graph has no edges")]
    NoEdges,
    /// The walk got stuck at the vertex with edges left elsewhere in the
    /// graph.
    #[error("graph is not eulerian, the walk got stuck at vertex {0}")]
    NotEulerian(usize),
    /// All edges were used but the walk ended at a different vertex than it
    /// started.
    #[error("graph has an eulerian path from {start} to {end} but no cycle")]
    EulerianPath { start: usize, end: usize },
}

pub struct EulerCycle;

pub struct EulerCycleBuilder<'a, E> {
    graph: &'a AdjList<E, Undirected>,
}

impl EulerCycle {
    pub fn on<E>(graph: &AdjList<E, Undirected>) -> EulerCycleBuilder<'_, E> {
        EulerCycleBuilder { graph }
    }
}

impl<E> EulerCycleBuilder<'_, E> {
    /// Returns the visited vertices. The start vertex is repeated at the end,
    /// so the sequence has one more entry than the graph has edges.
    pub fn run(self) -> Result<Vec<usize>, Error> {
        fleury(self.graph.unweighted())
    }
}

fn fleury(mut remaining: AdjList<(), Undirected>) -> Result<Vec<usize>, Error> {
    let start = remaining
        .vertices()
        .find(|&v| remaining.degree(v) > 0)
        .ok_or(Error::NoEdges)?;

    let mut walk = Vec::with_capacity(remaining.edge_count() + 1);
    let mut current = start;

    while remaining.degree(current) > 0 {
        let next = remaining
            .neighbors(current)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .find_map(|next| {
                let mut reduced = remaining.clone();
                reduced.remove_edge(current, next);
                keeps_single_component(&reduced, next).then_some((next, reduced))
            });

        let (next, reduced) = next.ok_or(Error::NotEulerian(current))?;

        walk.push(current);
        remaining = reduced;
        current = next;
    }

    if remaining.edge_count() > 0 {
        return Err(Error::NotEulerian(current));
    }

    if current != start {
        return Err(Error::EulerianPath {
            start,
            end: current,
        });
    }

    walk.push(current);
    Ok(walk)
}

/// Whether the components with an edge, plus the one containing `next`, are
/// a single component.
fn keeps_single_component(graph: &AdjList<(), Undirected>, next: usize) -> bool {
    ConnectedComponents::on(graph)
        .run()
        .iter()
        .filter(|component| component.len() > 1 || component[0] == next)
        .count()
        == 1
}
