//! Find the [maximum flow] between two vertices of a capacitated directed
//! graph.
//!
//! Edge weights are capacities. Parallel arcs share the flow between them in
//! their stored order, each up to its own capacity.
//!
//! [maximum flow]: https://en.wikipedia.org/wiki/Maximum_flow_problem
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::MaxFlow, graph::WeightedDigraph};
//!
//! let graph = WeightedDigraph::<u32>::from_edges(4, [(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)]);
//! let max_flow = MaxFlow::on(&graph).run(0, 3).unwrap();
//!
//! assert_eq!(max_flow.value(), &4);
//! assert_eq!(max_flow.flow().edge(0, 1), Some(&2));
//! ```

use thiserror::Error;

use crate::{
    core::{error::VertexOutOfBounds, marker::Directed, weight::Weight},
    storage::AdjList,
};

mod edmonds_karp;

/// The error encountered during a [`MaxFlow`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("source and sink are the same vertex {0}")]
    SourceIsSink(usize),

    #[error("edge {0} -> {1} has negative capacity")]
    NegativeCapacity(usize, usize),

    #[error(transparent)]
    OutOfBounds(#[from] VertexOutOfBounds),
}

/// Value of the maximum flow and the flow on every arc.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow<W> {
    value: W,
    flow: AdjList<W, Directed>,
}

impl<W> MaxFlow<W> {
    pub fn on(graph: &AdjList<W, Directed>) -> MaxFlowBuilder<'_, W> {
        MaxFlowBuilder { graph }
    }

    /// Total flow leaving the source.
    pub fn value(&self) -> &W {
        &self.value
    }

    /// Graph with the same arcs as the input, weighted by their flow.
    pub fn flow(&self) -> &AdjList<W, Directed> {
        &self.flow
    }

    pub fn into_flow(self) -> AdjList<W, Directed> {
        self.flow
    }
}

pub struct MaxFlowBuilder<'a, W> {
    graph: &'a AdjList<W, Directed>,
}

impl<'a, W: Weight> MaxFlowBuilder<'a, W> {
    /// Runs the [Edmonds–Karp
    /// algorithm](https://en.wikipedia.org/wiki/Edmonds%E2%80%93Karp_algorithm).
    pub fn run(self, source: usize, sink: usize) -> Result<MaxFlow<W>, Error> {
        let vertex_count = self.graph.vertex_count();
        VertexOutOfBounds::check(source, vertex_count)?;
        VertexOutOfBounds::check(sink, vertex_count)?;

        if source == sink {
            return Err(Error::SourceIsSink(source));
        }

        if let Some((u, v, _)) = self.graph.arcs().find(|(_, _, w)| w.is_negative()) {
            return Err(Error::NegativeCapacity(u, v));
        }

        let (value, flow) = edmonds_karp::edmonds_karp(self.graph, source, sink);
        Ok(MaxFlow { value, flow })
    }
}
