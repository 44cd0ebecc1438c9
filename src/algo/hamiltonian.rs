//! Find a [Hamiltonian cycle] by backtracking.
//!
//! The search is exhaustive and therefore exponential in the worst case. It
//! tries unvisited neighbors in adjacency order, so the result is
//! deterministic for a given graph.
//!
//! [Hamiltonian cycle]: https://en.wikipedia.org/wiki/Hamiltonian_path
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::HamiltonianCycle, graph::Graph};
//!
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
//! let cycle = HamiltonianCycle::on(&graph).run().unwrap();
//!
//! assert_eq!(cycle, Some(vec![0, 1, 2, 3]));
//! ```

use fixedbitset::FixedBitSet;

use crate::{
    core::{error::VertexOutOfBounds, marker::EdgeType},
    storage::AdjList,
};

pub struct HamiltonianCycle;

pub struct HamiltonianCycleBuilder<'a, E, Ty> {
    graph: &'a AdjList<E, Ty>,
    start: usize,
}

impl HamiltonianCycle {
    pub fn on<E, Ty: EdgeType>(graph: &AdjList<E, Ty>) -> HamiltonianCycleBuilder<'_, E, Ty> {
        HamiltonianCycleBuilder { graph, start: 0 }
    }
}

impl<'a, E, Ty: EdgeType> HamiltonianCycleBuilder<'a, E, Ty> {
    /// Vertex the cycle starts at. Default is 0.
    pub fn start(self, start: usize) -> Self {
        Self { start, ..self }
    }

    /// Returns the vertices of the cycle in order, beginning with the start
    /// vertex. The edge from the last vertex back to the start is implied.
    ///
    /// A single vertex forms a cycle only with a self-loop. The empty graph
    /// has no cycle.
    pub fn run(self) -> Result<Option<Vec<usize>>, VertexOutOfBounds> {
        let n = self.graph.vertex_count();
        if n == 0 {
            return Ok(None);
        }

        VertexOutOfBounds::check(self.start, n)?;
        Ok(backtrack(self.graph, self.start))
    }
}

fn backtrack<E, Ty: EdgeType>(graph: &AdjList<E, Ty>, start: usize) -> Option<Vec<usize>> {
    let n = graph.vertex_count();

    let mut on_path = FixedBitSet::with_capacity(n);
    let mut path = vec![start];
    // Index of the next neighbor to try for each vertex on the path.
    let mut next = vec![0];
    on_path.insert(start);

    loop {
        let current = *path.last()?;

        if path.len() == n {
            if graph.neighbors(current).any(|v| v == start) {
                return Some(path);
            }
        } else {
            let cursor = next.last_mut()?;
            let candidate = graph.adjacent(current)[*cursor..]
                .iter()
                .position(|(v, _)| !on_path.contains(*v));

            if let Some(offset) = candidate {
                let v = graph.adjacent(current)[*cursor + offset].0;
                *cursor += offset + 1;

                on_path.insert(v);
                path.push(v);
                next.push(0);
                continue;
            }
        }

        on_path.set(current, false);
        path.pop();
        next.pop();

        if path.is_empty() {
            return None;
        }
    }
}
