//! Distances between all pairs of vertices and the graph centers derived from
//! them.
//!
//! [Johnson's algorithm] computes potentials with Bellman-Ford from a virtual
//! source, reweights every arc to be nonnegative and runs Dijkstra from every
//! vertex. It supports negative weights as long as there is no negative
//! cycle.
//!
//! [Johnson's algorithm]: https://en.wikipedia.org/wiki/Johnson%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::AllPairs, graph::WeightedDigraph};
//!
//! let graph = WeightedDigraph::<i64>::from_edges(3, [(0, 1, 4), (1, 2, -2), (0, 2, 3)]);
//! let distances = AllPairs::on(&graph).run().unwrap();
//!
//! assert_eq!(distances.dist(0, 2), Some(&2));
//! assert_eq!(distances.dist(2, 0), None);
//! ```

use thiserror::Error;

use crate::{
    core::{marker::EdgeType, weight::Weight},
    storage::AdjList,
};

mod johnson;

/// The error encountered during an [`AllPairs`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A negative cycle encountered.
    #[error("negative cycle encountered")]
    NegativeCycle,
}

/// Square matrix of shortest path distances. `None` marks an unreachable
/// pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W> {
    vertex_count: usize,
    dist: Vec<Option<W>>,
}

impl<W> DistanceMatrix<W> {
    pub(crate) fn from_rows(rows: Vec<Vec<Option<W>>>) -> Self {
        Self {
            vertex_count: rows.len(),
            dist: rows.into_iter().flatten().collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn dist(&self, from: usize, to: usize) -> Option<&W> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return None;
        }

        self.dist[from * self.vertex_count + to].as_ref()
    }

    /// Distances from the vertex to all vertices.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn row(&self, from: usize) -> &[Option<W>] {
        let start = from * self.vertex_count;
        &self.dist[start..start + self.vertex_count]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<W>]> + '_ {
        (0..self.vertex_count).map(|u| self.row(u))
    }
}

impl<W: Weight> DistanceMatrix<W> {
    /// Sum of distances from the vertex to every vertex, or `None` if some
    /// vertex is unreachable from it.
    pub fn total_distance(&self, from: usize) -> Option<W> {
        self.row(from)
            .iter()
            .try_fold(W::zero(), |acc, d| d.clone().map(|d| acc + d))
    }

    /// Largest distance from the vertex (its eccentricity), or `None` if some
    /// vertex is unreachable from it.
    pub fn eccentricity(&self, from: usize) -> Option<W> {
        self.row(from).iter().try_fold(W::zero(), |acc, d| {
            let d = d.clone()?;
            Some(if d > acc { d } else { acc })
        })
    }

    /// Vertex with the smallest total distance to all other vertices. Ties go
    /// to the lower index.
    pub fn min_sum_center(&self) -> Option<usize> {
        self.center_by(Self::total_distance)
    }

    /// Vertex with the smallest eccentricity. Ties go to the lower index.
    pub fn min_max_center(&self) -> Option<usize> {
        self.center_by(Self::eccentricity)
    }

    fn center_by<F>(&self, score: F) -> Option<usize>
    where
        F: Fn(&Self, usize) -> Option<W>,
    {
        let mut best: Option<(usize, W)> = None;

        for v in 0..self.vertex_count {
            if let Some(s) = score(self, v) {
                if best.as_ref().map_or(true, |(_, b)| s < *b) {
                    best = Some((v, s));
                }
            }
        }

        best.map(|(v, _)| v)
    }
}

/// All-pairs shortest paths.
///
/// See [module](self) documentation for more details and example.
pub struct AllPairs;

pub struct AllPairsBuilder<'a, W, Ty> {
    graph: &'a AdjList<W, Ty>,
}

impl AllPairs {
    pub fn on<W, Ty: EdgeType>(graph: &AdjList<W, Ty>) -> AllPairsBuilder<'_, W, Ty> {
        AllPairsBuilder { graph }
    }
}

impl<'a, W: Weight, Ty: EdgeType> AllPairsBuilder<'a, W, Ty> {
    pub fn run(self) -> Result<DistanceMatrix<W>, Error> {
        johnson::johnson(self.graph)
    }
}
