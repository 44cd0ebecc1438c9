//! Find [single source shortest paths] and their distances in a weighted
//! graph.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! Dijkstra's algorithm is used whenever negative weights cannot appear or
//! would make the problem ill-defined anyway (any negative undirected edge
//! forms a negative cycle). Directed graphs with signed weights default to
//! Bellman-Ford.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::ShortestPaths, graph::WeightedGraph};
//!
//! let graph = WeightedGraph::<u32>::from_edges(
//!     5,
//!     [(0, 1, 328), (0, 3, 297), (0, 2, 293), (1, 2, 79), (3, 4, 170), (2, 4, 402)],
//! );
//!
//! let shortest_paths = ShortestPaths::on(&graph).run(1).unwrap();
//!
//! assert_eq!(shortest_paths.dist(4), Some(&481));
//! assert_eq!(shortest_paths.path(4), Some(vec![1, 2, 4]));
//! ```

use std::ops::Index;

use thiserror::Error;

use crate::core::error::VertexOutOfBounds;

mod bellman_ford;
mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

pub(crate) use bellman_ford::bellman_ford;
pub(crate) use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W> ShortestPaths<W> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the given
    /// vertex.
    pub fn dist(&self, to: usize) -> Option<&W> {
        self.dist.get(to)?.as_ref()
    }

    /// Distances of all vertices in index order.
    pub fn distances(&self) -> &[Option<W>] {
        &self.dist
    }

    /// Predecessor of the vertex on its shortest path.
    pub fn pred(&self, vertex: usize) -> Option<usize> {
        self.pred.get(vertex).copied().flatten()
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    pub fn reconstruct(&self, to: usize) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Vertices on the path from the source to the given vertex, both
    /// included, or `None` if the vertex was not reached.
    pub fn path(&self, to: usize) -> Option<Vec<usize>> {
        self.dist(to)?;

        let mut path = vec![to];
        path.extend(self.reconstruct(to));
        path.reverse();
        Some(path)
    }

    pub(crate) fn into_distances(self) -> Vec<Option<W>> {
        self.dist
    }
}

impl<W> Index<usize> for ShortestPaths<W> {
    type Output = W;

    fn index(&self, index: usize) -> &Self::Output {
        match self.dist(index) {
            Some(dist) => dist,
            None => panic!("vertex {index} was not reached"),
        }
    }
}

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Dijkstra's
    /// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
    ///
    /// This variant selects the closest unfinished vertex by a linear scan,
    /// giving _O(V²)_ time regardless of the edge count, which suits dense
    /// graphs.
    Dijkstra,

    /// [Bellman–Ford
    /// algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm).
    ///
    /// The Bellman-Ford algorithm can handle graphs with negative edge weights
    /// and can detect negative weight cycles in a graph. However, it is
    /// generally slower than Dijkstra's algorithm.
    BellmanFord,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A negative cycle encountered.
    #[error("negative cycle encountered")]
    NegativeCycle,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,

    #[error(transparent)]
    OutOfBounds(#[from] VertexOutOfBounds),
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: usize,
    pred: &'a [Option<usize>],
}

impl Iterator for PathReconstruction<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(self.curr).copied().flatten()?;
        Some(self.curr)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use petgraph::algo::bellman_ford as petgraph_bellman_ford;
    use proptest::prelude::*;

    use crate::{
        core::marker::{Directed, Undirected},
        infra::proptest::{graph_directed, graph_undirected},
        storage::AdjList,
    };

    use super::*;

    fn create_basic_graph() -> AdjList<i32, Undirected> {
        AdjList::from_edges(
            6,
            [
                (0, 1, 3),
                (0, 2, 2),
                (1, 2, 2),
                (1, 3, 2),
                (1, 4, 7),
                (2, 3, 5),
                (3, 4, 3),
                (4, 5, 10),
            ],
        )
    }

    fn create_graph_with_isolated_vertex() -> AdjList<i32, Undirected> {
        AdjList::from_edges(4, [(0, 1, 3), (0, 2, 2), (1, 2, 2)])
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph)
            .using(Algo::Dijkstra)
            .run(0)
            .unwrap();

        assert_eq!(shortest_paths.dist(4), Some(&8));
        assert_eq!(
            shortest_paths.reconstruct(4).collect::<Vec<_>>(),
            vec![3, 1, 0]
        );
        assert_eq!(shortest_paths.path(4), Some(vec![0, 1, 3, 4]));

        assert_eq!(shortest_paths.dist(2), Some(&2));
        assert_eq!(shortest_paths[5], 18);
    }

    #[test]
    fn dijkstra_early_termination() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph)
            .goal(4)
            .using(Algo::Dijkstra)
            .run(0)
            .unwrap();

        assert!(shortest_paths.dist(5).is_none());
    }

    #[test]
    fn dijkstra_negative_edge() {
        let mut graph = create_basic_graph();
        graph.remove_edge(1, 2);
        graph.add_edge(1, 2, -1);

        let shortest_paths = ShortestPaths::on(&graph)
            .goal(4)
            .using(Algo::Dijkstra)
            .run(0);

        assert_matches!(shortest_paths, Err(Error::NegativeWeight));
    }

    #[test]
    fn dijkstra_goal_not_reached() {
        let graph = create_graph_with_isolated_vertex();

        let shortest_paths = ShortestPaths::on(&graph)
            .goal(3)
            .using(Algo::Dijkstra)
            .run(0);

        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn unreachable_vertex_has_no_distance() {
        let graph = create_graph_with_isolated_vertex();
        let shortest_paths = ShortestPaths::on(&graph).dijkstra().run(0).unwrap();

        assert_eq!(shortest_paths.dist(3), None);
        assert_eq!(shortest_paths.path(3), None);
        assert_eq!(shortest_paths.path(0), Some(vec![0]));
    }

    #[test]
    fn source_out_of_bounds() {
        let graph = create_basic_graph();
        assert_matches!(
            ShortestPaths::on(&graph).run(6),
            Err(Error::OutOfBounds(VertexOutOfBounds { vertex: 6, .. }))
        );
        assert_matches!(
            ShortestPaths::on(&graph).goal(9).bellman_ford().run(0),
            Err(Error::OutOfBounds(VertexOutOfBounds { vertex: 9, .. }))
        );
    }

    #[test]
    fn bellman_ford_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph)
            .using(Algo::BellmanFord)
            .run(0)
            .unwrap();

        assert_eq!(shortest_paths.dist(4), Some(&8));
        assert_eq!(
            shortest_paths.reconstruct(4).collect::<Vec<_>>(),
            vec![3, 1, 0]
        );

        assert_eq!(shortest_paths.dist(2), Some(&2));
    }

    #[test]
    fn bellman_ford_negative_edge() {
        let graph = AdjList::<i32, Directed>::from_edges(
            6,
            [
                (0, 1, 3),
                (0, 2, 2),
                (1, 2, -1),
                (1, 3, 2),
                (1, 4, 7),
                (2, 3, 5),
                (3, 4, 3),
                (4, 5, 10),
            ],
        );

        let shortest_paths = ShortestPaths::on(&graph)
            .using(Algo::BellmanFord)
            .run(0)
            .unwrap();

        assert_eq!(shortest_paths.dist(4), Some(&8));
        assert_eq!(
            shortest_paths.reconstruct(4).collect::<Vec<_>>(),
            vec![3, 1, 0]
        );

        assert_eq!(shortest_paths.dist(2), Some(&2));
    }

    #[test]
    fn bellman_ford_negative_cycle() {
        let graph = AdjList::<i32, Directed>::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, -3)]);

        let shortest_paths = ShortestPaths::on(&graph).using(Algo::BellmanFord).run(0);

        assert_matches!(shortest_paths, Err(Error::NegativeCycle));
    }

    #[test]
    fn bellman_ford_goal_not_reached() {
        let graph = create_graph_with_isolated_vertex();

        let shortest_paths = ShortestPaths::on(&graph)
            .goal(3)
            .using(Algo::BellmanFord)
            .run(0);

        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn bellman_ford_undirected_support() {
        let graph = AdjList::<i32, Undirected>::from_edges(2, [(0, 1, 1)]);

        let shortest_paths = ShortestPaths::on(&graph)
            .using(Algo::BellmanFord)
            .run(1)
            .unwrap();

        assert_eq!(shortest_paths.dist(0), Some(&1));
    }

    #[test]
    fn default_directed_signed_uses_bellman_ford() {
        let graph = AdjList::<i32, Directed>::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, -2)]);
        let shortest_paths = ShortestPaths::on(&graph).run(0).unwrap();

        assert_eq!(shortest_paths.dist(1), Some(&-1));
    }

    #[test]
    fn prefer_dijkstra_for_undirected() {
        let graph = AdjList::<i32, Undirected>::from_edges(2, [(0, 1, -1)]);

        // Setting the goal vertex to be the same as the starting vertex makes
        // Dijkstra's algorithm finish immediately with success where the
        // Bellman-Ford would report "negative cycle" error because it doesn't
        // consider the goal vertex.
        let shortest_paths = ShortestPaths::on(&graph).goal(1).run(1).unwrap();

        assert_eq!(shortest_paths.dist(1), Some(&0));
    }

    #[test]
    fn float_weights() {
        let graph = AdjList::<f64, Directed>::from_edges(3, [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)]);
        let shortest_paths = ShortestPaths::on(&graph).dijkstra().run(0).unwrap();

        assert_eq!(shortest_paths.dist(2), Some(&0.75));
    }

    #[test]
    fn bellman_ford_agrees_with_petgraph() {
        let edges = [
            (0, 1, 2.0),
            (0, 3, 4.0),
            (1, 2, 1.0),
            (1, 5, 7.0),
            (2, 4, 5.0),
            (4, 5, 1.0),
            (3, 4, -1.0),
        ];

        let graph = AdjList::<f64, Directed>::from_edges(6, edges);
        let paths = ShortestPaths::on(&graph).bellman_ford().run(0).unwrap();

        let oracle = petgraph::Graph::<(), f64>::from_edges(
            edges.iter().map(|&(u, v, w)| (u as u32, v as u32, w)),
        );
        let expected = petgraph_bellman_ford(&oracle, 0.into()).unwrap();

        for v in 0..6 {
            assert_eq!(paths.dist(v), Some(&expected.distances[v]));
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_bellman_ford_agree_any_directed(graph in graph_directed(any::<u16>().prop_map(|e| e as u32)).max_size(64), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let source = source % n;
            let paths_d = ShortestPaths::on(&graph).using(Algo::Dijkstra).run(source).unwrap();
            let paths_bf = ShortestPaths::on(&graph).using(Algo::BellmanFord).run(source).unwrap();

            for v in graph.vertices() {
                prop_assert_eq!(paths_d.dist(v), paths_bf.dist(v));
                // Check only the distances. Paths as found by the two
                // algorithms can be different in general.
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_bellman_ford_agree_any_undirected(graph in graph_undirected(any::<u16>().prop_map(|e| e as u32)).max_size(64), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let source = source % n;
            let paths_d = ShortestPaths::on(&graph).using(Algo::Dijkstra).run(source).unwrap();
            let paths_bf = ShortestPaths::on(&graph).using(Algo::BellmanFord).run(source).unwrap();

            for v in graph.vertices() {
                prop_assert_eq!(paths_d.dist(v), paths_bf.dist(v));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bellman_ford_any_directed_negative_weight_no_panic(graph in graph_directed(any::<i16>().prop_map(|e| e as i32)).max_size(64), source: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 0);

            let _ = ShortestPaths::on(&graph).using(Algo::BellmanFord).run(source % n);
        }
    }
}
