//! Find a [minimum spanning tree] of an undirected weighted graph.
//!
//! If the graph is not connected, the result is a minimum spanning forest
//! with one tree per component.
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::SpanningTree, graph::WeightedGraph};
//!
//! let graph = WeightedGraph::<i64>::from_edges(4, [(0, 1, 4), (1, 2, 1), (0, 2, 2), (2, 3, 7)]);
//! let tree = SpanningTree::on(&graph).run();
//!
//! assert_eq!(tree.edge_count(), 3);
//! assert_eq!(tree.total_weight(), 10);
//! ```

use std::ops::Deref;

use crate::{
    core::{marker::Undirected, weight::Weight},
    storage::AdjList,
};

mod kruskal;

/// Spanning tree (or forest) as a graph over the same vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<W> {
    tree: AdjList<W, Undirected>,
}

impl<W: Weight> SpanningTree<W> {
    pub fn on(graph: &AdjList<W, Undirected>) -> SpanningTreeBuilder<'_, W> {
        SpanningTreeBuilder { graph }
    }

    pub fn total_weight(&self) -> W {
        self.tree
            .edges()
            .fold(W::zero(), |acc, (_, _, w)| acc + w.clone())
    }

    pub fn into_inner(self) -> AdjList<W, Undirected> {
        self.tree
    }
}

impl<W> Deref for SpanningTree<W> {
    type Target = AdjList<W, Undirected>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

pub struct SpanningTreeBuilder<'a, W> {
    graph: &'a AdjList<W, Undirected>,
}

impl<'a, W: Weight> SpanningTreeBuilder<'a, W> {
    /// Runs [Kruskal's algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm).
    pub fn run(self) -> SpanningTree<W> {
        SpanningTree {
            tree: kruskal::kruskal(self.graph),
        }
    }
}
