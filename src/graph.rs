//! Aliases of the adjacency list for the common graph flavours.

use crate::{
    core::marker::{Directed, Undirected},
    storage::AdjList,
};

/// Unweighted undirected graph.
pub type Graph = AdjList<(), Undirected>;

/// Unweighted directed graph.
pub type Digraph = AdjList<(), Directed>;

/// Undirected graph with a weight on every edge, stored in both directions.
pub type WeightedGraph<W = i64> = AdjList<W, Undirected>;

/// Directed graph with a weight on every arc.
pub type WeightedDigraph<W = i64> = AdjList<W, Directed>;
