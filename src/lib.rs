//! In-memory graphs with classic algorithms, random generators and
//! degree-preserving rewiring.
//!
//! Graphs are adjacency lists over dense `0..n` vertex indices, generic over
//! the edge payload and the directedness marker. See [`graph`] for the common
//! aliases, [`storage`] for the matrix representations, [`algo`] for the
//! algorithms and [`gen`] for the generators.

pub mod adapt;
pub mod algo;
mod common;
pub mod core;
pub mod gen;
pub mod graph;
pub mod infra;
pub mod storage;
pub mod tsp;
pub mod visit;

pub mod prelude {
    pub use crate::{
        core::marker::{Directed, EdgeType, Undirected},
        graph::{Digraph, Graph, WeightedDigraph, WeightedGraph},
        storage::AdjList,
    };
}
