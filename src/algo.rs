pub mod all_pairs;
pub mod connected_components;
pub mod euler;
pub mod hamiltonian;
pub mod max_flow;
pub mod pagerank;
pub mod shortest_paths;
pub mod spanning_tree;

pub use all_pairs::{AllPairs, DistanceMatrix};
pub use connected_components::{
    is_connected, is_strongly_connected, ConnectedComponents, StronglyConnectedComponents,
};
pub use euler::EulerCycle;
pub use hamiltonian::HamiltonianCycle;
pub use max_flow::MaxFlow;
pub use pagerank::{PageRank, Ranking};
pub use shortest_paths::ShortestPaths;
pub use spanning_tree::SpanningTree;
