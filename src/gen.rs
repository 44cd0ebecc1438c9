//! Random graph generators and degree-preserving rewiring.
//!
//! Every generator draws from a caller-provided [`fastrand::Rng`], so the
//! output is reproducible with [`Rng::with_seed`](fastrand::Rng::with_seed).
//!
//! # Examples
//!
//! ```
//! use grafo::gen::{gnl, Rewire};
//!
//! let mut rng = fastrand::Rng::with_seed(42);
//! let graph = gnl(10, 15, &mut rng).unwrap();
//! let rewired = Rewire::new(20).run(&graph, &mut rng);
//!
//! assert_eq!(rewired.graph.edge_count(), 15);
//! assert_eq!(rewired.graph.vertex_degrees().iter().sum::<usize>(), 30);
//! ```

use thiserror::Error;

use crate::core::{facts::complete_graph_edge_count, marker::Undirected};

mod euler;
mod gnl;
mod gnp;
mod pairs;
mod regular;
mod rewire;
mod sequence;
mod weighted;

pub use euler::euler;
pub use gnl::gnl;
pub use gnp::gnp;
pub use regular::k_regular;
pub use rewire::{Rewire, RewireWarning, Rewired, DEFAULT_MAX_RETRIES};
pub use sequence::{erdos_gallai, from_graphic_sequence, is_graphic};
pub use weighted::{connected_gnl, with_random_weights, DEFAULT_WEIGHT_RANGE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("no graph with the requested properties could be generated")]
    Infeasible,
}

fn max_edge_count(vertex_count: usize) -> usize {
    complete_graph_edge_count::<Undirected>(vertex_count)
}
