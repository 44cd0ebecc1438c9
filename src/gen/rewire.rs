use rustc_hash::FxHashSet;
use tracing::warn;

use crate::graph::Graph;

use super::max_edge_count;

pub const DEFAULT_MAX_RETRIES: usize = 99;

/// Recoverable outcome of a rewiring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewireWarning {
    /// The graph is too dense for any swap, it was returned unchanged.
    NoFreeSpace,
    /// No valid swap was found within the retry limit in this iteration.
    RetryExhausted { iteration: usize },
}

/// Rewired graph together with the warnings collected on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewired {
    pub graph: Graph,
    pub warnings: Vec<RewireWarning>,
}

/// Randomizes a simple undirected graph by [double edge swaps] while keeping
/// the degree of every vertex.
///
/// Each iteration picks two disjoint edges `a - b` and `c - d` and replaces
/// them by `a - d` and `c - b` (or `a - c` and `d - b`), provided the new
/// edges are not in the graph yet.
///
/// [double edge swaps]: https://en.wikipedia.org/wiki/Degree-preserving_randomization
#[derive(Debug, Clone, Copy)]
pub struct Rewire {
    iterations: usize,
    max_retries: usize,
}

impl Rewire {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Number of attempts to find a valid swap before the iteration is
    /// abandoned.
    pub fn max_retries(self, max_retries: usize) -> Self {
        Self {
            max_retries,
            ..self
        }
    }

    pub fn run(&self, graph: &Graph, rng: &mut fastrand::Rng) -> Rewired {
        let n = graph.vertex_count();
        let mut edges = graph.edges().map(|(u, v, _)| (u, v)).collect::<Vec<_>>();
        let mut warnings = Vec::new();

        if max_edge_count(n) < edges.len() + 2 {
            warn!(
                vertex_count = n,
                edge_count = edges.len(),
                "graph has no free space for rewiring"
            );
            warnings.push(RewireWarning::NoFreeSpace);

            return Rewired {
                graph: graph.clone(),
                warnings,
            };
        }

        let mut present = edges.iter().map(|&(u, v)| key(u, v)).collect::<FxHashSet<_>>();

        for iteration in 0..self.iterations {
            let swapped = (0..self.max_retries).any(|_| try_swap(&mut edges, &mut present, rng));

            if !swapped {
                warn!(iteration, max_retries = self.max_retries, "rewiring iteration abandoned");
                warnings.push(RewireWarning::RetryExhausted { iteration });
            }
        }

        edges.sort_unstable();

        Rewired {
            graph: Graph::from_edges(n, edges),
            warnings,
        }
    }
}

fn key(u: usize, v: usize) -> (usize, usize) {
    (u.min(v), u.max(v))
}

fn try_swap(
    edges: &mut [(usize, usize)],
    present: &mut FxHashSet<(usize, usize)>,
    rng: &mut fastrand::Rng,
) -> bool {
    if edges.len() < 2 {
        return false;
    }

    let i = rng.usize(0..edges.len());
    let j = rng.usize(0..edges.len());

    let (a, b) = edges[i];
    let (mut c, mut d) = edges[j];

    if [a, b].iter().any(|x| *x == c || *x == d) {
        return false;
    }

    if rng.bool() {
        std::mem::swap(&mut c, &mut d);
    }

    if present.contains(&key(a, d)) || present.contains(&key(c, b)) {
        return false;
    }

    present.remove(&key(a, b));
    present.remove(&key(c, d));
    present.insert(key(a, d));
    present.insert(key(c, b));

    edges[i] = key(a, d);
    edges[j] = key(c, b);

    true
}
