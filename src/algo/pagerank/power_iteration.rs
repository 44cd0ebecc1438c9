use tracing::debug;

use crate::{core::marker::EdgeType, storage::AdjList};

/// Iterates `rank = rank * P` from the uniform distribution, where
/// `P[u][v] = (1 - d) * A[u][v] / outdeg(u) + d / n` and `A[u][v]` is the
/// number of arcs from `u` to `v`.
pub fn power_iteration<E, Ty: EdgeType>(
    graph: &AdjList<E, Ty>,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
) -> Vec<f64> {
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }

    let teleport = damping / n as f64;
    let mut rank = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for iteration in 1..=max_iterations {
        next.fill(teleport);

        for u in graph.vertices() {
            let share = (1.0 - damping) * rank[u] / graph.degree(u) as f64;
            for v in graph.neighbors(u) {
                next[v] += share;
            }
        }

        let delta = rank
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (new - old) * (new - old))
            .sum::<f64>()
            .sqrt();

        std::mem::swap(&mut rank, &mut next);

        if delta < epsilon {
            debug!(iteration, delta, "power iteration converged");
            return rank;
        }
    }

    debug!(max_iterations, "power iteration reached the iteration cap");
    rank
}
