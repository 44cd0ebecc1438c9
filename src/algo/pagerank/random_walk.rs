use crate::{core::marker::EdgeType, storage::AdjList};

pub fn random_walk<E, Ty: EdgeType>(
    graph: &AdjList<E, Ty>,
    damping: f64,
    steps: usize,
    rng: &mut fastrand::Rng,
) -> Vec<f64> {
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }

    let mut visits = vec![0usize; n];
    let mut current = rng.usize(0..n);

    for _ in 0..steps {
        current = if rng.f64() < damping {
            rng.usize(0..n)
        } else {
            let adjacent = graph.adjacent(current);
            adjacent[rng.usize(0..adjacent.len())].0
        };

        visits[current] += 1;
    }

    visits
        .into_iter()
        .map(|count| count as f64 / steps as f64)
        .collect()
}
