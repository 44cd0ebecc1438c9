use rustc_hash::FxHashSet;
use tracing::debug;

use crate::graph::Graph;

use super::{from_graphic_sequence, Error, Rewire};

const MAX_PAIRING_ATTEMPTS: usize = 100;

/// Generates a random [k-regular graph] on `n` vertices.
///
/// Vertex stubs are shuffled and paired; a pairing that produces a loop or a
/// parallel edge is discarded and the stubs are reshuffled. Dense cases where
/// pairing keeps failing fall back to the Havel-Hakimi construction on a
/// shuffled vertex order, randomized by rewiring.
///
/// [k-regular graph]: https://en.wikipedia.org/wiki/Regular_graph
pub fn k_regular(n: usize, k: usize, rng: &mut fastrand::Rng) -> Result<Graph, Error> {
    if k >= n {
        return Err(Error::InvalidParameter(format!(
            "degree {k} must be smaller than the vertex count {n}"
        )));
    }

    if k % 2 == 1 && n % 2 == 1 {
        return Err(Error::InvalidParameter(format!(
            "degree {k} and vertex count {n} are both odd"
        )));
    }

    for _ in 0..MAX_PAIRING_ATTEMPTS {
        if let Some(mut edges) = pair_stubs(n, k, rng) {
            edges.sort_unstable();
            return Ok(Graph::from_edges(n, edges));
        }
    }

    debug!(n, k, "stub pairing failed, falling back to Havel-Hakimi");

    let mut labels = (0..n).collect::<Vec<_>>();
    rng.shuffle(&mut labels);

    let graph = from_graphic_sequence(&vec![k; n]).ok_or(Error::Infeasible)?;
    let mut edges = graph
        .edges()
        .map(|(u, v, _)| {
            let (u, v) = (labels[u], labels[v]);
            (u.min(v), u.max(v))
        })
        .collect::<Vec<_>>();
    edges.sort_unstable();

    let graph = Graph::from_edges(n, edges);
    Ok(Rewire::new(n * k).run(&graph, rng).graph)
}

fn pair_stubs(n: usize, k: usize, rng: &mut fastrand::Rng) -> Option<Vec<(usize, usize)>> {
    let mut stubs = (0..n)
        .flat_map(|v| std::iter::repeat(v).take(k))
        .collect::<Vec<_>>();
    rng.shuffle(&mut stubs);

    let mut present = FxHashSet::default();
    let mut edges = Vec::with_capacity(stubs.len() / 2);

    for pair in stubs.chunks_exact(2) {
        let (u, v) = (pair[0].min(pair[1]), pair[0].max(pair[1]));

        if u == v || !present.insert((u, v)) {
            return None;
        }

        edges.push((u, v));
    }

    Some(edges)
}
