use crate::graph::Graph;

use super::{max_edge_count, pairs::PairSampler, Error};

/// Generates a [G(n, l)] graph with exactly `l` edges chosen uniformly among
/// all pairs of distinct vertices.
///
/// Neighbor lists of the result are sorted.
///
/// [G(n, l)]: https://en.wikipedia.org/wiki/Erd%C5%91s%E2%80%93R%C3%A9nyi_model
pub fn gnl(n: usize, l: usize, rng: &mut fastrand::Rng) -> Result<Graph, Error> {
    let max = max_edge_count(n);
    if l > max {
        return Err(Error::InvalidParameter(format!(
            "{l} edges do not fit into a simple graph with {n} vertices (at most {max})"
        )));
    }

    let mut sampler = PairSampler::new(n);
    let mut chosen = (0..l).filter_map(|_| sampler.draw(rng)).collect::<Vec<_>>();
    chosen.sort_unstable();

    Ok(Graph::from_edges(n, chosen))
}
