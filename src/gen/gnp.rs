use crate::{core::marker::EdgeType, storage::AdjList};

use super::Error;

/// Generates a [G(n, p)] graph where each pair of distinct vertices is
/// connected independently with probability `p`.
///
/// Directed graphs consider both ordered pairs separately.
///
/// [G(n, p)]: https://en.wikipedia.org/wiki/Erd%C5%91s%E2%80%93R%C3%A9nyi_model
pub fn gnp<Ty: EdgeType>(n: usize, p: f64, rng: &mut fastrand::Rng) -> Result<AdjList<(), Ty>, Error> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "probability must be in [0, 1], got {p}"
        )));
    }

    let mut graph = AdjList::with_vertices(n);

    for u in 0..n {
        let start = if Ty::is_directed() { 0 } else { u + 1 };
        for v in start..n {
            if u != v && rng.f64() < p {
                graph.add_edge(u, v, ());
            }
        }
    }

    Ok(graph)
}
