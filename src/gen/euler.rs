use tracing::debug;

use crate::{algo::ConnectedComponents, graph::Graph};

use super::{from_graphic_sequence, max_edge_count, Error, Rewire};

/// Maximum number of single-swap rewiring rounds spent on connecting the
/// graph.
const MAX_CONNECT_ROUNDS: usize = 10_000;

/// Generates a random graph with `n` vertices and `m` edges where every
/// vertex has even degree.
///
/// With `connected`, every vertex has a positive degree and the graph has a
/// single component, so it has an Eulerian cycle. Otherwise the edges may be
/// spread over several components.
///
/// # Examples
///
/// ```
/// use grafo::{algo::EulerCycle, gen::euler};
///
/// let mut rng = fastrand::Rng::with_seed(9);
/// let graph = euler(8, 12, true, &mut rng).unwrap();
///
/// assert_eq!(EulerCycle::on(&graph).run().unwrap().len(), 13);
/// ```
pub fn euler(n: usize, m: usize, connected: bool, rng: &mut fastrand::Rng) -> Result<Graph, Error> {
    let max = max_edge_count(n);
    if m > max {
        return Err(Error::InvalidParameter(format!(
            "{m} edges do not fit into a simple graph with {n} vertices (at most {max})"
        )));
    }

    // Half of the degree of every vertex.
    let mut halves = vec![0usize; n];
    let mut to_distribute = m;

    if connected {
        if m < n {
            return Err(Error::InvalidParameter(format!(
                "a connected even graph with {n} vertices needs at least {n} edges, got {m}"
            )));
        }

        halves.fill(1);
        to_distribute -= n;
    } else if m > 0 {
        halves[rng.usize(0..n)] = 1;
        to_distribute -= 1;
    }

    let mut total = m - to_distribute;
    for _ in 0..to_distribute {
        // The degree must stay below n and no vertex may need more edges than
        // all the others together can provide.
        let candidates = (0..n)
            .filter(|&v| 2 * halves[v] + 1 <= total && 2 * halves[v] + 2 < n)
            .collect::<Vec<_>>();

        let v = *rng.choice(candidates.iter()).ok_or(Error::Infeasible)?;
        halves[v] += 1;
        total += 1;
    }

    let degrees = halves.iter().map(|h| 2 * h).collect::<Vec<_>>();
    let mut graph = from_graphic_sequence(&degrees).ok_or(Error::Infeasible)?;

    if m < max {
        graph = Rewire::new(rng.usize(0..4)).run(&graph, rng).graph;
    }

    if connected {
        let mut rounds = 0;
        while ConnectedComponents::on(&graph).run().len() != 1 {
            if rounds == MAX_CONNECT_ROUNDS {
                debug!(n, m, rounds, "could not connect the even graph");
                return Err(Error::Infeasible);
            }

            graph = Rewire::new(1).run(&graph, rng).graph;
            rounds += 1;
        }

        debug!(n, m, rounds, "connected the even graph");
    }

    Ok(graph)
}
