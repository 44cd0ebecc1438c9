use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;

use crate::{core::marker::EdgeType, graph::Graph, storage::AdjList};

use super::{max_edge_count, pairs::PairSampler, Error};

pub const DEFAULT_WEIGHT_RANGE: RangeInclusive<i64> = 1..=10;

/// Generates a connected graph with `n` vertices and exactly `l` edges.
///
/// A random spanning tree is grown first and the remaining edges are drawn
/// uniformly from the pairs not used by the tree.
pub fn connected_gnl(n: usize, l: usize, rng: &mut fastrand::Rng) -> Result<Graph, Error> {
    let min = n.saturating_sub(1);
    let max = max_edge_count(n);

    if l < min || l > max {
        return Err(Error::InvalidParameter(format!(
            "a connected simple graph with {n} vertices has between {min} and {max} edges, got {l}"
        )));
    }

    let mut order = (0..n).collect::<Vec<_>>();
    rng.shuffle(&mut order);

    let mut edges = Vec::with_capacity(l);
    for i in 1..n {
        let parent = order[rng.usize(0..i)];
        let v = order[i];
        edges.push((parent.min(v), parent.max(v)));
    }

    // Extra edges are uniform over the pairs outside the tree.
    let tree = edges.iter().copied().collect::<FxHashSet<_>>();
    let mut sampler = PairSampler::new(n);
    while edges.len() < l {
        match sampler.draw(rng) {
            Some(pair) if !tree.contains(&pair) => edges.push(pair),
            Some(_) => {}
            None => break,
        }
    }
    edges.sort_unstable();

    Ok(Graph::from_edges(n, edges))
}

/// Attaches a uniformly random weight from the range to every edge.
///
/// Both directions of an undirected edge get the same weight.
///
/// # Examples
///
/// ```
/// use grafo::gen::{connected_gnl, with_random_weights, DEFAULT_WEIGHT_RANGE};
///
/// let mut rng = fastrand::Rng::with_seed(4);
/// let graph = connected_gnl(6, 8, &mut rng).unwrap();
/// let weighted = with_random_weights(&graph, DEFAULT_WEIGHT_RANGE, &mut rng).unwrap();
///
/// assert!(weighted.edges().all(|(_, _, w)| (1..=10).contains(w)));
/// ```
pub fn with_random_weights<E: Clone, Ty: EdgeType>(
    graph: &AdjList<E, Ty>,
    range: RangeInclusive<i64>,
    rng: &mut fastrand::Rng,
) -> Result<AdjList<i64, Ty>, Error> {
    if range.is_empty() {
        return Err(Error::InvalidParameter(format!(
            "weight range {range:?} is empty"
        )));
    }

    Ok(graph.map_edges(|_, _, _| rng.i64(range.clone())))
}
