use crate::{
    algo::shortest_paths::{bellman_ford, dijkstra},
    core::{
        marker::{Directed, EdgeType},
        weight::Weight,
    },
    storage::AdjList,
};

use super::{DistanceMatrix, Error};

pub fn johnson<W, Ty>(graph: &AdjList<W, Ty>) -> Result<DistanceMatrix<W>, Error>
where
    W: Weight,
    Ty: EdgeType,
{
    let vertex_count = graph.vertex_count();

    // Virtual source connected to every vertex with zero weight.
    let mut augmented = AdjList::<W, Directed>::with_vertices(vertex_count + 1);
    for (u, v, w) in graph.arcs() {
        augmented.add_edge(u, v, w.clone());
    }
    for v in 0..vertex_count {
        augmented.add_edge(vertex_count, v, W::zero());
    }

    // A negative cycle is the only way Bellman-Ford from the virtual source
    // can fail.
    let potential = bellman_ford(&augmented, vertex_count, None)
        .map_err(|_| Error::NegativeCycle)?
        .into_distances();
    let h = |v: usize| potential[v].clone().unwrap_or_else(W::zero);

    let mut reweighted = AdjList::<W, Directed>::with_vertices(vertex_count);
    for (u, v, w) in graph.arcs() {
        // Nonnegative by the triangle inequality of the potentials, up to
        // rounding of float weights.
        let w = w.clone() + h(u) - h(v);
        let w = if w.is_negative() { W::zero() } else { w };
        reweighted.add_edge(u, v, w);
    }

    let mut rows = Vec::with_capacity(vertex_count);
    for u in 0..vertex_count {
        let paths = dijkstra(&reweighted, u, None).map_err(|_| Error::NegativeCycle)?;

        let row = paths
            .into_distances()
            .into_iter()
            .enumerate()
            .map(|(v, d)| d.map(|d| d - h(u) + h(v)))
            .collect();
        rows.push(row);
    }

    Ok(DistanceMatrix::from_rows(rows))
}
