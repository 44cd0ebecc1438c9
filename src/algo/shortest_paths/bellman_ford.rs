use crate::{
    core::{marker::EdgeType, weight::Weight},
    storage::AdjList,
};

use super::{Error, ShortestPaths};

fn relaxed<W: Weight>(dist: &[Option<W>], u: usize, v: usize, edge_dist: &W) -> Option<W> {
    let next_dist = dist[u].clone()? + edge_dist.clone();

    match &dist[v] {
        Some(curr) if !(next_dist < *curr) => None,
        _ => Some(next_dist),
    }
}

pub fn bellman_ford<W, Ty>(
    graph: &AdjList<W, Ty>,
    source: usize,
    goal: Option<usize>,
) -> Result<ShortestPaths<W>, Error>
where
    W: Weight,
    Ty: EdgeType,
{
    let vertex_count = graph.vertex_count();

    let mut dist: Vec<Option<W>> = vec![None; vertex_count];
    let mut pred = vec![None; vertex_count];

    dist[source] = Some(W::zero());

    let mut terminated_early = false;

    // Try to relax edges |V| - 1 times. Undirected edges are relaxed in both
    // directions because `arcs` reports both of them.
    for _ in 1..vertex_count {
        let mut any_relaxed = false;

        for (u, v, edge_dist) in graph.arcs() {
            if let Some(next_dist) = relaxed(&dist, u, v, edge_dist) {
                dist[v] = Some(next_dist);
                pred[v] = Some(u);
                any_relaxed = true;
            }
        }

        // If no distance was improved, then subsequent iterations would not
        // improve as well. So we can terminate early.
        if !any_relaxed {
            terminated_early = true;
            break;
        }
    }

    // Check for negative cycles. If the main loop was terminated early, then
    // the absence of cycle is guaranteed.
    if !terminated_early
        && graph
            .arcs()
            .any(|(u, v, edge_dist)| relaxed(&dist, u, v, edge_dist).is_some())
    {
        return Err(Error::NegativeCycle);
    }

    if let Some(goal) = goal {
        if dist[goal].is_none() {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}
