use fixedbitset::FixedBitSet;

use crate::{
    core::{marker::EdgeType, weight::Weight},
    storage::AdjList,
};

use super::{Error, ShortestPaths};

pub fn dijkstra<W, Ty>(
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
    let mut finished = FixedBitSet::with_capacity(vertex_count);

    dist[source] = Some(W::zero());

    for _ in 0..vertex_count {
        // Linear scan for the closest unfinished vertex. Ties go to the lower
        // index.
        let mut closest: Option<(usize, &W)> = None;
        for (v, d) in dist.iter().enumerate() {
            if let (false, Some(d)) = (finished.contains(v), d) {
                if closest.map_or(true, |(_, best)| d < best) {
                    closest = Some((v, d));
                }
            }
        }

        let Some((u, dist_u)) = closest else {
            break;
        };
        let dist_u = dist_u.clone();
        finished.insert(u);

        if goal == Some(u) {
            break;
        }

        for (v, edge_dist) in graph.adjacent(u) {
            if edge_dist.is_negative() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = dist_u.clone() + edge_dist.clone();

            // Relax if better.
            let better = match &dist[*v] {
                Some(curr) => next_dist < *curr,
                None => true,
            };

            if better {
                dist[*v] = Some(next_dist);
                pred[*v] = Some(u);
            }
        }
    }

    if let Some(goal) = goal {
        if dist[goal].is_none() {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}
