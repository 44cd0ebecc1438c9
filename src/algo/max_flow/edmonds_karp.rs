use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::{
    common::VisitSet,
    core::{marker::Directed, weight::Weight},
    storage::AdjList,
};

pub fn edmonds_karp<W: Weight>(
    graph: &AdjList<W, Directed>,
    source: usize,
    sink: usize,
) -> (W, AdjList<W, Directed>) {
    let n = graph.vertex_count();
    let index = |u: usize, v: usize| u * n + v;

    // Dense residual capacities. Parallel arcs are merged.
    let mut capacity = vec![W::zero(); n * n];
    for (u, v, w) in graph.arcs() {
        let i = index(u, v);
        capacity[i] = capacity[i].clone() + w.clone();
    }
    let mut residual = capacity.clone();

    // Neighbors in the residual graph include reversed arcs.
    let mut neighbors = vec![Vec::new(); n];
    for (u, v, _) in graph.arcs() {
        if u != v && !neighbors[u].contains(&v) {
            neighbors[u].push(v);
            neighbors[v].push(u);
        }
    }

    let mut value = W::zero();
    let mut augmentations = 0usize;
    let mut pred = vec![usize::MAX; n];
    let mut visited = FixedBitSet::with_capacity(n);
    let mut queue = VecDeque::new();

    loop {
        // Shortest augmenting path by breadth-first search.
        visited.reset_visited();
        queue.clear();
        visited.visit(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }

            for &v in neighbors[u].iter() {
                if W::zero() < residual[index(u, v)] && visited.visit(v) {
                    pred[v] = u;
                    queue.push_back(v);
                }
            }
        }

        if !visited.is_visited(sink) {
            break;
        }

        let mut bottleneck = None::<W>;
        let mut v = sink;
        while v != source {
            let u = pred[v];
            let r = residual[index(u, v)].clone();
            bottleneck = Some(match bottleneck {
                Some(b) if b < r => b,
                _ => r,
            });
            v = u;
        }

        let Some(bottleneck) = bottleneck else {
            break;
        };

        let mut v = sink;
        while v != source {
            let u = pred[v];
            residual[index(u, v)] = residual[index(u, v)].clone() - bottleneck.clone();
            residual[index(v, u)] = residual[index(v, u)].clone() + bottleneck.clone();
            v = u;
        }

        value = value + bottleneck;
        augmentations += 1;
    }

    debug!(augmentations, source, sink, "maximum flow found");

    // Net flow per vertex pair, handed out to the parallel arcs in order.
    let mut remaining = (0..n * n)
        .map(|i| {
            if residual[i] < capacity[i] {
                capacity[i].clone() - residual[i].clone()
            } else {
                W::zero()
            }
        })
        .collect::<Vec<_>>();

    let mut flow = AdjList::with_vertices(n);
    for (u, v, cap) in graph.arcs() {
        let i = index(u, v);
        let assigned = if u == v {
            W::zero()
        } else if *cap < remaining[i] {
            cap.clone()
        } else {
            remaining[i].clone()
        };
        remaining[i] = remaining[i].clone() - assigned.clone();
        flow.add_edge(u, v, assigned);
    }

    (value, flow)
}
