use crate::{
    common::DisjointSet,
    core::{marker::Undirected, weight::Weight},
    storage::AdjList,
};

pub fn kruskal<W: Weight>(graph: &AdjList<W, Undirected>) -> AdjList<W, Undirected> {
    let vertex_count = graph.vertex_count();
    let mut tree = AdjList::with_vertices(vertex_count);

    let mut edges = graph.edges().collect::<Vec<_>>();
    // Stable, so equal weights keep the discovery order.
    edges.sort_by_key(|(_, _, w)| W::Ord::from((*w).clone()));

    let mut components = DisjointSet::new(vertex_count);
    let mut remaining = vertex_count.saturating_sub(1);

    for (u, v, w) in edges {
        if remaining == 0 {
            break;
        }

        if components.union(u, v) {
            tree.add_edge(u, v, w.clone());
            remaining -= 1;
        }
    }

    tree
}
