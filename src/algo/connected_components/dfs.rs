use crate::{
    core::marker::Undirected,
    storage::AdjList,
    visit::{Dfs, DfsEvent},
};

pub fn dfs<E>(graph: &AdjList<E, Undirected>) -> Vec<Vec<usize>> {
    let mut traversal = Dfs::new(graph.vertex_count());
    let mut components = Vec::new();

    for root in graph.vertices() {
        if traversal.is_visited(root) {
            continue;
        }

        let component = traversal
            .start(graph, root)
            .filter_map(|event| match event {
                DfsEvent::Discover(vertex) => Some(vertex),
                DfsEvent::Finish(_) => None,
            })
            .collect();

        components.push(component);
    }

    components
}
