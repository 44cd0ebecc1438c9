use crate::{
    adapt::Transpose,
    core::marker::Directed,
    storage::AdjList,
    visit::{postorder_all, Dfs, DfsEvent},
};

pub fn kosaraju<E: Clone>(graph: &AdjList<E, Directed>) -> Vec<Vec<usize>> {
    let finished = postorder_all(graph);

    let transposed = Transpose::new(graph).apply();
    let mut traversal = Dfs::new(transposed.vertex_count());

    let mut components = Vec::new();

    for &vertex in finished.iter().rev() {
        if traversal.is_visited(vertex) {
            continue;
        }

        let component = traversal
            .start(&transposed, vertex)
            .filter_map(|event| match event {
                DfsEvent::Discover(vertex) => Some(vertex),
                DfsEvent::Finish(_) => None,
            })
            .collect();

        components.push(component);
    }

    components
}
