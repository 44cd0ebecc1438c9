use crate::{core::marker::Directed, storage::AdjList};

/// Directed graph with every arc reversed.
#[derive(Debug)]
pub struct Transpose<'a, E> {
    graph: &'a AdjList<E, Directed>,
}

impl<'a, E: Clone> Transpose<'a, E> {
    pub fn new(graph: &'a AdjList<E, Directed>) -> Self {
        Self { graph }
    }

    /// Builds the reversed graph. Arcs keep their payloads.
    pub fn apply(self) -> AdjList<E, Directed> {
        let mut transposed = AdjList::with_vertices(self.graph.vertex_count());

        for (from, to, edge) in self.graph.arcs() {
            transposed.add_edge(to, from, edge.clone());
        }

        transposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_arcs() {
        let graph = AdjList::<i32, Directed>::from_edges(3, [(0, 1, 4), (1, 2, 5), (0, 2, 6)]);
        let transposed = Transpose::new(&graph).apply();

        assert_eq!(transposed.edge_count(), 3);
        assert_eq!(transposed.edge(1, 0), Some(&4));
        assert_eq!(transposed.edge(2, 1), Some(&5));
        assert!(!transposed.contains_edge(0, 1));
        assert_eq!(Transpose::new(&transposed).apply().edge(0, 2), Some(&6));
    }
}
