//! Depth-first traversal with an explicit stack.
//!
//! Every stack frame is a vertex together with the index of the next neighbor
//! to examine, so deep graphs do not overflow the call stack.

use fixedbitset::FixedBitSet;

use crate::{common::VisitSet, core::marker::EdgeType, storage::AdjList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// The vertex was reached for the first time (preorder).
    Discover(usize),
    /// All neighbors of the vertex were explored (postorder).
    Finish(usize),
}

/// Reusable state of a depth-first traversal.
///
/// Vertices stay visited across multiple [`start`](Dfs::start) calls, which
/// is how whole-graph traversals are composed from rooted ones.
#[derive(Debug, Clone)]
pub struct Dfs {
    stack: Vec<(usize, usize)>,
    visited: FixedBitSet,
}

impl Dfs {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(vertex_count),
        }
    }

    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.is_visited(vertex)
    }

    /// Starts the traversal from the root. Yields nothing if the root was
    /// already visited.
    pub fn start<'a, E, Ty: EdgeType>(
        &'a mut self,
        graph: &'a AdjList<E, Ty>,
        root: usize,
    ) -> DfsRooted<'a, E, Ty> {
        self.stack.clear();

        let pending = if self.visited.visit(root) {
            self.stack.push((root, 0));
            Some(root)
        } else {
            None
        };

        DfsRooted {
            dfs: self,
            graph,
            pending,
        }
    }
}

pub struct DfsRooted<'a, E, Ty> {
    dfs: &'a mut Dfs,
    graph: &'a AdjList<E, Ty>,
    pending: Option<usize>,
}

impl<E, Ty: EdgeType> Iterator for DfsRooted<'_, E, Ty> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending.take() {
            return Some(DfsEvent::Discover(root));
        }

        loop {
            let (vertex, next) = self.dfs.stack.last_mut()?;
            let vertex = *vertex;

            match self.graph.adjacent(vertex).get(*next) {
                Some(&(neighbor, _)) => {
                    *next += 1;

                    if self.dfs.visited.visit(neighbor) {
                        self.dfs.stack.push((neighbor, 0));
                        return Some(DfsEvent::Discover(neighbor));
                    }
                }
                None => {
                    self.dfs.stack.pop();
                    return Some(DfsEvent::Finish(vertex));
                }
            }
        }
    }
}

/// Vertices reachable from the root in preorder.
pub fn preorder<E, Ty: EdgeType>(graph: &AdjList<E, Ty>, root: usize) -> Vec<usize> {
    Dfs::new(graph.vertex_count())
        .start(graph, root)
        .filter_map(|event| match event {
            DfsEvent::Discover(vertex) => Some(vertex),
            DfsEvent::Finish(_) => None,
        })
        .collect()
}

/// All vertices in the order of finishing, restarting from every unvisited
/// vertex in ascending order.
pub fn postorder_all<E, Ty: EdgeType>(graph: &AdjList<E, Ty>) -> Vec<usize> {
    let mut dfs = Dfs::new(graph.vertex_count());
    let mut order = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        order.extend(dfs.start(graph, root).filter_map(|event| match event {
            DfsEvent::Finish(vertex) => Some(vertex),
            DfsEvent::Discover(_) => None,
        }));
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::marker::{Directed, Undirected},
        infra::testing::create_path,
    };

    #[test]
    fn events_in_order() {
        let graph = AdjList::<(), Directed>::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
        let events = Dfs::new(4).start(&graph, 0).collect::<Vec<_>>();

        use DfsEvent::*;
        assert_eq!(
            events,
            vec![
                Discover(0),
                Discover(1),
                Discover(3),
                Finish(3),
                Finish(1),
                Discover(2),
                Finish(2),
                Finish(0)
            ]
        );
    }

    #[test]
    fn visited_persists_between_roots() {
        let graph = AdjList::<(), Undirected>::from_edges(3, [(0, 1)]);
        let mut dfs = Dfs::new(3);

        assert_eq!(dfs.start(&graph, 1).count(), 4);
        assert_eq!(dfs.start(&graph, 0).count(), 0);
        assert!(!dfs.is_visited(2));
        assert_eq!(dfs.start(&graph, 2).count(), 2);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let graph = create_path::<(), Directed>(100_000);
        assert_eq!(preorder(&graph, 0).len(), 100_000);
        assert_eq!(postorder_all(&graph).first(), Some(&99_999));
    }
}
