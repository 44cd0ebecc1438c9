//! Find (strongly) [connected] components in a graph.
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::{is_strongly_connected, StronglyConnectedComponents}, graph::Digraph};
//!
//! let mut graph = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
//! assert!(!is_strongly_connected(&graph));
//! assert_eq!(StronglyConnectedComponents::on(&graph).run().len(), 4);
//!
//! graph.add_edge(3, 0, ());
//! assert!(is_strongly_connected(&graph));
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

mod builder;
mod dfs;
mod kosaraju;

use crate::{
    core::marker::{Directed, Undirected},
    storage::AdjList,
};

pub use builder::{ConnectedComponentsBuilder, StronglyConnectedComponentsBuilder};

/// Connected components of an undirected graph.
///
/// Components are listed in the order of their smallest vertex and the
/// vertices of a component in the order of discovery.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    components: Vec<Vec<usize>>,
}

/// Strongly connected components of a directed graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    inner: ConnectedComponents,
}

impl ConnectedComponents {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Component index of every vertex.
    pub fn labels(&self) -> Vec<usize> {
        let vertex_count = self.components.iter().map(Vec::len).sum();
        let mut labels = vec![0; vertex_count];

        for (label, component) in self.components.iter().enumerate() {
            for &v in component {
                labels[v] = label;
            }
        }

        labels
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.components
    }
}

impl StronglyConnectedComponents {
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_> {
        self.inner.iter()
    }

    /// Component index of every vertex.
    pub fn labels(&self) -> Vec<usize> {
        self.inner.labels()
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.inner.into_inner()
    }
}

pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Vec<usize>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [usize];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}

/// Returns `true` if the graph has at most one component.
pub fn is_connected<E>(graph: &AdjList<E, Undirected>) -> bool {
    ConnectedComponents::on(graph).run().len() <= 1
}

/// Returns `true` if every vertex is reachable from every other vertex.
pub fn is_strongly_connected<E: Clone>(graph: &AdjList<E, Directed>) -> bool {
    StronglyConnectedComponents::on(graph).run().len() <= 1
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use petgraph::algo::kosaraju_scc;
    use proptest::prelude::*;

    use crate::{
        core::marker::EdgeType,
        infra::proptest::{graph_directed, graph_undirected},
        visit::preorder,
    };

    use super::*;

    fn as_sets<'a>(components: impl Iterator<Item = &'a [usize]>) -> BTreeSet<BTreeSet<usize>> {
        components
            .map(|component| component.iter().copied().collect())
            .collect()
    }

    fn assert_partition<Ty: EdgeType>(components: &[Vec<usize>], graph: &AdjList<(), Ty>) {
        let mut all = components.iter().flatten().copied().collect::<Vec<_>>();
        all.sort_unstable();
        assert_eq!(
            all,
            graph.vertices().collect::<Vec<_>>(),
            "components do not partition the vertices"
        );
    }

    fn assert_valid(components: ConnectedComponents, graph: &AdjList<(), Undirected>) {
        let components = components.into_inner();
        assert_partition(&components, graph);

        let labels = ConnectedComponents {
            components: components.clone(),
        }
        .labels();

        for (u, v, _) in graph.edges() {
            assert_eq!(labels[u], labels[v], "edge {u} - {v} crosses components");
        }

        for component in components.iter() {
            assert_ne!(component.len(), 0, "component is empty");
            assert_eq!(
                preorder(graph, component[0]).len(),
                component.len(),
                "component is actually not connected"
            );
        }
    }

    fn assert_valid_strongly(components: StronglyConnectedComponents, graph: &AdjList<(), Directed>) {
        let components = components.into_inner();
        assert_partition(&components, graph);

        for component in components.iter() {
            let reachable = preorder(graph, component[0]).into_iter().collect::<BTreeSet<_>>();
            for &v in component {
                assert!(reachable.contains(&v), "{v} not reachable in its component");
                assert!(
                    preorder(graph, v).contains(&component[0]),
                    "{v} does not reach its component"
                );
            }
        }
    }

    #[test]
    fn undirected_empty() {
        let graph = AdjList::<(), Undirected>::new();
        let components = ConnectedComponents::on(&graph).run();

        assert_eq!(components.len(), 0);
        assert!(is_connected(&graph));
    }

    #[test]
    fn undirected_connected() {
        let graph = AdjList::<(), Undirected>::from_edges(3, [(0, 1), (1, 2)]);
        let components = ConnectedComponents::on(&graph).run();

        assert_eq!(components.len(), 1);
        assert_valid(components, &graph);
    }

    #[test]
    fn undirected_disconnected() {
        let graph = AdjList::<(), Undirected>::from_edges(5, [(0, 1), (2, 3)]);
        let components = ConnectedComponents::on(&graph).run();

        assert_eq!(
            components.iter().collect::<Vec<_>>(),
            vec![&[0, 1][..], &[2, 3], &[4]]
        );
        assert_eq!(components.labels(), vec![0, 0, 1, 1, 2]);
        assert!(!is_connected(&graph));
        assert_valid(components, &graph);
    }

    #[test]
    fn directed_kosaraju_connected() {
        let graph = AdjList::<(), Directed>::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let components = StronglyConnectedComponents::on(&graph).run();

        assert_eq!(components.len(), 1);
        assert!(is_strongly_connected(&graph));
    }

    #[test]
    fn directed_kosaraju_singletons() {
        let graph = AdjList::<(), Directed>::from_adjacency(vec![
            vec![(1, ()), (2, ())],
            vec![],
            vec![(1, ())],
        ])
        .unwrap();
        let components = StronglyConnectedComponents::on(&graph).run();

        assert_eq!(
            as_sets(components.iter()),
            BTreeSet::from([
                BTreeSet::from([0]),
                BTreeSet::from([1]),
                BTreeSet::from([2])
            ])
        );
    }

    #[test]
    fn directed_kosaraju_disconnected() {
        let graph = AdjList::<(), Directed>::from_edges(
            6,
            [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)],
        );
        let components = StronglyConnectedComponents::on(&graph).run();

        assert_eq!(
            as_sets(components.iter()),
            BTreeSet::from([
                BTreeSet::from([0, 1, 2]),
                BTreeSet::from([3, 4]),
                BTreeSet::from([5])
            ])
        );
        assert_valid_strongly(components, &graph);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_connected_components_undirected(graph in graph_undirected(Just(()))) {
            let components = ConnectedComponents::on(&graph).run();
            assert_valid(components, &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_kosaraju_agrees_with_petgraph(graph in graph_directed(Just(()))) {
            let components = StronglyConnectedComponents::on(&graph).run();

            let oracle = petgraph::Graph::<(), ()>::from_edges(
                graph.arcs().map(|(u, v, _)| (u as u32, v as u32)),
            );
            let mut expected = kosaraju_scc(&oracle)
                .into_iter()
                .map(|component| component.into_iter().map(|v| v.index()).collect::<BTreeSet<_>>())
                .collect::<BTreeSet<_>>();
            // Isolated trailing vertices are unknown to the edge-built oracle.
            for v in oracle.node_count()..graph.vertex_count() {
                expected.insert(BTreeSet::from([v]));
            }

            prop_assert_eq!(as_sets(components.iter()), expected);
        }
    }
}
