//! [Proptest](proptest) strategies generating random adjacency lists.

use std::{fmt, marker::PhantomData};

use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    storage::AdjList,
};

pub fn graph<E: Strategy, Ty: EdgeType>(edge: E) -> GraphStrategy<E, Ty> {
    GraphStrategy::new(edge)
}

pub fn graph_undirected<E: Strategy>(edge: E) -> GraphStrategy<E, Undirected> {
    GraphStrategy::new(edge)
}

pub fn graph_directed<E: Strategy>(edge: E) -> GraphStrategy<E, Directed> {
    GraphStrategy::new(edge)
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    loops: bool,
    multi_edges: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 32,
            loops: false,
            multi_edges: false,
        }
    }
}

pub struct GraphStrategy<E: Strategy, Ty: EdgeType> {
    edge: E,
    params: StrategyParams,
    ty: PhantomData<fn() -> Ty>,
}

impl<E: Strategy, Ty: EdgeType> fmt::Debug for GraphStrategy<E, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

impl<E: Strategy, Ty: EdgeType> GraphStrategy<E, Ty> {
    pub fn new(edge: E) -> Self {
        Self {
            edge,
            params: StrategyParams::default(),
            ty: PhantomData,
        }
    }

    /// Maximum number of vertices.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.params.max_size = max_size;
        self
    }

    pub fn allow_loops(mut self) -> Self {
        self.params.loops = true;
        self
    }

    pub fn allow_multi_edges(mut self) -> Self {
        self.params.multi_edges = true;
        self
    }
}

impl<E, Ty> GraphStrategy<E, Ty>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone,
    Ty: EdgeType,
{
    fn build(&self) -> BoxedStrategy<AdjList<E::Value, Ty>> {
        let params = self.params;
        let edge = self.edge.clone();

        (0..=params.max_size)
            .prop_flat_map(move |n| {
                // Leave room for sparse and moderately dense graphs alike.
                let max_edges = if n == 0 { 0 } else { n * (n - 1) / 2 + n };
                vec((0..n.max(1), 0..n.max(1), edge.clone()), 0..=max_edges)
                    .prop_map(move |edges| build_graph::<_, Ty>(n, edges, params))
            })
            .boxed()
    }
}

fn build_graph<E: Clone, Ty: EdgeType>(
    vertex_count: usize,
    edges: Vec<(usize, usize, E)>,
    params: StrategyParams,
) -> AdjList<E, Ty> {
    let mut graph = AdjList::with_vertices(vertex_count);
    let mut present = FxHashSet::default();

    for (u, v, e) in edges {
        if u == v && !params.loops {
            continue;
        }

        let key = if Ty::is_directed() { (u, v) } else { (u.min(v), u.max(v)) };
        if !present.insert(key) && !params.multi_edges {
            continue;
        }

        graph.add_edge(u, v, e);
    }

    graph
}

impl<E, Ty> Strategy for GraphStrategy<E, Ty>
where
    E: Strategy + Clone + 'static,
    E::Value: Clone,
    Ty: EdgeType,
{
    type Tree = Box<dyn ValueTree<Value = AdjList<E::Value, Ty>>>;
    type Value = AdjList<E::Value, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.build().new_tree(runner)
    }
}
