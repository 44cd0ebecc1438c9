use crate::{
    core::marker::{Directed, Undirected},
    storage::AdjList,
};

use super::{dfs::dfs, kosaraju::kosaraju, ConnectedComponents, StronglyConnectedComponents};

pub struct ConnectedComponentsBuilder<'a, E> {
    graph: &'a AdjList<E, Undirected>,
}

pub struct StronglyConnectedComponentsBuilder<'a, E> {
    graph: &'a AdjList<E, Directed>,
}

impl ConnectedComponents {
    pub fn on<E>(graph: &AdjList<E, Undirected>) -> ConnectedComponentsBuilder<'_, E> {
        ConnectedComponentsBuilder { graph }
    }
}

impl StronglyConnectedComponents {
    pub fn on<E>(graph: &AdjList<E, Directed>) -> StronglyConnectedComponentsBuilder<'_, E> {
        StronglyConnectedComponentsBuilder { graph }
    }
}

impl<E> ConnectedComponentsBuilder<'_, E> {
    /// Labels the components with depth-first search.
    pub fn run(self) -> ConnectedComponents {
        ConnectedComponents {
            components: dfs(self.graph),
        }
    }
}

impl<E: Clone> StronglyConnectedComponentsBuilder<'_, E> {
    /// Runs [Kosaraju's
    /// algorithm](https://en.wikipedia.org/wiki/Kosaraju%27s_algorithm).
    pub fn run(self) -> StronglyConnectedComponents {
        StronglyConnectedComponents {
            inner: ConnectedComponents {
                components: kosaraju(self.graph),
            },
        }
    }
}
