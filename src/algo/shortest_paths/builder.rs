use crate::{
    core::{error::VertexOutOfBounds, marker::EdgeType, weight::Weight},
    storage::AdjList,
};

use super::{bellman_ford::bellman_ford, dijkstra::dijkstra, Algo, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, W, Ty> {
    graph: &'a AdjList<W, Ty>,
    goal: Option<usize>,
    algo: Option<Algo>,
}

impl<W> ShortestPaths<W> {
    pub fn on<Ty: EdgeType>(graph: &AdjList<W, Ty>) -> ShortestPathsBuilder<'_, W, Ty> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            algo: None,
        }
    }
}

impl<'a, W, Ty: EdgeType> ShortestPathsBuilder<'a, W, Ty> {
    /// Stops the search as soon as the distance to the goal is final.
    pub fn goal(self, goal: usize) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn dijkstra(self) -> Self {
        self.using(Algo::Dijkstra)
    }

    pub fn bellman_ford(self) -> Self {
        self.using(Algo::BellmanFord)
    }

    pub fn using(self, algo: Algo) -> Self {
        self.using_opt(Some(algo))
    }

    pub fn using_opt(self, algo: Option<Algo>) -> Self {
        Self { algo, ..self }
    }
}

impl<'a, W: Weight, Ty: EdgeType> ShortestPathsBuilder<'a, W, Ty> {
    pub fn run(self, source: usize) -> Result<ShortestPaths<W>, Error> {
        let vertex_count = self.graph.vertex_count();
        VertexOutOfBounds::check(source, vertex_count)?;
        if let Some(goal) = self.goal {
            VertexOutOfBounds::check(goal, vertex_count)?;
        }

        let algo = self.algo.unwrap_or_else(|| self.choose_algo());

        match algo {
            Algo::Dijkstra => dijkstra(self.graph, source, self.goal),
            Algo::BellmanFord => bellman_ford(self.graph, source, self.goal),
        }
    }

    fn choose_algo(&self) -> Algo {
        if !W::is_unsigned() && self.graph.is_directed() {
            // There is a possibility that a negative weight is encountered,
            // so, for directed graphs, we conservatively use Bellman-Ford.
            Algo::BellmanFord
        } else {
            // Any negative undirected edge creates a negative cycle, which is
            // an error either way. Dijkstra reports it as a negative edge, but
            // has better runtime in the happy case.
            Algo::Dijkstra
        }
    }
}
