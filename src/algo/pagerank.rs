//! Rank vertices of a directed graph with [PageRank].
//!
//! Two methods are available. The random walk simulates a surfer who follows
//! a random outgoing edge or, with the damping probability, teleports to a
//! random vertex. The power iteration computes the stationary distribution of
//! the same process directly.
//!
//! Both methods require every vertex to have at least one outgoing edge.
//!
//! [PageRank]: https://en.wikipedia.org/wiki/PageRank
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::PageRank, graph::Digraph};
//!
//! let graph = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 0), (2, 1)]);
//! let ranking = PageRank::on(&graph).power_iteration().unwrap();
//!
//! assert_eq!(ranking.ranked()[0].0, 1);
//! ```

use thiserror::Error;

use crate::{core::marker::EdgeType, storage::AdjList};

mod power_iteration;
mod random_walk;

/// Probability of teleporting to a random vertex in each step.
pub const DEFAULT_DAMPING: f64 = 0.15;
pub const DEFAULT_EPSILON: f64 = 1e-12;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("damping must be in [0, 1], got {0}")]
    InvalidDamping(f64),
    #[error("vertex {0} has no outgoing edge")]
    DanglingVertex(usize),
    #[error("random walk needs at least one step")]
    NoSteps,
}

/// Score of every vertex. Scores sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    scores: Vec<f64>,
}

impl Ranking {
    pub fn score(&self, vertex: usize) -> f64 {
        self.scores[vertex]
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Vertices with their scores by descending score. Ties are ordered by
    /// ascending vertex index.
    pub fn ranked(&self) -> Vec<(usize, f64)> {
        let mut ranked = self.scores.iter().copied().enumerate().collect::<Vec<_>>();
        ranked.sort_by(|(u, a), (v, b)| b.total_cmp(a).then(u.cmp(v)));
        ranked
    }
}

pub struct PageRank;

pub struct PageRankBuilder<'a, E, Ty> {
    graph: &'a AdjList<E, Ty>,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
}

impl PageRank {
    pub fn on<E, Ty: EdgeType>(graph: &AdjList<E, Ty>) -> PageRankBuilder<'_, E, Ty> {
        PageRankBuilder {
            graph,
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl<'a, E, Ty: EdgeType> PageRankBuilder<'a, E, Ty> {
    pub fn damping(self, damping: f64) -> Self {
        Self { damping, ..self }
    }

    /// Power iteration stops once the L2 norm of the change falls below
    /// epsilon.
    pub fn epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    pub fn max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Estimates the ranking from the visit counts of a random walk with the
    /// given number of steps.
    pub fn random_walk(self, steps: usize, rng: &mut fastrand::Rng) -> Result<Ranking, Error> {
        self.validate()?;

        if steps == 0 {
            return Err(Error::NoSteps);
        }

        Ok(Ranking {
            scores: random_walk::random_walk(self.graph, self.damping, steps, rng),
        })
    }

    pub fn power_iteration(self) -> Result<Ranking, Error> {
        self.validate()?;

        Ok(Ranking {
            scores: power_iteration::power_iteration(
                self.graph,
                self.damping,
                self.epsilon,
                self.max_iterations,
            ),
        })
    }

    fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidDamping(self.damping));
        }

        match self.graph.vertices().find(|&v| self.graph.degree(v) == 0) {
            Some(v) => Err(Error::DanglingVertex(v)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        core::marker::Directed,
        infra::testing::{create_complete, create_cycle},
    };

    fn star() -> AdjList<(), Directed> {
        // Every leaf points to the hub, the hub points to every leaf.
        AdjList::from_edges(4, [(1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (0, 3)])
    }

    #[test]
    fn power_iteration_uniform_on_cycle() {
        let graph: AdjList<(), Directed> = create_cycle(5);
        let ranking = PageRank::on(&graph).power_iteration().unwrap();

        for v in graph.vertices() {
            assert!((ranking.score(v) - 0.2).abs() < 1e-9);
        }

        // All ties, so the ranking is by index.
        let order = ranking.ranked().into_iter().map(|(v, _)| v).collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn power_iteration_star() {
        let graph = star();
        let ranking = PageRank::on(&graph).power_iteration().unwrap();

        let total = ranking.scores().iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9);

        // Stationary hub score x solves x = 0.85 * (1 - x) + 0.15 / 4.
        let hub = (0.85 + 0.15 / 4.0) / 1.85;
        assert!((ranking.score(0) - hub).abs() < 1e-9);
        assert_eq!(ranking.ranked()[0].0, 0);
    }

    #[test]
    fn random_walk_close_to_power_iteration() {
        let graph = star();
        let mut rng = fastrand::Rng::with_seed(0xef6f79ed30ba75a);

        let walk = PageRank::on(&graph).random_walk(200_000, &mut rng).unwrap();
        let exact = PageRank::on(&graph).power_iteration().unwrap();

        let total = walk.scores().iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9);

        for v in graph.vertices() {
            assert!((walk.score(v) - exact.score(v)).abs() < 0.01);
        }
    }

    #[test]
    fn full_damping_is_uniform() {
        let graph: AdjList<(), Directed> = create_complete(3);
        let ranking = PageRank::on(&graph).damping(1.0).power_iteration().unwrap();

        for v in graph.vertices() {
            assert!((ranking.score(v) - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn iteration_cap() {
        let graph = star();
        let ranking = PageRank::on(&graph)
            .epsilon(0.0)
            .max_iterations(3)
            .power_iteration()
            .unwrap();

        let total = ranking.scores().iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_input() {
        let graph = star();
        assert_matches!(
            PageRank::on(&graph).damping(1.5).power_iteration(),
            Err(Error::InvalidDamping(_))
        );
        assert_matches!(
            PageRank::on(&graph).damping(f64::NAN).power_iteration(),
            Err(Error::InvalidDamping(_))
        );

        let mut rng = fastrand::Rng::with_seed(3);
        assert_matches!(
            PageRank::on(&graph).random_walk(0, &mut rng),
            Err(Error::NoSteps)
        );

        let dangling = AdjList::<(), Directed>::from_edges(3, [(0, 1), (2, 0)]);
        assert_matches!(
            PageRank::on(&dangling).power_iteration(),
            Err(Error::DanglingVertex(1))
        );
    }
}
