//! Contract of an external solver for the Euclidean [travelling salesman
//! problem] in the plane.
//!
//! The solver itself is an opaque collaborator behind [`TspSolver`]. This
//! module validates what it returns and measures the resulting tour.
//!
//! [travelling salesman problem]: https://en.wikipedia.org/wiki/Travelling_salesman_problem
//!
//! # Examples
//!
//! ```
//! use grafo::tsp::{approximate_tour, Point, TspSolver};
//!
//! struct InOrder;
//!
//! impl TspSolver for InOrder {
//!     fn solve(&self, points: &[Point], _: usize, _: usize) -> Vec<usize> {
//!         (0..points.len()).collect()
//!     }
//! }
//!
//! let square = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)];
//! let tour = approximate_tour(&InOrder, &square, 100, 1000).unwrap();
//!
//! assert_eq!(tour.order(), &[0, 1, 2, 3]);
//! assert_eq!(tour.length(), 4.0);
//! ```

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::common::VisitSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}

/// Approximates a shortest closed tour through all points.
///
/// `outer_steps` is the number of temperature levels and `inner_steps` the
/// number of moves tried at each level. The returned value must be a
/// permutation of point indices.
pub trait TspSolver {
    fn solve(&self, points: &[Point], outer_steps: usize, inner_steps: usize) -> Vec<usize>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("solver returned {len} indices for {point_count} points")]
    WrongLength { len: usize, point_count: usize },
    #[error("solver returned index {0} which is out of range or repeated")]
    NotPermutation(usize),
}

/// Closed tour through all points.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Euclidean length including the edge from the last point back to the
    /// first one.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// Runs the solver and checks that its answer visits every point exactly
/// once.
pub fn approximate_tour<S: TspSolver + ?Sized>(
    solver: &S,
    points: &[Point],
    outer_steps: usize,
    inner_steps: usize,
) -> Result<Tour, Error> {
    let order = solver.solve(points, outer_steps, inner_steps);

    if order.len() != points.len() {
        return Err(Error::WrongLength {
            len: order.len(),
            point_count: points.len(),
        });
    }

    let mut seen = FixedBitSet::with_capacity(points.len());
    for &i in &order {
        if i >= points.len() || !seen.visit(i) {
            return Err(Error::NotPermutation(i));
        }
    }

    let length = tour_length(points, &order);
    Ok(Tour { order, length })
}

fn tour_length(points: &[Point], order: &[usize]) -> f64 {
    order
        .iter()
        .zip(order.iter().cycle().skip(1))
        .map(|(&a, &b)| points[a].distance(&points[b]))
        .sum()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Fixed(Vec<usize>);

    impl TspSolver for Fixed {
        fn solve(&self, _: &[Point], _: usize, _: usize) -> Vec<usize> {
            self.0.clone()
        }
    }

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(3, 4),
            Point::new(3, 0),
            Point::new(0, 4),
        ]
    }

    #[test]
    fn crossing_tour_is_longer() {
        let points = square();

        let good = approximate_tour(&Fixed(vec![0, 2, 1, 3]), &points, 1, 1).unwrap();
        assert_eq!(good.length(), 14.0);

        let crossing = approximate_tour(&Fixed(vec![0, 1, 2, 3]), &points, 1, 1).unwrap();
        assert_eq!(crossing.length(), 18.0);
    }

    #[test]
    fn degenerate_tours() {
        assert_eq!(approximate_tour(&Fixed(vec![]), &[], 1, 1).unwrap().length(), 0.0);

        let single = [Point::new(5, 5)];
        assert_eq!(approximate_tour(&Fixed(vec![0]), &single, 1, 1).unwrap().length(), 0.0);
    }

    #[test]
    fn rejects_invalid_orders() {
        let points = square();

        assert_matches!(
            approximate_tour(&Fixed(vec![0, 1, 2]), &points, 1, 1),
            Err(Error::WrongLength {
                len: 3,
                point_count: 4
            })
        );
        assert_matches!(
            approximate_tour(&Fixed(vec![0, 1, 1, 3]), &points, 1, 1),
            Err(Error::NotPermutation(1))
        );
        assert_matches!(
            approximate_tour(&Fixed(vec![0, 1, 2, 4]), &points, 1, 1),
            Err(Error::NotPermutation(4))
        );
    }
}
