use std::{marker::PhantomData, ops::Range};

use rustc_hash::FxHashMap;

use crate::core::{error::VertexOutOfBounds, marker::EdgeType};

use super::ConvertError;

/// Graph stored as a list of adjacent vertices for every vertex.
///
/// Each adjacency entry is a pair of the neighbor index and the edge payload
/// `E`. Unweighted graphs use `()` as the payload, weighted graphs a numeric
/// [weight](crate::core::Weight).
///
/// Undirected graphs store every edge in the lists of both endpoints. A
/// self-loop in an undirected graph is stored twice in the list of its vertex,
/// so that the sum of degrees is always twice the number of edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<E, Ty> {
    adjacency: Vec<Vec<(usize, E)>>,
    ty: PhantomData<fn() -> Ty>,
}

/// Conversion into an edge accepted by [`AdjList::extend_with_edges`] and
/// [`AdjList::from_edges`].
pub trait IntoEdge<E> {
    fn into_edge(self) -> (usize, usize, E);
}

impl IntoEdge<()> for (usize, usize) {
    fn into_edge(self) -> (usize, usize, ()) {
        (self.0, self.1, ())
    }
}

impl<E> IntoEdge<E> for (usize, usize, E) {
    fn into_edge(self) -> (usize, usize, E) {
        self
    }
}

impl<E, Ty: EdgeType> AdjList<E, Ty> {
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut adjacency = Vec::with_capacity(vertex_count);
        adjacency.resize_with(vertex_count, Vec::new);

        Self {
            adjacency,
            ty: PhantomData,
        }
    }

    /// Wraps raw adjacency lists.
    ///
    /// All neighbor indices must be in bounds and, for undirected graphs, the
    /// adjacency must be symmetric: vertex `u` must appear in the list of `v`
    /// exactly as many times as `v` appears in the list of `u`, and the
    /// payloads of both directions must be equal.
    pub fn from_adjacency(adjacency: Vec<Vec<(usize, E)>>) -> Result<Self, ConvertError>
    where
        E: PartialEq,
    {
        let vertex_count = adjacency.len();

        for neighbors in adjacency.iter() {
            for (v, _) in neighbors {
                VertexOutOfBounds::check(*v, vertex_count)?;
            }
        }

        if !Ty::is_directed() {
            check_symmetry(&adjacency)?;
        }

        Ok(Self {
            adjacency,
            ty: PhantomData,
        })
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. For undirected graphs this is half the sum of
    /// degrees, for directed graphs the total number of arcs.
    pub fn edge_count(&self) -> usize {
        let entries = self.adjacency.iter().map(Vec::len).sum::<usize>();

        if Ty::is_directed() {
            entries
        } else {
            entries / 2
        }
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Degree of the vertex, or the out-degree for directed graphs.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }

    /// Degrees (out-degrees for directed graphs) of all vertices in order.
    pub fn vertex_degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// In-degrees of all vertices. Equal to [`vertex_degrees`](Self::vertex_degrees)
    /// for undirected graphs.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count()];
        for neighbors in self.adjacency.iter() {
            for (v, _) in neighbors {
                degrees[*v] += 1;
            }
        }
        degrees
    }

    /// Adjacency entries of the vertex in their stored order.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn adjacent(&self, vertex: usize) -> &[(usize, E)] {
        &self.adjacency[vertex]
    }

    /// Neighbors of the vertex in their stored order.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[vertex].iter().map(|(v, _)| *v)
    }

    /// Every adjacency entry as `(from, to, edge)`.
    ///
    /// Undirected edges are reported in both directions.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize, &E)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().map(move |(v, e)| (u, *v, e)))
    }

    /// Every edge exactly once as `(from, to, edge)`.
    ///
    /// Undirected edges are reported with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &E)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| {
                let mut loop_pending = false;

                neighbors.iter().filter_map(move |(v, e)| {
                    if Ty::is_directed() || u < *v {
                        Some((u, *v, e))
                    } else if u == *v {
                        // Undirected self-loops are stored twice.
                        loop_pending = !loop_pending;
                        loop_pending.then_some((u, *v, e))
                    } else {
                        None
                    }
                })
            })
    }

    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.edge(from, to).is_some()
    }

    /// Returns the payload of the first edge between the vertices.
    pub fn edge(&self, from: usize, to: usize) -> Option<&E> {
        self.adjacency
            .get(from)?
            .iter()
            .find_map(|(v, e)| (*v == to).then_some(e))
    }

    /// Number of parallel edges between the vertices. Undirected self-loops
    /// count once.
    pub fn multiplicity(&self, from: usize, to: usize) -> usize {
        let count = self
            .adjacency
            .get(from)
            .map(|neighbors| neighbors.iter().filter(|(v, _)| *v == to).count())
            .unwrap_or(0);

        if !Ty::is_directed() && from == to {
            count / 2
        } else {
            count
        }
    }

    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Removes one edge between the vertices and returns its payload.
    ///
    /// The order of the remaining adjacency entries is preserved.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Option<E> {
        let position = self
            .adjacency
            .get(from)?
            .iter()
            .position(|(v, _)| *v == to)?;
        let (_, edge) = self.adjacency[from].remove(position);

        if !Ty::is_directed() {
            // Undirected adjacency is symmetric, so the mirror entry exists.
            if let Some(mirror) = self.adjacency[to].iter().position(|(v, _)| *v == from) {
                self.adjacency[to].remove(mirror);
            }
        }

        Some(edge)
    }

    /// Sorts every adjacency list by the neighbor index. The relative order of
    /// parallel edges is preserved.
    pub fn sort_neighbors(&mut self) {
        for neighbors in self.adjacency.iter_mut() {
            neighbors.sort_by_key(|(v, _)| *v);
        }
    }

    /// The same graph with the edge payloads dropped.
    pub fn unweighted(&self) -> AdjList<(), Ty> {
        AdjList {
            adjacency: self
                .adjacency
                .iter()
                .map(|neighbors| neighbors.iter().map(|(v, _)| (*v, ())).collect())
                .collect(),
            ty: PhantomData,
        }
    }

    pub fn into_adjacency(self) -> Vec<Vec<(usize, E)>> {
        self.adjacency
    }
}

impl<E: Clone, Ty: EdgeType> AdjList<E, Ty> {
    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint does not exist.
    pub fn from_edges<I, T>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoEdge<E>,
    {
        let mut graph = Self::with_vertices(vertex_count);
        graph.extend_with_edges(edges);
        graph
    }

    /// Adds an edge. Undirected edges are added to both endpoints.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint does not exist.
    pub fn add_edge(&mut self, from: usize, to: usize, edge: E) {
        match self.try_add_edge(from, to, edge) {
            Ok(()) => {}
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_add_edge(&mut self, from: usize, to: usize, edge: E) -> Result<(), VertexOutOfBounds> {
        VertexOutOfBounds::check(from, self.vertex_count())?;
        VertexOutOfBounds::check(to, self.vertex_count())?;

        if !Ty::is_directed() {
            self.adjacency[to].push((from, edge.clone()));
        }
        self.adjacency[from].push((to, edge));

        Ok(())
    }

    /// # Panics
    ///
    /// Panics if an edge endpoint does not exist.
    pub fn extend_with_edges<I, T>(&mut self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: IntoEdge<E>,
    {
        for edge in edges {
            let (from, to, edge) = edge.into_edge();
            self.add_edge(from, to, edge);
        }
    }

    /// Creates a graph with the same vertices and edges mapped by `f`.
    ///
    /// Undirected edges are mapped once and the result is stored in both
    /// directions, so the symmetry of the payloads is kept.
    pub fn map_edges<E2, F>(&self, mut f: F) -> AdjList<E2, Ty>
    where
        E2: Clone,
        F: FnMut(usize, usize, &E) -> E2,
    {
        let mut mapped = AdjList::with_vertices(self.vertex_count());
        for (u, v, e) in self.edges() {
            mapped.add_edge(u, v, f(u, v, e));
        }
        mapped
    }
}

impl<E, Ty: EdgeType> Default for AdjList<E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_symmetry<E: PartialEq>(adjacency: &[Vec<(usize, E)>]) -> Result<(), ConvertError> {
    let mut payloads = FxHashMap::<(usize, usize), Vec<&E>>::default();
    for (u, neighbors) in adjacency.iter().enumerate() {
        for (v, edge) in neighbors {
            payloads.entry((u, *v)).or_default().push(edge);
        }
    }

    for (&(u, v), forward) in payloads.iter() {
        if u == v {
            // A self-loop is stored twice, so its payloads come in equal pairs.
            if forward.len() % 2 != 0 {
                return Err(ConvertError::Asymmetric(u, v));
            }
            if !pairs_up(forward) {
                return Err(ConvertError::WeightMismatch(u, v));
            }
            continue;
        }

        let backward = match payloads.get(&(v, u)) {
            Some(backward) if backward.len() == forward.len() => backward,
            _ => return Err(ConvertError::Asymmetric(u.min(v), u.max(v))),
        };

        if u < v && !same_payloads(forward, backward) {
            return Err(ConvertError::WeightMismatch(u, v));
        }
    }

    Ok(())
}

/// Whether both lists hold the same payloads regardless of order.
fn same_payloads<E: PartialEq>(lhs: &[&E], rhs: &[&E]) -> bool {
    let mut unmatched = rhs.to_vec();
    for edge in lhs {
        match unmatched.iter().position(|other| other == edge) {
            Some(i) => {
                unmatched.swap_remove(i);
            }
            None => return false,
        }
    }
    unmatched.is_empty()
}

/// Whether the payloads can be split into pairs of equal values.
fn pairs_up<E: PartialEq>(edges: &[&E]) -> bool {
    let mut unmatched = Vec::<&E>::new();
    for edge in edges {
        match unmatched.iter().position(|other| other == edge) {
            Some(i) => {
                unmatched.swap_remove(i);
            }
            None => unmatched.push(*edge),
        }
    }
    unmatched.is_empty()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        core::marker::{Directed, Undirected},
        infra::testing::check_consistency,
    };

    #[test]
    fn basic_undirected() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(4);
        graph.extend_with_edges([(0, 1), (0, 2), (0, 3), (2, 1), (2, 3)]);

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.vertex_degrees(), vec![3, 2, 3, 2]);
        assert!(graph.contains_edge(1, 0));

        assert_eq!(graph.remove_edge(3, 0), Some(()));
        assert_eq!(graph.edge_count(), 4);
        assert!(!graph.contains_edge(0, 3));
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);

        check_consistency(&graph).unwrap();
    }

    #[test]
    fn basic_directed() {
        let mut graph = AdjList::<(), Directed>::with_vertices(4);
        graph.extend_with_edges([(0, 1), (0, 2), (0, 3), (2, 1), (2, 3)]);

        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.vertex_degrees(), vec![3, 0, 2, 0]);
        assert_eq!(graph.in_degrees(), vec![0, 2, 1, 2]);
        assert!(!graph.contains_edge(1, 0));

        assert_eq!(graph.remove_edge(1, 0), None);
        assert_eq!(graph.remove_edge(0, 1), Some(()));
        assert_eq!(graph.edge_count(), 4);

        check_consistency(&graph).unwrap();
    }

    #[test]
    fn undirected_self_loop() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(1);
        graph.add_edge(0, 0, ());

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.multiplicity(0, 0), 1);

        graph.remove_edge(0, 0);
        assert_eq!(graph.degree(0), 0);
    }

    #[test]
    fn multi_edges() {
        let mut graph = AdjList::<i32, Undirected>::with_vertices(3);
        graph.extend_with_edges([(0, 1, 0), (0, 2, 1), (0, 1, 2)]);

        assert_eq!(graph.multiplicity(0, 1), 2);
        assert_eq!(graph.multiplicity(1, 0), 2);
        assert_eq!(graph.edge(0, 1), Some(&0));
        assert_eq!(graph.edges().count(), 3);

        assert_eq!(graph.remove_edge(1, 0), Some(0));
        assert_eq!(graph.edge(0, 1), Some(&2));
    }

    #[test]
    fn weighted_undirected_edges_symmetric() {
        let graph = AdjList::<u32, Undirected>::from_edges(3, [(0, 1, 5), (1, 2, 7)]);

        assert_eq!(graph.edge(1, 0), Some(&5));
        assert_eq!(graph.edge(2, 1), Some(&7));
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1, &5), (1, 2, &7)]
        );
    }

    #[test]
    fn map_edges_keeps_symmetry() {
        let graph = AdjList::<(), Undirected>::from_edges(3, [(0, 1), (1, 2)]);
        let mut next = 0;
        let weighted = graph.map_edges(|_, _, _| {
            next += 1;
            next
        });

        assert_eq!(weighted.edge(0, 1), weighted.edge(1, 0));
        assert_eq!(weighted.edge(1, 2), weighted.edge(2, 1));
        assert_ne!(weighted.edge(0, 1), weighted.edge(1, 2));
    }

    #[test]
    fn from_adjacency_validates() {
        assert_matches!(
            AdjList::<(), Undirected>::from_adjacency(vec![vec![(1, ())], vec![]]),
            Err(ConvertError::Asymmetric(0, 1))
        );
        assert_matches!(
            AdjList::<(), Directed>::from_adjacency(vec![vec![(2, ())], vec![]]),
            Err(ConvertError::OutOfBounds(VertexOutOfBounds { vertex: 2, .. }))
        );
        assert!(AdjList::<(), Directed>::from_adjacency(vec![vec![(1, ())], vec![]]).is_ok());
        assert!(
            AdjList::<(), Undirected>::from_adjacency(vec![vec![(1, ())], vec![(0, ())]]).is_ok()
        );
    }

    #[test]
    fn from_adjacency_undirected_weights_must_match() {
        assert_matches!(
            AdjList::<i64, Undirected>::from_adjacency(vec![vec![(1, 5)], vec![(0, 7)]]),
            Err(ConvertError::WeightMismatch(0, 1))
        );
        assert_matches!(
            AdjList::<i64, Undirected>::from_adjacency(vec![vec![(0, 1), (0, 2)]]),
            Err(ConvertError::WeightMismatch(0, 0))
        );

        // Parallel edges may be listed in a different order on each side.
        let graph = AdjList::<i64, Undirected>::from_adjacency(vec![
            vec![(1, 5), (1, 7), (0, 3), (0, 3)],
            vec![(0, 7), (0, 5)],
        ])
        .unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.multiplicity(0, 1), 2);

        // Directed arcs are independent.
        assert!(AdjList::<i64, Directed>::from_adjacency(vec![vec![(1, 5)], vec![(0, 7)]]).is_ok());
    }

    #[test]
    fn try_add_edge_out_of_bounds() {
        let mut graph = AdjList::<(), Directed>::with_vertices(2);
        assert_eq!(
            graph.try_add_edge(0, 2, ()),
            Err(VertexOutOfBounds {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }
}
