use std::marker::PhantomData;

use bitvec::prelude::*;

use crate::{
    common::{index, size_of},
    core::{error::VertexOutOfBounds, marker::EdgeType},
};

use super::{AdjList, ConvertError};

/// Graph stored as an n×n 0/1 matrix.
///
/// Undirected graphs keep only the lower triangle (diagonal included), so the
/// matrix is symmetric by construction. A set diagonal cell is a self-loop.
/// Parallel edges cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix<Ty> {
    cells: BitVec,
    vertex_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty: EdgeType> AdjMatrix<Ty> {
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            cells: bitvec![0; size_of::<Ty>(vertex_count)],
            vertex_count,
            ty: PhantomData,
        }
    }

    /// Builds the matrix from rows of 0/1 values.
    ///
    /// Undirected matrices must be symmetric.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ConvertError> {
        let n = rows.len();
        let mut matrix = Self::with_vertices(n);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(ConvertError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }

            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => matrix.set(row, col, true),
                    _ => {
                        return Err(ConvertError::InvalidEntry {
                            row,
                            col,
                            value: value as i64,
                        })
                    }
                }
            }
        }

        if !Ty::is_directed() {
            for (row, values) in rows.iter().enumerate() {
                for col in 0..row {
                    if values[col] != rows[col][row] {
                        return Err(ConvertError::Asymmetric(col, row));
                    }
                }
            }
        }

        Ok(matrix)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.cells.count_ones()
    }

    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        from < self.vertex_count
            && to < self.vertex_count
            && self.cells[index::<Ty>(from, to, self.vertex_count)]
    }

    /// Sets the edge. Returns `true` if the edge was not present before.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, VertexOutOfBounds> {
        VertexOutOfBounds::check(from, self.vertex_count)?;
        VertexOutOfBounds::check(to, self.vertex_count)?;

        let was_present = self.contains_edge(from, to);
        self.set(from, to, true);
        Ok(!was_present)
    }

    /// Clears the edge. Returns `true` if the edge was present.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let was_present = self.contains_edge(from, to);
        if was_present {
            self.set(from, to, false);
        }
        was_present
    }

    /// Neighbors of the vertex in ascending order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count).filter(move |&v| self.contains_edge(vertex, v))
    }

    /// Dense rows of the matrix.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        (0..self.vertex_count)
            .map(|u| {
                (0..self.vertex_count)
                    .map(|v| u8::from(self.contains_edge(u, v)))
                    .collect()
            })
            .collect()
    }

    fn set(&mut self, from: usize, to: usize, value: bool) {
        let i = index::<Ty>(from, to, self.vertex_count);
        self.cells.set(i, value);
    }
}

impl<E, Ty: EdgeType> TryFrom<&AdjList<E, Ty>> for AdjMatrix<Ty> {
    type Error = ConvertError;

    fn try_from(graph: &AdjList<E, Ty>) -> Result<Self, Self::Error> {
        let mut matrix = Self::with_vertices(graph.vertex_count());

        for (u, v, _) in graph.edges() {
            if !matrix.add_edge(u, v)? {
                return Err(ConvertError::MultiEdge(u, v));
            }
        }

        Ok(matrix)
    }
}

impl<Ty: EdgeType> From<&AdjMatrix<Ty>> for AdjList<(), Ty> {
    fn from(matrix: &AdjMatrix<Ty>) -> Self {
        let n = matrix.vertex_count();
        let mut graph = AdjList::with_vertices(n);

        for u in 0..n {
            // Undirected edges are added from their smaller endpoint, which
            // keeps every neighbor list sorted.
            let start = if Ty::is_directed() { 0 } else { u };
            for v in start..n {
                if matrix.contains_edge(u, v) {
                    graph.add_edge(u, v, ());
                }
            }
        }

        graph
    }
}
