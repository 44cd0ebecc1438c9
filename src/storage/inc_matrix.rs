use std::marker::PhantomData;

use crate::core::{error::VertexOutOfBounds, marker::EdgeType};

use super::{AdjList, ConvertError};

/// Graph stored as an n×m matrix with one column per edge.
///
/// A column of an undirected graph has `1` at both endpoints. A column of a
/// directed graph has `-1` at the tail and `1` at the head of the arc. Neither
/// form can express a self-loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncMatrix<Ty> {
    columns: Vec<(usize, usize)>,
    vertex_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty: EdgeType> IncMatrix<Ty> {
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            vertex_count,
            ty: PhantomData,
        }
    }

    /// Builds the matrix from dense rows, one row per vertex.
    pub fn from_rows(rows: &[Vec<i8>]) -> Result<Self, ConvertError> {
        let mut matrix = Self::with_vertices(rows.len());
        let edge_count = rows.first().map(Vec::len).unwrap_or(0);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != edge_count {
                return Err(ConvertError::Ragged {
                    row,
                    len: values.len(),
                    expected: edge_count,
                });
            }
        }

        for col in 0..edge_count {
            let mut entries = Vec::with_capacity(2);

            for (row, values) in rows.iter().enumerate() {
                match values[col] {
                    0 => {}
                    value @ 1 => entries.push((row, value)),
                    value @ -1 if Ty::is_directed() => entries.push((row, value)),
                    value => {
                        return Err(ConvertError::InvalidEntry {
                            row,
                            col,
                            value: value as i64,
                        })
                    }
                }
            }

            let edge = match entries.as_slice() {
                [(u, _), (v, _)] if !Ty::is_directed() => (*u, *v),
                [(tail, -1), (head, 1)] | [(head, 1), (tail, -1)] => (*tail, *head),
                _ => return Err(ConvertError::MalformedColumn(col)),
            };

            matrix.columns.push(edge);
        }

        Ok(matrix)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.columns.len()
    }

    /// Endpoints of every column in column order. Directed columns are
    /// `(tail, head)`.
    pub fn columns(&self) -> &[(usize, usize)] {
        &self.columns
    }

    /// Appends a column for the edge and returns its index.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<usize, ConvertError> {
        VertexOutOfBounds::check(from, self.vertex_count)?;
        VertexOutOfBounds::check(to, self.vertex_count)?;

        if from == to {
            return Err(ConvertError::SelfLoop(from));
        }

        self.columns.push((from, to));
        Ok(self.columns.len() - 1)
    }

    /// Value at the given vertex row and edge column.
    ///
    /// # Panics
    ///
    /// Panics if the column does not exist.
    pub fn value(&self, row: usize, col: usize) -> i8 {
        let (from, to) = self.columns[col];

        if row == to {
            1
        } else if row == from {
            if Ty::is_directed() {
                -1
            } else {
                1
            }
        } else {
            0
        }
    }

    /// Dense rows of the matrix.
    pub fn rows(&self) -> Vec<Vec<i8>> {
        (0..self.vertex_count)
            .map(|row| {
                (0..self.columns.len())
                    .map(|col| self.value(row, col))
                    .collect()
            })
            .collect()
    }
}

impl<E, Ty: EdgeType> TryFrom<&AdjList<E, Ty>> for IncMatrix<Ty> {
    type Error = ConvertError;

    fn try_from(graph: &AdjList<E, Ty>) -> Result<Self, Self::Error> {
        let mut matrix = Self::with_vertices(graph.vertex_count());

        for (u, v, _) in graph.edges() {
            matrix.add_edge(u, v)?;
        }

        Ok(matrix)
    }
}

impl<Ty: EdgeType> From<&IncMatrix<Ty>> for AdjList<(), Ty> {
    fn from(matrix: &IncMatrix<Ty>) -> Self {
        let mut graph = AdjList::from_edges(matrix.vertex_count(), matrix.columns.iter().copied());
        graph.sort_neighbors();
        graph
    }
}
