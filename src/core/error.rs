use thiserror::Error;

/// A vertex index that does not belong to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
pub struct VertexOutOfBounds {
    pub vertex: usize,
    pub vertex_count: usize,
}

impl VertexOutOfBounds {
    pub(crate) fn check(vertex: usize, vertex_count: usize) -> Result<(), Self> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(Self {
                vertex,
                vertex_count,
            })
        }
    }
}
