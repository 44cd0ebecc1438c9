//! Graph representations and the conversions between them.
//!
//! The [adjacency list](adj_list) is the working representation that all
//! algorithms and generators operate on. The [adjacency matrix](adj_matrix)
//! and the [incidence matrix](inc_matrix) exist to exchange graphs in those
//! shapes and can be converted from and to the adjacency list without losing
//! the edge relation. The order of neighbors within a vertex's list is not
//! preserved by a round trip through a matrix.
//!
//! |                 | **[AdjList]** | **[AdjMatrix]** | **[IncMatrix]** |
//! |-----------------|---------------|-----------------|-----------------|
//! | add edge        | _O*(1)_       | _O(1)_          | _O*(1)_         |
//! | get neighbors   | _O(d)_        | _O(V)_          | _O(E)_          |
//! | lookup edge     | _O(d)_        | _O(1)_          | _O(E)_          |
//! | remove edge     | _O(d)_        | _O(1)_          | _O(E)_          |
//! | space           | _O(V + E)_    | _O(V²)_         | _O(E)_          |
//! | multi edge      | YES           | NO              | YES             |
//! | undirected loop | YES           | YES             | NO              |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity

use thiserror::Error;

use crate::core::error::VertexOutOfBounds;

pub mod adj_list;
pub mod adj_matrix;
pub mod inc_matrix;
pub mod repr;

#[doc(inline)]
pub use self::{
    adj_list::AdjList,
    adj_matrix::AdjMatrix,
    inc_matrix::IncMatrix,
    repr::{Repr, Representation},
};

/// Reasons why a graph cannot be built from raw data or expressed in another
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    OutOfBounds(#[from] VertexOutOfBounds),
    #[error("undirected adjacency is not symmetric between vertices {0} and {1}")]
    Asymmetric(usize, usize),
    #[error("undirected edge between vertices {0} and {1} has different weights in each direction")]
    WeightMismatch(usize, usize),
    #[error("parallel edges between vertices {0} and {1} cannot be stored in an adjacency matrix")]
    MultiEdge(usize, usize),
    #[error("self-loop on vertex {0} cannot be stored in an incidence matrix")]
    SelfLoop(usize),
    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("incidence matrix row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid matrix entry {value} at row {row}, column {col}")]
    InvalidEntry { row: usize, col: usize, value: i64 },
    #[error("incidence matrix column {0} does not describe exactly one edge")]
    MalformedColumn(usize),
}
