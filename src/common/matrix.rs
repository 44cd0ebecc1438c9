use crate::core::marker::EdgeType;

/// Number of cells needed for a square matrix of the given size. Undirected
/// graphs only store the lower triangle including the diagonal.
pub fn size_of<Ty: EdgeType>(capacity: usize) -> usize {
    if Ty::is_directed() {
        capacity * capacity
    } else {
        capacity * (capacity + 1) / 2
    }
}

pub fn index<Ty: EdgeType>(row: usize, col: usize, capacity: usize) -> usize {
    if Ty::is_directed() {
        row * capacity + col
    } else {
        // Make sure that the coordinates are in the lower triangle.
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        // The rows are 1 + 2 + 3 + ... + n = n (n + 1) / 2.
        row * (row + 1) / 2 + col
    }
}
