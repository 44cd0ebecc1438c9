mod matrix;
mod union_find;
mod visit_set;

pub(crate) use matrix::*;
pub(crate) use union_find::DisjointSet;
pub(crate) use visit_set::VisitSet;
