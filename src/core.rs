//! Building blocks shared by all graph storages and algorithms.

pub mod error;
pub mod facts;
pub mod marker;
pub mod weight;

pub use error::VertexOutOfBounds;
pub use weight::Weight;
