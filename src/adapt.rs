//! Derived graphs computed from existing ones.

mod transpose;

pub use transpose::Transpose;
