//! Adapters around the core: text formats, DOT export and test support.

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
pub mod export;
#[cfg(feature = "proptest")]
pub mod proptest;
pub mod testing;
pub mod text;
