//! Numeric edge weights.
//!
//! Weighted graphs in this crate store one value per adjacency entry. Any
//! primitive integer or float can be used; unweighted graphs use `()` as the
//! edge payload and never go through this trait.

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

mod ordered_float;

pub use ordered_float::OrderedFloat;

pub trait Weight:
    PartialOrd + Add<Self, Output = Self> + Sub<Self, Output = Self> + Clone + Debug + Sized
{
    /// Totally ordered counterpart of the weight, used for sorting.
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn is_unsigned() -> bool;

    fn is_negative(&self) -> bool {
        !Self::is_unsigned() && *self < Self::zero()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
