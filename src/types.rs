//! Element types that can travel through a gather
use num_traits::Zero;
use std::fmt::{Debug, Display};

/// Value type of generated matrices (32-bit integers)
pub type Value = i32;

/// Generic element of a flattened matrix
///
/// Anything that is cheap to copy, has a zero (used to pad
/// unselected positions after a scatter) and can be printed.
pub trait Scalar: Copy + Clone + Zero + PartialEq + Debug + Display {}

impl<T> Scalar for T where T: Copy + Clone + Zero + PartialEq + Debug + Display {}
