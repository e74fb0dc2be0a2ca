//! # Traits
//!
//! Bounds shared by the containers in this crate.

use std::fmt::Debug;

/// Element type that can be stored in a [`Field`](crate::Field).
///
/// Anything that behaves like a number from `num_traits` qualifies. The default value of a
/// field element is [`Zero::zero`](num_traits::Zero::zero), so freshly allocated fields and
/// [`Field::set_zero`](crate::Field::set_zero) agree with each other.
pub trait Numeric: num_traits::Num + Copy + Debug + PartialEq + Send + Sync + 'static {}

impl<T> Numeric for T where T: num_traits::Num + Copy + Debug + PartialEq + Send + Sync + 'static {}
