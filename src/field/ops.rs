//! Arithmetic on fields.
//!
//! Scalar operators apply the scalar to every value of every component. The compound forms
//! (`+=`, `-=`, `*=`, `/=`) work in place; the plain forms consume the field (or copy a
//! borrowed one) and return the result. `s + field` and `s * field` are available for
//! `f32` and `f64`.
//!
//! Arithmetic between two fields is fallible because the fields must be defined over
//! meshes that are equal by value.

use super::Field;
use crate::prelude::*;

use ndarray::Zip;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

impl<T, const C: usize, const D: usize> Field<T, C, D>
where
    T: Numeric,
{
    fn apply_scalar<F: Fn(T) -> T>(&mut self, f: F) {
        self.data
            .iter_mut()
            .for_each(|arr| arr.mapv_inplace(&f));
    }

    /// Add `other` to this field value by value.
    ///
    /// Both meshes must be equal by value; they do not have to be the same instance. On
    /// mismatch this field is left untouched.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_compatible(other)?;
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(lhs, rhs)| Zip::from(lhs).and(rhs).for_each(|a, &b| *a = *a + b));
        Ok(self)
    }

    /// Subtract `other` from this field value by value. Same mesh rules as
    /// [`Field::try_add_assign`]
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_compatible(other)?;
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(lhs, rhs)| Zip::from(lhs).and(rhs).for_each(|a, &b| *a = *a - b));
        Ok(self)
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.shares_mesh(other) || *self.mesh == *other.mesh {
            return Ok(());
        }

        log::debug!(
            "refusing arithmetic between `{}` and `{}`: meshes differ",
            self.name,
            other.name
        );

        Err(Error::MeshMismatch {
            lhs: self.num_cells,
            rhs: other.num_cells,
        })
    }
}

impl<T, const C: usize, const D: usize> AddAssign<T> for Field<T, C, D>
where
    T: Numeric,
{
    fn add_assign(&mut self, rhs: T) {
        self.apply_scalar(|x| x + rhs);
    }
}

impl<T, const C: usize, const D: usize> SubAssign<T> for Field<T, C, D>
where
    T: Numeric,
{
    fn sub_assign(&mut self, rhs: T) {
        self.apply_scalar(|x| x - rhs);
    }
}

impl<T, const C: usize, const D: usize> MulAssign<T> for Field<T, C, D>
where
    T: Numeric,
{
    fn mul_assign(&mut self, rhs: T) {
        self.apply_scalar(|x| x * rhs);
    }
}

impl<T, const C: usize, const D: usize> DivAssign<T> for Field<T, C, D>
where
    T: Numeric,
{
    fn div_assign(&mut self, rhs: T) {
        self.apply_scalar(|x| x / rhs);
    }
}

macro_rules! impl_binary_scalar_op {
    ($trait:ident, $method:ident, $assign:ident) => {
        impl<T, const C: usize, const D: usize> $trait<T> for Field<T, C, D>
        where
            T: Numeric,
        {
            type Output = Field<T, C, D>;

            fn $method(mut self, rhs: T) -> Self::Output {
                self.$assign(rhs);
                self
            }
        }

        impl<T, const C: usize, const D: usize> $trait<T> for &Field<T, C, D>
        where
            T: Numeric,
        {
            type Output = Field<T, C, D>;

            fn $method(self, rhs: T) -> Self::Output {
                self.clone().$method(rhs)
            }
        }
    };
}

impl_binary_scalar_op!(Add, add, add_assign);
impl_binary_scalar_op!(Sub, sub, sub_assign);
impl_binary_scalar_op!(Mul, mul, mul_assign);
impl_binary_scalar_op!(Div, div, div_assign);

// scalar on the left hand side, only for commutative operators
macro_rules! impl_scalar_lhs {
    ($($num:ty),+) => {
        $(
            impl<const C: usize, const D: usize> Add<Field<$num, C, D>> for $num {
                type Output = Field<$num, C, D>;

                fn add(self, rhs: Field<$num, C, D>) -> Self::Output {
                    rhs + self
                }
            }

            impl<const C: usize, const D: usize> Add<&Field<$num, C, D>> for $num {
                type Output = Field<$num, C, D>;

                fn add(self, rhs: &Field<$num, C, D>) -> Self::Output {
                    rhs + self
                }
            }

            impl<const C: usize, const D: usize> Mul<Field<$num, C, D>> for $num {
                type Output = Field<$num, C, D>;

                fn mul(self, rhs: Field<$num, C, D>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const C: usize, const D: usize> Mul<&Field<$num, C, D>> for $num {
                type Output = Field<$num, C, D>;

                fn mul(self, rhs: &Field<$num, C, D>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs!(f32, f64);
