//! Named component accessors.
//!
//! Named accessors exist for fields with one to three components: `x` on all of them, `y`
//! only when there are at least two components and `z` only when there are three, so asking
//! a scalar field for its `y` component does not compile. Use [`Field::component`] for
//! checked access by position.
//!
//! ```compile_fail
//! use gridfield::Field;
//!
//! let empty: Field<f64, 0, 1> = Field::default();
//! empty.x();
//! ```

use super::Field;
use crate::prelude::*;

macro_rules! impl_named_component {
    ($components:literal => $($get:ident, $get_mut:ident, $n:literal);+) => {
        impl<T, const D: usize> Field<T, $components, D>
        where
            T: Numeric,
        {
            $(
                pub fn $get(&self) -> ArrayView1<'_, T> {
                    self.data[$n].view()
                }

                pub fn $get_mut(&mut self) -> ArrayViewMut1<'_, T> {
                    self.data[$n].view_mut()
                }
            )+
        }
    };
}

impl_named_component!(1 => x, x_mut, 0);
impl_named_component!(2 => x, x_mut, 0; y, y_mut, 1);
impl_named_component!(3 => x, x_mut, 0; y, y_mut, 1; z, z_mut, 2);
