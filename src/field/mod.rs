//! # Fields
//!
//! A [`Field`] stores `C` per-cell components of type `T` over a shared `D`-dimensional
//! [`Mesh`]. Scalar quantities such as pressure use one component ([`ScalarField`]),
//! vector quantities such as velocity use one component per mesh dimension
//! ([`VectorField`]). Every component is a one dimensional array with one entry per cell,
//! laid out in the mesh's flat cell order.
//!
//! Fields hold an [`Arc`] to their mesh. Copying a field deep-copies its values and shares
//! the mesh; the mesh itself is never modified through a field.
//!
//! ```
//! use std::sync::Arc;
//! use gridfield::{Mesh, MeshDimension, MeshScalingType, VectorField};
//!
//! let dim = MeshDimension::new(10, 0.0, 1.0);
//! let mesh = Arc::new(Mesh::new(MeshScalingType::Constant, [dim, dim]).unwrap());
//!
//! let mut velocity: VectorField<f64, 2> = VectorField::new(&mesh, "velocity");
//! velocity.set_fixed(2.5);
//! velocity *= 2.0;
//!
//! assert_eq!(velocity.num_cells(), 100);
//! assert!(velocity.y().iter().all(|v| *v == 5.0));
//! ```

mod components;
mod ops;

use crate::prelude::*;

/// Field with a single component per cell
pub type ScalarField<T, const D: usize> = Field<T, 1, D>;

/// Field with one component per mesh dimension
pub type VectorField<T, const D: usize> = Field<T, D, D>;

/// Named per-cell data over a shared [`Mesh`]
///
/// Every component always holds exactly [`Mesh::num_cells`] values. Mutable access is only
/// handed out through array views, so the length of a component can never change.
#[derive(Debug, Clone)]
pub struct Field<T, const C: usize, const D: usize> {
    mesh: Arc<Mesh<D>>,
    num_cells: usize,
    name: String,
    data: [Array1<T>; C],
}

impl<T, const C: usize, const D: usize> Field<T, C, D>
where
    T: Numeric,
{
    /// Allocate a zeroed field over `mesh`
    pub fn new<S: Into<String>>(mesh: &Arc<Mesh<D>>, name: S) -> Self {
        let num_cells = mesh.num_cells();
        let name = name.into();

        log::trace!(
            "allocating field `{}` with {} components over {} cells",
            name,
            C,
            num_cells
        );

        Self {
            mesh: Arc::clone(mesh),
            num_cells,
            name,
            data: std::array::from_fn(|_| Array1::zeros(num_cells)),
        }
    }

    /// Deep copy of this field under a different name
    pub fn copy_with_name<S: Into<String>>(&self, name: S) -> Self {
        Self {
            mesh: Arc::clone(&self.mesh),
            num_cells: self.num_cells,
            name: name.into(),
            data: self.data.clone(),
        }
    }

    /// Move the contents out of this field, leaving an empty unnamed field bound to a
    /// placeholder mesh with no cells in its place.
    pub fn take(&mut self) -> Self {
        log::trace!("moving out of field `{}`", self.name);
        std::mem::take(self)
    }

    /// Overwrite every value of every component
    pub fn set_fixed(&mut self, value: T) {
        self.data.iter_mut().for_each(|arr| arr.fill(value));
    }

    /// Overwrite every value of every component with zero
    pub fn set_zero(&mut self) {
        self.set_fixed(T::zero());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// number of cells in each component
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// number of components per cell
    pub const fn components(&self) -> usize {
        C
    }

    /// the mesh this field is defined over
    pub fn mesh(&self) -> &Arc<Mesh<D>> {
        &self.mesh
    }

    /// all component arrays
    pub fn data(&self) -> &[Array1<T>; C] {
        &self.data
    }

    /// mutable views of every component, in order
    pub fn components_mut(&mut self) -> impl Iterator<Item = ArrayViewMut1<'_, T>> {
        self.data.iter_mut().map(|arr| arr.view_mut())
    }

    /// checked access to component `n`
    pub fn component(&self, n: usize) -> Result<ArrayView1<'_, T>> {
        self.check_component(n)?;
        Ok(self.data[n].view())
    }

    /// checked mutable access to component `n`
    pub fn component_mut(&mut self, n: usize) -> Result<ArrayViewMut1<'_, T>> {
        self.check_component(n)?;
        Ok(self.data[n].view_mut())
    }

    /// value of `component` in the cell with flat index `cell`
    pub fn value(&self, component: usize, cell: usize) -> Result<T> {
        self.check_component(component)?;
        self.check_cell(cell)?;
        Ok(self.data[component][cell])
    }

    /// value of `component` in the cell at the per-dimension index `idx`
    pub fn value_at(&self, component: usize, idx: [usize; D]) -> Result<T> {
        let cell = self.mesh.flat_index(idx)?;
        self.value(component, cell)
    }

    pub fn set_value(&mut self, component: usize, cell: usize, value: T) -> Result<()> {
        self.check_component(component)?;
        self.check_cell(cell)?;
        self.data[component][cell] = value;
        Ok(())
    }

    /// value equality that also requires the names to match
    pub fn eq_with_name(&self, other: &Self) -> bool {
        self == other && self.name == other.name
    }

    /// true only if `other` is this exact field instance
    pub fn is_same_field(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }

    /// true if both fields hold a handle to the same mesh instance
    pub fn shares_mesh<U, const C2: usize>(&self, other: &Field<U, C2, D>) -> bool {
        Arc::ptr_eq(&self.mesh, &other.mesh)
    }

    fn check_component(&self, n: usize) -> Result<()> {
        if n >= C {
            return Err(Error::ComponentOutOfRange {
                component: n,
                components: C,
            });
        }
        Ok(())
    }

    fn check_cell(&self, cell: usize) -> Result<()> {
        if cell >= self.num_cells {
            return Err(Error::FlatIndexOutOfBounds {
                index: cell,
                num_cells: self.num_cells,
            });
        }
        Ok(())
    }
}

impl<T, const C: usize, const D: usize> Default for Field<T, C, D>
where
    T: Numeric,
{
    fn default() -> Self {
        Self {
            mesh: Arc::new(Mesh::empty()),
            num_cells: 0,
            name: String::new(),
            data: std::array::from_fn(|_| Array1::zeros(0)),
        }
    }
}

/// Fields are equal when their meshes are equal by value and every component matches.
/// Names are ignored, see [`Field::eq_with_name`].
impl<T, const C: usize, const D: usize, const C2: usize, const D2: usize>
    PartialEq<Field<T, C2, D2>> for Field<T, C, D>
where
    T: Numeric,
{
    fn eq(&self, other: &Field<T, C2, D2>) -> bool {
        if C != C2 || *self.mesh != *other.mesh {
            return false;
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(lhs, rhs)| lhs == rhs)
    }
}
