//! # Mesh Information
//!
//! A [`Mesh`] is a rectilinear grid over `D` dimensions (1, 2 or 3). Each dimension is
//! described by a [`MeshDimension`] (cell count and extent) and every dimension is split
//! into cells by the same [`MeshScalingType`]. Edge and centre positions are computed once
//! during construction and the mesh never changes afterwards.
//!
//! Because a mesh is immutable it is meant to be shared: build it once, wrap it in an
//! [`Arc`](std::sync::Arc) and hand clones of that handle to every
//! [`Field`](crate::Field) defined over it.
//!
//! ## Cell addressing
//!
//! A cell is addressed either by its per-dimension index `[i, j, k]` or by a flat index in
//! which the first dimension varies fastest (see [`index`](crate::index)).
//!
//! ## Equality
//!
//! `==` compares meshes by value (sizes, extents, scaling law and its parameters).
//! Two meshes built from the same description are equal but are not the same mesh;
//! [`Mesh::is_same_mesh`] answers the identity question. Meshes of different
//! dimensionality are never equal.

mod bounds;
mod dimension;
mod spacing;

pub use bounds::{BoundingBox, DIMENSION_LABELS};
pub use dimension::MeshDimension;
pub use spacing::{MeshScalingType, SpacingParameters};

use crate::index;
use crate::prelude::*;

/// Immutable rectilinear grid in `D` dimensions
#[derive(Debug, Clone)]
pub struct Mesh<const D: usize> {
    dim_sizes: [usize; D],
    dim_min: [f64; D],
    dim_max: [f64; D],
    num_cells: usize,
    scaling: MeshScalingType,
    parameters: SpacingParameters,
    edges: [Array1<f64>; D],
    centres: [Array1<f64>; D],
}

impl<const D: usize> Mesh<D> {
    /// Build a mesh with the default [`SpacingParameters`].
    ///
    /// ```
    /// use gridfield::{Mesh, MeshDimension, MeshScalingType};
    ///
    /// let mesh = Mesh::new(
    ///     MeshScalingType::Constant,
    ///     [MeshDimension::new(10, 0.0, 1.0), MeshDimension::new(5, 0.0, 2.0)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(mesh.num_cells(), 50);
    /// ```
    pub fn new(scaling: MeshScalingType, dims: [MeshDimension; D]) -> Result<Self> {
        Self::with_parameters(scaling, SpacingParameters::default(), dims)
    }

    /// Build a mesh with custom constants for the spacing law.
    ///
    /// Fails if `D` is not 1, 2 or 3, if any dimension is empty, has an extent that is not
    /// finite with `min < max`, or has an odd number of cells under
    /// [`MeshScalingType::Pivot`], if the parameters are out of range, if the total cell
    /// count overflows, or if the law degenerates into non-finite or empty cells.
    pub fn with_parameters(
        scaling: MeshScalingType,
        parameters: SpacingParameters,
        dims: [MeshDimension; D],
    ) -> Result<Self> {
        match Self::build(scaling, parameters, dims) {
            Ok(mesh) => {
                log::debug!(
                    "constructed {}D {} mesh with {:?} cells ({} total)",
                    D,
                    scaling,
                    mesh.dim_sizes,
                    mesh.num_cells
                );
                Ok(mesh)
            }
            Err(e) => {
                log::debug!("rejected {}D {} mesh: {}", D, scaling, e);
                Err(e)
            }
        }
    }

    fn build(
        scaling: MeshScalingType,
        parameters: SpacingParameters,
        dims: [MeshDimension; D],
    ) -> Result<Self> {
        Self::validate(scaling, &parameters, &dims)?;

        let dim_sizes = dims.map(|dim| dim.num_cells());
        let num_cells =
            index::checked_cell_count(&dim_sizes).ok_or_else(|| Error::CellCountOverflow {
                sizes: dim_sizes.to_vec(),
            })?;

        let edges = dims.map(|dim| scaling.edges(&dim, &parameters));
        for (d, axis) in edges.iter().enumerate() {
            scaling.check_edges(d, axis)?;
        }
        let centres = std::array::from_fn(|d| MeshScalingType::centres(&edges[d]));

        Ok(Self {
            dim_sizes,
            dim_min: dims.map(|dim| dim.min()),
            dim_max: dims.map(|dim| dim.max()),
            num_cells,
            scaling,
            parameters,
            edges,
            centres,
        })
    }

    fn validate(
        scaling: MeshScalingType,
        parameters: &SpacingParameters,
        dims: &[MeshDimension; D],
    ) -> Result<()> {
        if !(1..=3).contains(&D) {
            return Err(Error::UnsupportedDimension { dimension: D });
        }

        parameters.validate()?;

        for (d, dim) in dims.iter().enumerate() {
            dim.validate(d, scaling)?;
        }

        Ok(())
    }

    /// placeholder geometry with no cells, used by fields that are not bound to a real mesh
    pub(crate) fn empty() -> Self {
        Self {
            dim_sizes: [0; D],
            dim_min: [0.0; D],
            dim_max: [0.0; D],
            num_cells: 0,
            scaling: MeshScalingType::Constant,
            parameters: SpacingParameters::default(),
            edges: std::array::from_fn(|_| Array1::zeros(0)),
            centres: std::array::from_fn(|_| Array1::zeros(0)),
        }
    }

    /// number of dimensions of this mesh
    pub const fn dimension(&self) -> usize {
        D
    }

    /// total number of cells across all dimensions
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// number of cells along dimension `d`
    pub fn dimension_cell_count(&self, d: usize) -> Result<usize> {
        self.check_dimension(d)?;
        Ok(self.dim_sizes[d])
    }

    pub fn dim_sizes(&self) -> &[usize; D] {
        &self.dim_sizes
    }

    pub fn dim_min(&self) -> &[f64; D] {
        &self.dim_min
    }

    pub fn dim_max(&self) -> &[f64; D] {
        &self.dim_max
    }

    pub fn scaling_type(&self) -> MeshScalingType {
        self.scaling
    }

    pub fn parameters(&self) -> &SpacingParameters {
        &self.parameters
    }

    /// the `N + 1` edge positions along dimension `d`
    pub fn edges(&self, d: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_dimension(d)?;
        Ok(self.edges[d].view())
    }

    /// the `N` cell centre positions along dimension `d`
    pub fn centres(&self, d: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_dimension(d)?;
        Ok(self.centres[d].view())
    }

    /// centre coordinate of cell `i` along dimension `d`
    pub fn centre(&self, d: usize, i: usize) -> Result<f64> {
        self.check_dimension(d)?;
        self.check_index(d, i)?;
        Ok(self.centres[d][i])
    }

    /// coordinates of the centre of the cell at `idx`
    pub fn cell_centre(&self, idx: [usize; D]) -> Result<[f64; D]> {
        self.check_indices(&idx)?;
        Ok(std::array::from_fn(|d| self.centres[d][idx[d]]))
    }

    /// checked conversion of a per-dimension cell index into a flat index
    pub fn flat_index(&self, idx: [usize; D]) -> Result<usize> {
        self.check_indices(&idx)?;
        Ok(index::flatten(&idx, &self.dim_sizes))
    }

    /// checked conversion of a flat index into a per-dimension cell index
    pub fn multi_index(&self, flat: usize) -> Result<[usize; D]> {
        if flat >= self.num_cells {
            return Err(Error::FlatIndexOutOfBounds {
                index: flat,
                num_cells: self.num_cells,
            });
        }

        Ok(index::unflatten(flat, &self.dim_sizes))
    }

    /// extent of the whole mesh
    pub fn bounds(&self) -> BoundingBox<D> {
        BoundingBox::from_intervals(std::array::from_fn(|d| (self.dim_min[d], self.dim_max[d])))
    }

    /// extent of the cell with flat index `flat`
    pub fn cell_bounds(&self, flat: usize) -> Result<BoundingBox<D>> {
        let idx = self.multi_index(flat)?;
        Ok(self.bounds_unchecked(&idx))
    }

    /// extent of the cell at the per-dimension index `idx`
    pub fn cell_bounds_at(&self, idx: [usize; D]) -> Result<BoundingBox<D>> {
        self.check_indices(&idx)?;
        Ok(self.bounds_unchecked(&idx))
    }

    fn bounds_unchecked(&self, idx: &[usize; D]) -> BoundingBox<D> {
        BoundingBox::from_intervals(std::array::from_fn(|d| {
            let edges = &self.edges[d];
            (edges[idx[d]], edges[idx[d] + 1])
        }))
    }

    /// iterate over the per-dimension index of every cell in flat order
    pub fn cell_indices(&self) -> impl Iterator<Item = [usize; D]> + '_ {
        (0..self.num_cells).map(move |flat| index::unflatten(flat, &self.dim_sizes))
    }

    /// true only if `other` is this exact mesh instance
    pub fn is_same_mesh<const E: usize>(&self, other: &Mesh<E>) -> bool {
        D == E && std::ptr::eq(self as *const Self as *const u8, other as *const Mesh<E> as *const u8)
    }

    fn check_dimension(&self, d: usize) -> Result<()> {
        if d >= D {
            return Err(Error::DimensionOutOfRange {
                dimension: d,
                dimensions: D,
            });
        }
        Ok(())
    }

    fn check_index(&self, d: usize, i: usize) -> Result<()> {
        if i >= self.dim_sizes[d] {
            return Err(Error::IndexOutOfBounds {
                dimension: d,
                index: i,
                size: self.dim_sizes[d],
            });
        }
        Ok(())
    }

    fn check_indices(&self, idx: &[usize; D]) -> Result<()> {
        for (d, i) in idx.iter().enumerate() {
            self.check_index(d, *i)?;
        }
        Ok(())
    }
}

impl<const D: usize, const E: usize> PartialEq<Mesh<E>> for Mesh<D> {
    fn eq(&self, other: &Mesh<E>) -> bool {
        if D != E {
            return false;
        }

        if self.is_same_mesh(other) {
            return true;
        }

        self.dim_sizes[..] == other.dim_sizes[..]
            && self.dim_min[..] == other.dim_min[..]
            && self.dim_max[..] == other.dim_max[..]
            && self.scaling == other.scaling
            && self.parameters == other.parameters
            && self.num_cells == other.num_cells
    }
}
