#![doc = include_str!("../README.md")]

pub mod field;
pub mod index;
pub mod mesh;
pub mod prelude;
mod traits;

pub use traits::Numeric;

pub use mesh::{BoundingBox, Mesh, MeshDimension, MeshScalingType, SpacingParameters};
pub use mesh::DIMENSION_LABELS;

pub use field::{Field, ScalarField, VectorField};

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("meshes must have 1, 2 or 3 dimensions, got {dimension}")]
    UnsupportedDimension { dimension: usize },
    #[error("dimension {dimension} must contain at least one cell, got {count}")]
    InvalidCellCount { dimension: usize, count: usize },
    #[error("dimension {dimension} has invalid extent [{min}, {max}]: bounds must be finite with min < max")]
    InvalidExtent { dimension: usize, min: f64, max: f64 },
    #[error("pivot scaling requires an even cell count but dimension {dimension} has {count} cells")]
    OddPivotCellCount { dimension: usize, count: usize },
    #[error("spacing parameter `{name}` has invalid value {value}")]
    InvalidSpacingParameter { name: &'static str, value: f64 },
    #[error("{scaling} spacing produced a non-finite or empty cell {cell} in dimension {dimension}")]
    DegenerateSpacing {
        dimension: usize,
        cell: usize,
        scaling: MeshScalingType,
    },
    #[error("total cell count of {sizes:?} overflows usize")]
    CellCountOverflow { sizes: Vec<usize> },
    #[error("dimension {dimension} does not exist in a {dimensions}D mesh")]
    DimensionOutOfRange { dimension: usize, dimensions: usize },
    #[error("cell index {index} is out of bounds in dimension {dimension} (size {size})")]
    IndexOutOfBounds {
        dimension: usize,
        index: usize,
        size: usize,
    },
    #[error("flat cell index {index} is out of bounds for a mesh of {num_cells} cells")]
    FlatIndexOutOfBounds { index: usize, num_cells: usize },
    #[error("component {component} does not exist in a field with {components} components")]
    ComponentOutOfRange { component: usize, components: usize },
    #[error("fields are bound to different meshes ({lhs} cells vs {rhs} cells)")]
    MeshMismatch { lhs: usize, rhs: usize },
}

/// shorthand for results carrying a [`crate::Error`]
pub type Result<T> = std::result::Result<T, Error>;
