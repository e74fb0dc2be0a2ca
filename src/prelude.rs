//! Common traits and types that are useful for working with `gridfield`
#![allow(unused_imports)]

pub use crate::field::{Field, ScalarField, VectorField};
pub use crate::mesh::{BoundingBox, Mesh, MeshDimension, MeshScalingType, SpacingParameters};
pub use crate::traits::Numeric;
pub use crate::Error;

pub(crate) use crate::Result;

pub(crate) use derive_more::{Constructor, Deref, Display, Into};

pub(crate) use ndarray::{Array1, ArrayView1, ArrayViewMut1};

pub(crate) use std::sync::Arc;
