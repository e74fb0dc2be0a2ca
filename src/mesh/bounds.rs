use crate::prelude::*;

use std::fmt;
use std::marker::PhantomData;

/// Axis labels used when rendering a [`BoundingBox`]
pub const DIMENSION_LABELS: [&str; 3] = ["X", "Y", "Z"];

/// The extent of a whole [`Mesh`] or of one of its cells.
///
/// Bounds are stored flat as `[min_0, max_0, min_1, max_1, ...]`. Boxes are only produced
/// by mesh queries such as [`Mesh::bounds`] and [`Mesh::cell_bounds`].
///
/// ```
/// use gridfield::{Mesh, MeshDimension, MeshScalingType};
///
/// let mesh = Mesh::new(
///     MeshScalingType::Constant,
///     [MeshDimension::new(10, 0.0, 1.0), MeshDimension::new(10, -2.0, 2.0)],
/// )
/// .unwrap();
///
/// let cell = mesh.cell_bounds(1).unwrap();
/// assert_eq!(cell.to_string(), "X: [0.1, 0.2], Y: [-2, -1.6]");
/// ```
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct BoundingBox<const D: usize> {
    #[deref]
    bounds: Vec<f64>,
    _marker: PhantomData<[f64; D]>,
}

impl<const D: usize> BoundingBox<D> {
    pub(crate) fn from_intervals(intervals: [(f64, f64); D]) -> Self {
        let bounds = intervals
            .iter()
            .flat_map(|(min, max)| [*min, *max])
            .collect();

        Self {
            bounds,
            _marker: PhantomData,
        }
    }

    /// flat `[min_0, max_0, min_1, max_1, ...]` view of the box
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// lower bound along dimension `d`
    pub fn min(&self, d: usize) -> Result<f64> {
        self.interval(d).map(|(min, _)| min)
    }

    /// upper bound along dimension `d`
    pub fn max(&self, d: usize) -> Result<f64> {
        self.interval(d).map(|(_, max)| max)
    }

    pub fn interval(&self, d: usize) -> Result<(f64, f64)> {
        if d >= D {
            return Err(Error::DimensionOutOfRange {
                dimension: d,
                dimensions: D,
            });
        }
        Ok(self.interval_unchecked(d))
    }

    fn interval_unchecked(&self, d: usize) -> (f64, f64) {
        (self.bounds[2 * d], self.bounds[2 * d + 1])
    }

    /// check if a point lies inside the box (edges inclusive)
    pub fn contains(&self, point: &[f64; D]) -> bool {
        point.iter().enumerate().all(|(d, x)| {
            let (min, max) = self.interval_unchecked(d);
            *x >= min && *x <= max
        })
    }
}

impl<const D: usize> fmt::Display for BoundingBox<D> {
    /// `X: [min, max], Y: [min, max]`. A precision on the formatter applies to every bound
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (d, label) in DIMENSION_LABELS.iter().take(D).enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }

            let (min, max) = self.interval_unchecked(d);
            match f.precision() {
                Some(p) => write!(f, "{label}: [{min:.p$}, {max:.p$}]")?,
                None => write!(f, "{label}: [{min}, {max}]")?,
            }
        }

        Ok(())
    }
}

#[test]
fn renders_every_dimension() {
    let bx = BoundingBox::from_intervals([(0.8, 0.9), (-0.8, -0.4), (0.4, 0.8)]);
    assert_eq!(bx.to_string(), "X: [0.8, 0.9], Y: [-0.8, -0.4], Z: [0.4, 0.8]");

    let bx = BoundingBox::from_intervals([(0.0, 0.1)]);
    assert_eq!(bx.to_string(), "X: [0, 0.1]");
}

#[test]
fn forwards_precision() {
    let bx = BoundingBox::from_intervals([(0.0, 1.0 / 3.0), (-2.0, 2.0)]);
    assert_eq!(format!("{bx:.2}"), "X: [0.00, 0.33], Y: [-2.00, 2.00]");
}

#[test]
fn flat_layout() {
    let bx = BoundingBox::from_intervals([(0.0, 1.0), (-2.0, 2.0)]);
    assert_eq!(bx.bounds(), &[0.0, 1.0, -2.0, 2.0]);
    assert_eq!(bx.len(), 4);
    assert_eq!(bx.interval(1).unwrap(), (-2.0, 2.0));
    assert_eq!(bx.min(0).unwrap(), 0.0);
    assert_eq!(bx.max(1).unwrap(), 2.0);
    assert!(bx.contains(&[0.5, -2.0]));
    assert!(!bx.contains(&[1.5, 0.0]));
}

#[test]
fn missing_dimensions_are_errors() {
    let bx = BoundingBox::from_intervals([(0.0, 1.0), (-2.0, 2.0)]);
    let err = Error::DimensionOutOfRange {
        dimension: 2,
        dimensions: 2,
    };
    assert_eq!(bx.min(2).unwrap_err(), err);
    assert_eq!(bx.max(2).unwrap_err(), err);
    assert_eq!(bx.interval(2).unwrap_err(), err);
}
