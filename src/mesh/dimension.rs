use crate::prelude::*;

/// Sizing information for one axis of a [`Mesh`]: how many cells it is split into and
/// the interval it covers.
///
/// `MeshDimension` is only a description. It is validated when it is handed to
/// [`Mesh::new`], which reports the offending axis by position.
///
/// ```
/// use gridfield::MeshDimension;
///
/// let x = MeshDimension::new(10, 0.0, 1.0);
/// assert_eq!(x.num_cells(), 10);
/// assert_eq!(x.length(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct MeshDimension {
    num_cells: usize,
    min: f64,
    max: f64,
}

impl MeshDimension {
    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// width of the interval covered by this axis
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// check that this axis can be meshed with the given scaling law. `dimension` is the
    /// position of the axis in the mesh and is only used for error reporting
    pub(crate) fn validate(&self, dimension: usize, scaling: MeshScalingType) -> Result<()> {
        if self.num_cells == 0 {
            return Err(Error::InvalidCellCount {
                dimension,
                count: self.num_cells,
            });
        }

        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(Error::InvalidExtent {
                dimension,
                min: self.min,
                max: self.max,
            });
        }

        if scaling == MeshScalingType::Pivot && self.num_cells % 2 != 0 {
            return Err(Error::OddPivotCellCount {
                dimension,
                count: self.num_cells,
            });
        }

        Ok(())
    }
}
