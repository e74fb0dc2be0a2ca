//! Spacing laws that place cell edges along one axis of a mesh.
//!
//! Every law maps the normalised coordinate `u = i / N` of edge `i` onto `[0, 1]` and then
//! scales the result into `[min, max]`. The final edge is always pinned to `max` so that the
//! extent of the mesh is exact regardless of rounding. Cell centres sit at the midpoint of
//! their two edges for every law.

use crate::prelude::*;

/// The spacing law applied to every dimension of a [`Mesh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MeshScalingType {
    /// uniform cells
    #[display(fmt = "constant")]
    Constant,
    /// cells grow exponentially from `min` towards `max`
    #[display(fmt = "exponential")]
    Exponential,
    /// `tanh` profile: cells are refined towards both ends and coarsest at the inflection
    /// point set by the attractor
    #[display(fmt = "hyperbolic")]
    Hyperbolic,
    /// cells are smallest at a pivot point and grow away from it on both sides.
    /// Requires an even number of cells per dimension
    #[display(fmt = "pivot")]
    Pivot,
}

/// Tuning constants for the non-uniform spacing laws.
///
/// The defaults are the values the laws are usually quoted with:
///
/// | law         | constant                  | default |
/// |-------------|---------------------------|---------|
/// | exponential | `exponential_stretch`     | 3.0     |
/// | hyperbolic  | `hyperbolic_stretch`      | 3.0     |
/// | hyperbolic  | `hyperbolic_attractor`    | 0.5     |
/// | pivot       | `pivot_fraction`          | 0.35    |
/// | pivot       | `pivot_stretch`           | 2.0     |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingParameters {
    pub exponential_stretch: f64,
    pub hyperbolic_stretch: f64,
    /// normalised location of the `tanh` inflection, in `[0, 1]`
    pub hyperbolic_attractor: f64,
    /// normalised location of the pivot, strictly inside `(0, 1)`
    pub pivot_fraction: f64,
    pub pivot_stretch: f64,
}

impl Default for SpacingParameters {
    fn default() -> Self {
        Self {
            exponential_stretch: 3.0,
            hyperbolic_stretch: 3.0,
            hyperbolic_attractor: 0.5,
            pivot_fraction: 0.35,
            pivot_stretch: 2.0,
        }
    }
}

impl SpacingParameters {
    pub(crate) fn validate(&self) -> Result<()> {
        let stretches = [
            ("exponential_stretch", self.exponential_stretch),
            ("hyperbolic_stretch", self.hyperbolic_stretch),
            ("pivot_stretch", self.pivot_stretch),
        ];

        for (name, value) in stretches {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSpacingParameter { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.hyperbolic_attractor) {
            return Err(Error::InvalidSpacingParameter {
                name: "hyperbolic_attractor",
                value: self.hyperbolic_attractor,
            });
        }

        if !(self.pivot_fraction > 0.0 && self.pivot_fraction < 1.0) {
            return Err(Error::InvalidSpacingParameter {
                name: "pivot_fraction",
                value: self.pivot_fraction,
            });
        }

        Ok(())
    }
}

impl MeshScalingType {
    /// Place the `N + 1` edges of an axis. The axis must already have been validated
    /// for this law.
    pub(crate) fn edges(&self, dim: &MeshDimension, params: &SpacingParameters) -> Array1<f64> {
        let n = dim.num_cells();
        let min = dim.min();
        let range = dim.length();

        let mut edges = match self {
            MeshScalingType::Constant => {
                let dx = range / n as f64;
                Array1::from_shape_fn(n + 1, |i| min + dx * i as f64)
            }
            MeshScalingType::Exponential => {
                let b = params.exponential_stretch;
                let denominator = b.exp() - 1.0;
                Array1::from_shape_fn(n + 1, |i| {
                    let u = i as f64 / n as f64;
                    min + range * ((b * u).exp() - 1.0) / denominator
                })
            }
            MeshScalingType::Hyperbolic => {
                let b = params.hyperbolic_stretch;
                let c = params.hyperbolic_attractor;
                let lower = (-b * c).tanh();
                let upper = (b * (1.0 - c)).tanh();
                Array1::from_shape_fn(n + 1, |i| {
                    let u = i as f64 / n as f64;
                    min + range * ((b * (u - c)).tanh() - lower) / (upper - lower)
                })
            }
            MeshScalingType::Pivot => pivot_edges(dim, params),
        };

        edges[0] = min;
        edges[n] = dim.max();
        edges
    }

    /// Reject an axis whose edges are not finite and strictly increasing. Extreme stretch
    /// factors can saturate a law in floating point even though each parameter is in range.
    pub(crate) fn check_edges(&self, dimension: usize, edges: &Array1<f64>) -> Result<()> {
        let degenerate = edges
            .windows(2)
            .into_iter()
            .position(|w| !(w[0].is_finite() && w[1].is_finite() && w[0] < w[1]));

        match degenerate {
            Some(cell) => Err(Error::DegenerateSpacing {
                dimension,
                cell,
                scaling: *self,
            }),
            None => Ok(()),
        }
    }

    /// Cell centres are the midpoints of neighbouring edges
    pub(crate) fn centres(edges: &Array1<f64>) -> Array1<f64> {
        let n = edges.len().saturating_sub(1);
        Array1::from_shape_fn(n, |i| 0.5 * (edges[i] + edges[i + 1]))
    }
}

/// Both halves of a pivoted axis are filled from the pivot outwards in a single pass: step
/// `i` places one edge above the pivot and its mirror below it, each scaled by the width of
/// its own side.
fn pivot_edges(dim: &MeshDimension, params: &SpacingParameters) -> Array1<f64> {
    let n = dim.num_cells();
    let half = n / 2;
    let b = params.pivot_stretch;
    let denominator = b.exp() - 1.0;

    let pivot = dim.min() + dim.length() * params.pivot_fraction;
    let below = pivot - dim.min();
    let above = dim.max() - pivot;

    let mut edges = Array1::zeros(n + 1);

    for i in 0..=half {
        let u = i as f64 / half as f64;
        let x = ((b * u).exp() - 1.0) / denominator;
        edges[half + i] = pivot + x * above;
        edges[half - i] = pivot - x * below;
    }

    edges
}
