//! Conversion between multi-dimensional cell indices and flat offsets.
//!
//! The first dimension varies fastest: the flat index of `[i, j, k]` on a mesh of
//! `[nx, ny, nz]` cells is `i + nx * (j + ny * k)`. These functions perform no bounds
//! checking; [`Mesh::flat_index`](crate::Mesh::flat_index) and
//! [`Mesh::multi_index`](crate::Mesh::multi_index) are the checked versions.

/// Total number of cells described by per-dimension sizes.
///
/// Overflows like any `usize` product; use [`checked_cell_count`] for untrusted sizes.
pub fn cell_count<const D: usize>(sizes: &[usize; D]) -> usize {
    sizes.iter().product()
}

/// Total number of cells, or `None` if the product overflows `usize`
pub fn checked_cell_count<const D: usize>(sizes: &[usize; D]) -> Option<usize> {
    sizes.iter().try_fold(1usize, |total, size| total.checked_mul(*size))
}

/// Collapse a per-dimension index into a single linear offset
pub fn flatten<const D: usize>(indices: &[usize; D], sizes: &[usize; D]) -> usize {
    let mut stride = 1;
    let mut flat = 0;

    for (index, size) in indices.iter().zip(sizes) {
        flat += index * stride;
        stride *= size;
    }

    flat
}

/// Recover the per-dimension index of a flat offset.
///
/// The most significant dimension is peeled off first by dividing by the product of
/// all lower dimension sizes, the remainder is then carried down to the next dimension.
pub fn unflatten<const D: usize>(flat: usize, sizes: &[usize; D]) -> [usize; D] {
    let mut indices = [0; D];
    let mut remainder = flat;

    for d in (0..D).rev() {
        let stride: usize = sizes[..d].iter().product();
        indices[d] = remainder / stride;
        remainder %= stride;
    }

    indices
}
