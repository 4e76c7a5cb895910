//! Uniform radial coordinate grids.

use ndarray as nd;
use crate::error::GridError;

/// An immutable, uniformly spaced sequence of strictly increasing radii.
///
/// Arrays borrowed from this type are guaranteed to start above the origin
/// (where the centrifugal term diverges), to hold at least 3 points, and to
/// be sampled over even intervals. A grid is created once per solve request
/// and cloned into every [`Solution`][crate::solve::Solution] it produces.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGrid {
    // radius array
    r: nd::Array1<f64>,
    // grid spacing
    dr: f64,
    // array size
    n: usize,
}

impl RadialGrid {
    /// Create a new `RadialGrid` from "linspace-style" arguments (start,
    /// inclusive end, and an array length).
    pub fn new_linspace(rmin: f64, rmax: f64, n: usize)
        -> Result<Self, GridError>
    {
        if n < 3 { return Err(GridError::TooShort(n)); }
        if rmin <= 0.0 { return Err(GridError::NonPositiveStart(rmin)); }
        if rmax <= rmin { return Err(GridError::BadRange(rmin, rmax)); }
        let r: nd::Array1<f64> = nd::Array1::linspace(rmin, rmax, n);
        let dr = r[1] - r[0];
        Ok(Self { r, dr, n })
    }

    /// Create a new `RadialGrid` from a bare radius array.
    ///
    /// The array must hold at least 3 points, start above zero, and be
    /// uniformly spaced and strictly increasing (to a relative spacing
    /// tolerance of `1e-8`).
    pub fn from_array(r: nd::Array1<f64>) -> Result<Self, GridError> {
        let n = r.len();
        if n < 3 { return Err(GridError::TooShort(n)); }
        if r[0] <= 0.0 { return Err(GridError::NonPositiveStart(r[0])); }
        let dr = r[1] - r[0];
        if dr <= 0.0 { return Err(GridError::NonUniform); }
        let uniform
            = r.iter().zip(r.iter().skip(1))
            .all(|(rk, rkp1)| ((rkp1 - rk) - dr).abs() <= 1e-8 * dr);
        if !uniform { return Err(GridError::NonUniform); }
        Ok(Self { r, dr, n })
    }

    /// Get a reference to the radius array.
    pub fn get_r(&self) -> &nd::Array1<f64> { &self.r }

    /// Get the grid spacing.
    pub fn get_dr(&self) -> f64 { self.dr }

    /// Get the length of the radius array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the innermost radius.
    pub fn first(&self) -> f64 { self.r[0] }

    /// Get the outermost radius.
    pub fn last(&self) -> f64 { self.r[self.n - 1] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_spacing() {
        let grid = RadialGrid::new_linspace(1.0, 3.0, 5).unwrap();
        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid.get_dr(), 0.5);
        assert_relative_eq!(grid.first(), 1.0);
        assert_relative_eq!(grid.last(), 3.0);
    }

    #[test]
    fn rejects_short_grids() {
        assert!(matches!(
            RadialGrid::new_linspace(1.0, 2.0, 2),
            Err(GridError::TooShort(2)),
        ));
    }

    #[test]
    fn rejects_origin_start() {
        assert!(matches!(
            RadialGrid::new_linspace(0.0, 2.0, 10),
            Err(GridError::NonPositiveStart(_)),
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            RadialGrid::new_linspace(2.0, 1.0, 10),
            Err(GridError::BadRange(..)),
        ));
    }

    #[test]
    fn rejects_nonuniform_arrays() {
        let r = ndarray::array![1.0, 2.0, 4.0, 8.0];
        assert!(matches!(
            RadialGrid::from_array(r),
            Err(GridError::NonUniform),
        ));
    }

    #[test]
    fn accepts_uniform_arrays() {
        let r = ndarray::Array1::linspace(0.5, 10.5, 101);
        let grid = RadialGrid::from_array(r).unwrap();
        assert_relative_eq!(grid.get_dr(), 0.1, max_relative = 1e-12);
    }
}
