//! Uniform coordinate grids.

use ndarray as nd;
use crate::{ error::ConfigError, interp::ConfigResult };

/// A uniformly spaced coordinate grid over a closed interval.
///
/// The first and last points are exactly the interval bounds.
///
/// ```
/// use sgl1d::grid::Grid;
///
/// let grid = Grid::new(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid.get_x().to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.get_dx(), 0.25);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // grid spacing
    dx: f64,
}

impl Grid {
    /// Create a new grid of `n` points spanning `[x_min, x_max]`.
    ///
    /// Fails if the bounds are not finite, if `x_max <= x_min`, or if `n < 3`.
    pub fn new(x_min: f64, x_max: f64, n: usize) -> ConfigResult<Self> {
        ConfigError::check_bounds(x_min, x_max)?;
        ConfigError::check_points(n)?;
        let dx = (x_max - x_min) / (n - 1) as f64;
        let x: nd::Array1<f64>
            = nd::Array1::from_shape_fn(n, |k| {
                if k == n - 1 { x_max } else { x_min + k as f64 * dx }
            });
        Ok(Self { x, dx })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the first grid point.
    pub fn x_min(&self) -> f64 { self.x[0] }

    /// Get the last grid point.
    pub fn x_max(&self) -> f64 { self.x[self.x.len() - 1] }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }
}
