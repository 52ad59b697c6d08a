//! Finite-difference Hamiltonian for the one-dimensional TISE.
//!
//! With ħ = 1, the three-point stencil for the second derivative gives the
//! tridiagonal operator
//! ```text
//! H[i, i]     = 1 / (m δx²) + V(x[i])
//! H[i, i ± 1] = -1 / (2 m δx²)
//! ```
//! with all other entries zero. Points just outside of the grid are taken to
//! have ψ = 0 (Dirichlet boundaries), so they simply do not appear.

use ndarray as nd;
use crate::{
    error::{ ConfigError, NumericalError },
    grid::Grid,
    SolveResult,
};

/// Symmetric tridiagonal Hamiltonian sampled on a uniform grid.
#[derive(Clone, Debug)]
pub struct Hamiltonian {
    // main diagonal: kinetic + potential
    diag: nd::Array1<f64>,
    // constant off-diagonal kinetic term
    off: f64,
    // grid spacing
    dx: f64,
}

impl Hamiltonian {
    /// Assemble the Hamiltonian for a particle of mass `mass` in the potential
    /// `V`, sampled on `grid`.
    ///
    /// Fails with a configuration error if `mass` is not finite and positive,
    /// and with a numerical error if `V` is not finite at some grid point.
    ///
    /// ```
    /// use sgl1d::{ grid::Grid, hamiltonian::Hamiltonian };
    ///
    /// let grid = Grid::new(0.0, 1.0, 3).unwrap();
    /// let h = Hamiltonian::assemble(&grid, 1.0, |x| x).unwrap();
    /// let dense = h.to_dense();
    /// assert_eq!(dense[[0, 0]], 4.0);
    /// assert_eq!(dense[[1, 1]], 4.5);
    /// assert_eq!(dense[[0, 1]], -2.0);
    /// assert_eq!(dense[[0, 2]], 0.0);
    /// ```
    pub fn assemble<F>(grid: &Grid, mass: f64, V: F) -> SolveResult<Self>
    where F: Fn(f64) -> f64
    {
        ConfigError::check_mass(mass)?;
        let dx = grid.get_dx();
        let kin = (mass * dx.powi(2)).recip();
        let diag: nd::Array1<f64>
            = grid.get_x().iter()
            .map(|&xk| {
                let vk = V(xk);
                vk.is_finite()
                    .then_some(kin + vk)
                    .ok_or(NumericalError::NonFinitePotential(xk))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { diag, off: -0.5 * kin, dx })
    }

    /// Get a reference to the main diagonal.
    pub fn get_diag(&self) -> &nd::Array1<f64> { &self.diag }

    /// Get the (constant) value of the first off-diagonals.
    pub fn get_off_diag(&self) -> f64 { self.off }

    /// Get the grid spacing the operator was built for.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the dimension of the operator.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.diag.len() }

    /// Expand to a dense matrix.
    ///
    /// Both off-diagonals receive the identical value, so the result is exactly
    /// symmetric.
    pub fn to_dense(&self) -> nd::Array2<f64> {
        let n = self.diag.len();
        let mut H: nd::Array2<f64> = nd::Array2::zeros((n, n));
        H.diag_mut().assign(&self.diag);
        H.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(self.off);
        H.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(self.off);
        H
    }
}
