//! End-to-end solution of a problem described by a single parameter set.
//!
//! ```
//! use sgl1d::{ interp::InterpMethod, system::Params };
//!
//! // infinite square well of width 1
//! let params = Params {
//!     mass: 1.0,
//!     x_min: 0.0,
//!     x_max: 1.0,
//!     n_point: 500,
//!     first: 1,
//!     last: 2,
//!     method: InterpMethod::Linear,
//!     x_decl: vec![0.0, 1.0],
//!     y_decl: vec![0.0, 0.0],
//! };
//! let out = params.solve().unwrap();
//! let e1 = std::f64::consts::PI.powi(2) / 2.0;
//! assert!((out.energies[0] - e1).abs() / e1 < 1e-2);
//! assert!((out.energies[1] - 4.0 * e1).abs() / (4.0 * e1) < 1e-2);
//! ```

use ndarray as nd;
use crate::{
    error::ConfigError,
    grid::Grid,
    hamiltonian::Hamiltonian,
    interp::{ InterpMethod, Potential },
    solve::{ DenseEigh, EigenSolver, Window },
    utils::{ expectation_x, uncertainty_x },
    SolveResult,
};

/// Complete, immutable description of a problem.
///
/// Units have ħ = 1; with `mass` in electron masses, lengths are in Bohr radii
/// and energies in Hartree.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Particle mass.
    pub mass: f64,
    /// Left end of the coordinate grid.
    pub x_min: f64,
    /// Right end of the coordinate grid.
    pub x_max: f64,
    /// Number of grid points, including both ends.
    pub n_point: usize,
    /// First eigenstate to return, counting the ground state as 1.
    pub first: usize,
    /// Last eigenstate to return (inclusive).
    pub last: usize,
    /// Method used to reconstruct the potential from its knots.
    pub method: InterpMethod,
    /// Knot x-coordinates.
    pub x_decl: Vec<f64>,
    /// Knot potential values.
    pub y_decl: Vec<f64>,
}

/// Results of a calculation.
#[derive(Clone, Debug)]
pub struct Output {
    /// Coordinate grid.
    pub x: nd::Array1<f64>,
    /// Reconstructed potential on the grid.
    pub potential: nd::Array1<f64>,
    /// Energies of the requested states, ascending.
    pub energies: nd::Array1<f64>,
    /// Normalized wavefunctions, one row per state.
    pub wavefunctions: nd::Array2<f64>,
    /// Position expectation value of each state.
    pub exp_x: nd::Array1<f64>,
    /// Position uncertainty of each state.
    pub unc_x: nd::Array1<f64>,
}

impl Output {
    /// Number of states.
    pub fn n_states(&self) -> usize { self.energies.len() }

    /// Grid spacing.
    pub fn get_dx(&self) -> f64 {
        (self.x[self.x.len() - 1] - self.x[0]) / (self.x.len() - 1) as f64
    }
}

impl Params {
    /// Build the reconstructed potential.
    pub fn potential(&self) -> SolveResult<Potential> {
        let x: nd::ArrayView1<f64> = nd::ArrayView1::from(&self.x_decl);
        let y: nd::ArrayView1<f64> = nd::ArrayView1::from(&self.y_decl);
        Ok(Potential::new(&x, &y, self.method)?)
    }

    /// Build the coordinate grid.
    pub fn grid(&self) -> SolveResult<Grid> {
        Ok(Grid::new(self.x_min, self.x_max, self.n_point)?)
    }

    /// Build the eigenstate window.
    pub fn window(&self) -> SolveResult<Window> {
        let window = Window::new(self.first, self.last)?;
        window.check(self.n_point)?;
        Ok(window)
    }

    /// Solve using [`DenseEigh`].
    pub fn solve(&self) -> SolveResult<Output> { self.solve_with(&DenseEigh) }

    /// Solve using a particular eigensolver.
    ///
    /// Inputs are validated in pipeline order (knots, grid, mass, window) and
    /// the first problem found is returned. All configuration checks precede
    /// any numerical work.
    pub fn solve_with<E>(&self, solver: &E) -> SolveResult<Output>
    where E: EigenSolver + ?Sized
    {
        let V = self.potential()?;
        let grid = self.grid()?;
        if !V.contains(grid.x_min()) || !V.contains(grid.x_max()) {
            let (lo, hi) = V.domain();
            println!(
                "system::Params::solve: WARNING: grid [{}, {}] extends beyond \
                the knots [{}, {}]; the potential will be extrapolated \
                ({} method)",
                grid.x_min(), grid.x_max(), lo, hi, V.method(),
            );
        }
        ConfigError::check_mass(self.mass)?;
        let window = self.window()?;
        let H = Hamiltonian::assemble(&grid, self.mass, |x| V.eval(x))?;
        let sols = solver.eigenpairs(&H, window)?;

        let x = grid.get_x().clone();
        let dx = grid.get_dx();
        let potential = V.sample(&grid);
        let energies: nd::Array1<f64> = sols.iter().map(|sol| sol.e).collect();
        let mut wavefunctions: nd::Array2<f64>
            = nd::Array2::zeros((sols.len(), grid.len()));
        wavefunctions.outer_iter_mut().zip(&sols)
            .for_each(|(mut row, sol)| { row.assign(&sol.wf); });
        let exp_x: nd::Array1<f64>
            = sols.iter().map(|sol| expectation_x(&x, &sol.wf, dx)).collect();
        let unc_x: nd::Array1<f64>
            = sols.iter().map(|sol| uncertainty_x(&x, &sol.wf, dx)).collect();
        Ok(Output { x, potential, energies, wavefunctions, exp_x, unc_x })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ NumericalError, SolveError };

    fn harmonic() -> Params {
        Params {
            mass: 1.0,
            x_min: -8.0,
            x_max: 8.0,
            n_point: 801,
            first: 1,
            last: 4,
            method: InterpMethod::Polynomial,
            x_decl: vec![-8.0, 0.0, 8.0],
            y_decl: vec![32.0, 0.0, 32.0],
        }
    }

    #[test]
    fn output_shapes() {
        let params = harmonic();
        let out = params.solve().unwrap();
        assert_eq!(out.n_states(), 4);
        assert_eq!(out.x.len(), 801);
        assert_eq!(out.potential.len(), 801);
        assert_eq!(out.wavefunctions.dim(), (4, 801));
        assert_eq!(out.exp_x.len(), 4);
        assert_eq!(out.unc_x.len(), 4);
        assert!((out.get_dx() - 0.02).abs() < 1e-14);
    }

    #[test]
    fn symmetric_potential_is_centered() {
        let out = harmonic().solve().unwrap();
        assert!(out.exp_x.iter().all(|xk| xk.abs() < 1e-8));
        // Δx = √((n + ½) / (m ω)) for the oscillator
        for (n, dxk) in out.unc_x.iter().enumerate() {
            let expected = (n as f64 + 0.5).sqrt();
            assert!((dxk - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn first_failure_wins() {
        let mut params = harmonic();
        params.x_decl = vec![0.0, -1.0, 1.0];
        params.mass = -1.0;
        assert!(matches!(
            params.solve(),
            Err(SolveError::Config(ConfigError::KnotsNotIncreasing(1))),
        ));

        let mut params = harmonic();
        params.mass = 0.0;
        params.last = 10_000;
        assert!(matches!(params.solve(), Err(SolveError::Config(ConfigError::BadMass(_)))));

        let mut params = harmonic();
        params.last = 10_000;
        assert!(matches!(
            params.solve(),
            Err(SolveError::Config(ConfigError::WindowOutOfRange { .. })),
        ));
    }

    #[test]
    fn config_errors_precede_numerical_ones() {
        // overflows to infinity away from the knots
        let mut params = harmonic();
        params.x_decl = vec![-1.0, 0.0, 1.0];
        params.y_decl = vec![1e308, 0.0, 1e308];
        assert!(matches!(
            params.solve(),
            Err(SolveError::Numerical(NumericalError::NonFinitePotential(_))),
        ));

        params.last = 10_000;
        assert!(matches!(
            params.solve(),
            Err(SolveError::Config(ConfigError::WindowOutOfRange { .. })),
        ));
    }
}
