//! Eigenpairs of the discretized Hamiltonian.
//!
//! Eigenstates are counted from 1 in ascending order of energy, so the ground
//! state is state 1, and windows of states are inclusive on both ends.
//!
//! Eigenvectors are only defined up to sign, and for (near-)degenerate
//! energies only up to a choice of basis in the degenerate subspace. Signs are
//! fixed by [`normalize`]; degenerate subspaces are returned in whatever basis
//! the underlying solver produces.

use std::{ cmp, ops::Range };
use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto, EigValshInto };
use crate::{
    error::{ ConfigError, NumericalError },
    hamiltonian::Hamiltonian,
    interp::ConfigResult,
    utils::normalize,
    SolveResult,
};

/// A single solution to the TISE.
///
/// This struct is usually only returned by a solver; you probably won't ever
/// instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Normalized wavefunction
    pub wf: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Contiguous, inclusive, 1-indexed window `[first, last]` of eigenstates.
///
/// ```
/// use sgl1d::solve::Window;
///
/// let w = Window::new(2, 4).unwrap();
/// assert_eq!(w.len(), 3);
/// assert_eq!(w.indices(), 1..4);
/// assert!(Window::new(0, 4).is_err());
/// assert!(w.check(3).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    first: usize,
    last: usize,
}

impl Window {
    /// Create a new window, failing unless `1 <= first <= last`.
    pub fn new(first: usize, last: usize) -> ConfigResult<Self> {
        (first >= 1 && first <= last)
            .then_some(Self { first, last })
            .ok_or(ConfigError::BadWindow(first, last))
    }

    /// Window containing only the ground state.
    pub fn ground() -> Self { Self { first: 1, last: 1 } }

    /// Check that the window fits within a spectrum of `n` states.
    pub fn check(&self, n: usize) -> ConfigResult<()> {
        (self.last <= n)
            .then_some(())
            .ok_or(ConfigError::WindowOutOfRange {
                first: self.first,
                last: self.last,
                n,
            })
    }

    /// First state in the window.
    pub fn first(&self) -> usize { self.first }

    /// Last state in the window.
    pub fn last(&self) -> usize { self.last }

    /// Number of states in the window.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.last - self.first + 1 }

    /// Zero-based index range of the window into an ascending spectrum.
    pub fn indices(&self) -> Range<usize> { self.first - 1..self.last }
}

/// A method to extract eigenpairs from a [`Hamiltonian`].
///
/// Implementors must return states in ascending order of energy, with
/// wavefunctions normalized by [`normalize`].
pub trait EigenSolver {
    /// Compute the eigenpairs in `window`.
    fn eigenpairs(&self, H: &Hamiltonian, window: Window)
        -> SolveResult<Vec<Solution>>;

    /// Compute only the energies in `window`.
    fn eigenvalues(&self, H: &Hamiltonian, window: Window)
        -> SolveResult<nd::Array1<f64>>
    {
        let sols = self.eigenpairs(H, window)?;
        Ok(sols.into_iter().map(|sol| sol.e).collect())
    }
}

// positions of `evals` in ascending order; equal values keep their relative
// order
fn ascending(evals: &nd::Array1<f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..evals.len()).collect();
    order.sort_by(|&l, &r| evals[l].total_cmp(&evals[r]));
    order
}

fn check_energy(e: f64, state: usize) -> Result<f64, NumericalError> {
    e.is_finite().then_some(e).ok_or(NumericalError::NonFiniteEnergy(state))
}

/// Full dense diagonalization via LAPACK's symmetric eigensolver.
///
/// The whole spectrum is computed and then cut down to the requested window.
#[derive(Copy, Clone, Debug, Default)]
pub struct DenseEigh;

impl EigenSolver for DenseEigh {
    fn eigenpairs(&self, H: &Hamiltonian, window: Window)
        -> SolveResult<Vec<Solution>>
    {
        window.check(H.len())?;
        let dx = H.get_dx();
        let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
            = H.to_dense().eigh_into(la::UPLO::Lower)?;
        let order = ascending(&evals);
        window.indices()
            .map(|k| -> SolveResult<Solution> {
                let j = order[k];
                let e = check_energy(evals[j], k + 1)?;
                let wf = normalize(&evecs.column(j), dx)?;
                Ok(Solution { e, wf })
            })
            .collect()
    }

    fn eigenvalues(&self, H: &Hamiltonian, window: Window)
        -> SolveResult<nd::Array1<f64>>
    {
        window.check(H.len())?;
        let evals: nd::Array1<f64>
            = H.to_dense().eigvalsh_into(la::UPLO::Lower)?;
        let order = ascending(&evals);
        let energies: nd::Array1<f64>
            = window.indices()
            .map(|k| check_energy(evals[order[k]], k + 1))
            .collect::<Result<_, _>>()?;
        Ok(energies)
    }
}

/// Compute the eigenpairs in `window` with [`DenseEigh`].
pub fn solve(H: &Hamiltonian, window: Window) -> SolveResult<Vec<Solution>> {
    DenseEigh.eigenpairs(H, window)
}
