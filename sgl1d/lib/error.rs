//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Errors are split into two classes: [`ConfigError`] for anything that can be
//! fixed by changing the inputs to a calculation, and [`NumericalError`] for
//! failures in the numerics themselves. Both are gathered under
//! [`SolveError`].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;
use crate::interp::InterpMethod;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when the inputs to a calculation are invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Knot coordinate arrays have different lengths.
    #[error("knot array length error: {0}")]
    Length(#[from] LengthError),

    /// Too few knots for the requested interpolation method.
    #[error("{method} interpolation requires at least {min} knots; got {got}")]
    TooFewKnots { method: InterpMethod, min: usize, got: usize },

    /// A knot coordinate or value is NaN or infinite.
    #[error("knot {0} is not finite")]
    NonFiniteKnot(usize),

    /// Knot x-coordinates are not strictly increasing; holds the index of the
    /// first offending knot.
    #[error("knot x-coordinates must be strictly increasing; violated at knot {0}")]
    KnotsNotIncreasing(usize),

    /// Unrecognized interpolation method name.
    #[error("unknown interpolation method '{0}'; expected one of linear, polynomial, cspline")]
    UnknownMethod(String),

    /// Grid bounds are reversed, equal, or non-finite.
    #[error("grid bounds must be finite with x_min < x_max; got [{0}, {1}]")]
    BadBounds(f64, f64),

    /// Too few grid points for a three-point stencil.
    #[error("grid must contain at least 3 points; got {0}")]
    TooFewPoints(usize),

    /// Particle mass is non-positive or non-finite.
    #[error("mass must be finite and greater than 0; got {0}")]
    BadMass(f64),

    /// Eigenpair window is empty or zero-indexed.
    #[error("eigenpair window must satisfy 1 <= first <= last; got [{0}, {1}]")]
    BadWindow(usize, usize),

    /// Eigenpair window runs past the end of the spectrum.
    #[error("eigenpair window [{first}, {last}] exceeds the {n} available states")]
    WindowOutOfRange { first: usize, last: usize, n: usize },
}

impl ConfigError {
    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass.is_finite() && mass > 0.0).then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_bounds(x_min: f64, x_max: f64) -> Result<(), Self> {
        (x_min.is_finite() && x_max.is_finite() && x_max > x_min)
            .then_some(())
            .ok_or(Self::BadBounds(x_min, x_max))
    }

    pub(crate) fn check_points(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::TooFewPoints(n))
    }
}

/// Returned when a numerical routine fails on otherwise valid inputs.
#[derive(Debug, Error)]
pub enum NumericalError {
    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// The potential produced a NaN or infinite value at a grid point.
    #[error("potential is not finite at x = {0}")]
    NonFinitePotential(f64),

    /// The eigensolver produced a NaN or infinite eigenvalue.
    #[error("eigenvalue {0} is not finite")]
    NonFiniteEnergy(usize),

    /// A wavefunction could not be normalized.
    #[error("wavefunction norm must be finite and nonzero; got {0}")]
    BadNorm(f64),
}

/// Returned from the solver pipeline.
#[derive(Debug, Error)]
pub enum SolveError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`NumericalError`]
    #[error("numerical error: {0}")]
    Numerical(#[from] NumericalError),
}

impl SolveError {
    /// Return `true` if `self` is `Config`.
    pub fn is_config(&self) -> bool { matches!(self, Self::Config(_)) }

    /// Return `true` if `self` is `Numerical`.
    pub fn is_numerical(&self) -> bool { matches!(self, Self::Numerical(_)) }
}

impl From<LinalgError> for SolveError {
    fn from(err: LinalgError) -> Self { Self::Numerical(err.into()) }
}
