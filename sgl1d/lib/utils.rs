//! Quadrature, wavefunction normalization, and position observables.
//!
//! All integrals use the trapezoidal rule over a uniform grid.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ One, Zero };
use crate::{ Arr1, error::NumericalError };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm ∫|ψ|² dx of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len();
    let two = <A as Scalar>::Real::one() + <A as Scalar>::Real::one();
    (dx / two) * (
        q[0].square()
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.square())
            .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
        + q[n - 1].square()
    )
}

// index of the sample with greatest magnitude; the first one wins ties
fn argmax_abs<S>(q: &nd::ArrayBase<S, Ix1>) -> usize
where S: nd::Data<Elem = f64>
{
    q.iter().enumerate()
        .fold((0, f64::NEG_INFINITY), |(kmax, amax), (k, qk)| {
            if qk.abs() > amax { (k, qk.abs()) } else { (kmax, amax) }
        })
        .0
}

/// Return a normalized copy of a real wavefunction.
///
/// The result satisfies [`wf_norm`] = 1 and its sample of greatest magnitude
/// is positive, which fixes the overall sign left arbitrary by an
/// eigensolver.
///
/// Fails if the norm is zero or not finite.
///
/// *Panics if `q` has length less than 2*.
///
/// ```
/// use ndarray as nd;
/// use sgl1d::utils::{ normalize, wf_norm };
///
/// let q = nd::array![0.0, -1.0, -3.0, -1.0, 0.0];
/// let p = normalize(&q, 0.5).unwrap();
/// assert!((wf_norm(&p, 0.5) - 1.0).abs() < 1e-14);
/// assert!(p[2] > 0.0);
/// ```
pub fn normalize<S>(q: &Arr1<S>, dx: f64)
    -> Result<nd::Array1<f64>, NumericalError>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm(q, dx);
    if !norm.is_finite() || norm <= 0.0 {
        return Err(NumericalError::BadNorm(norm));
    }
    let sign = if q[argmax_abs(q)] < 0.0 { -1.0 } else { 1.0 };
    let scale = sign / norm.sqrt();
    Ok(q.mapv(|qk| qk * scale))
}

/// Compute the position expectation value ⟨x⟩ for a normalized wavefunction.
///
/// *Panics if the arrays have length less than 2*.
pub fn expectation_x<S, T>(
    x: &nd::ArrayBase<S, Ix1>,
    q: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let density: nd::Array1<f64>
        = nd::Zip::from(x).and(q).map_collect(|xk, qk| xk * qk * qk);
    trapz(&density, dx)
}

/// Compute the position uncertainty Δx = √(⟨x²⟩ - ⟨x⟩²) for a normalized
/// wavefunction.
///
/// *Panics if the arrays have length less than 2*.
pub fn uncertainty_x<S, T>(
    x: &nd::ArrayBase<S, Ix1>,
    q: &nd::ArrayBase<T, Ix1>,
    dx: f64,
) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let density2: nd::Array1<f64>
        = nd::Zip::from(x).and(q).map_collect(|xk, qk| xk * xk * qk * qk);
    let mean = expectation_x(x, q, dx);
    // clamp away rounding below zero for very narrow states
    (trapz(&density2, dx) - mean.powi(2)).max(0.0).sqrt()
}
