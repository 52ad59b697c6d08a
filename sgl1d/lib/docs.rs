//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Boundaries](#boundaries)
//! - [Potential reconstruction](#potential-reconstruction)
//! - [Normalization](#normalization)
//!
//! # Background
//! The one-dimensional time-independent Schrödinger equation (TISE) reads
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(x) + V(x) ψ(x) = E ψ(x)
//!   2 m ∂x²
//! ```
//! for a particle of mass *m* in a conservative potential *V*(*x*). Solutions
//! are eigenpairs of the Hamiltonian operator; since the operator is Hermitian
//! and real, both energies and wavefunctions may be taken to be real.
//!
//! Sampling on a uniform grid
//! ```text
//! x[i] = x_min + i δx, i ∊ {0, ..., N - 1}
//! δx = (x_max - x_min) / (N - 1)
//! ```
//! and replacing the second derivative by the three-point central difference
//! ```text
//! ∂²ψ      ψ[i + 1] - 2 ψ[i] + ψ[i - 1]
//! --- |  ≈ ----------------------------
//! ∂x² |i               δx²
//! ```
//! which carries an error of *O*(*δx*²), turns the TISE into the matrix
//! eigenvalue problem *H* ψ = *E* ψ with the symmetric tridiagonal matrix
//! ```text
//! H[i, i]     =  ħ² / (m δx²) + V(x[i])
//! H[i, i ± 1] = -ħ² / (2 m δx²)
//! ```
//! Energies computed this way converge to the exact ones quadratically in
//! *δx*. For a particle in a box, the discrete spectrum is known exactly,
//! ```text
//!        ħ²                k π
//! E[k] = ---- (1 - cos(-------))
//!        m δx²            N + 1
//! ```
//! which tends to *k*² *π*² *ħ*² / 2 *m* *L*² as *N* → ∞.
//!
//! # Units
//! All quantities are taken in units where *ħ* = 1. Choosing the electron
//! mass as the unit of mass makes these atomic units: lengths are in Bohr
//! radii and energies in Hartree. Any other consistent choice works equally
//! well, since only the combination *ħ*²/*m* enters.
//!
//! # Boundaries
//! Rows 0 and *N* - 1 of *H* simply omit the neighbors that would lie outside
//! the grid. This is equivalent to demanding ψ = 0 at the two virtual points
//! *x*\[-1\] and *x*\[*N*\], i.e. hard walls placed one grid spacing outside
//! of \[*x*_min, *x*_max\]. The effective well width is therefore
//! (*N* + 1) *δx* rather than *x*_max - *x*_min; the difference vanishes
//! linearly with *δx* and should be kept in mind when comparing against
//! analytic results on coarse grids.
//!
//! # Potential reconstruction
//! The potential is known only at a few knots and is reconstructed by one of
//! three methods:
//! - linear: continuous, but with kinks at every knot;
//! - polynomial: a single polynomial of degree *n* - 1 through all *n*
//!   knots. This is smooth but prone to wild oscillation between knots as *n*
//!   grows (Runge's phenomenon); this is a property of the method, not an
//!   error;
//! - natural cubic spline: piecewise cubic with continuous first and second
//!   derivatives, and zero second derivative at the outermost knots.
//!
//! # Normalization
//! Wavefunctions are normalized such that
//! ```text
//! ∫ |ψ(x)|² dx = 1
//! ```
//! with the integral evaluated by the trapezoidal rule on the grid. Because
//! the eigenproblem leaves the sign of each eigenvector arbitrary, the sign is
//! fixed such that the sample of largest magnitude is positive.
