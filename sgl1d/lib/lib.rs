#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for the solution of the
//! one-dimensional, time-independent Schrödinger equation for potentials given
//! as a handful of knots.
//!
//! A calculation proceeds in stages:
//! - [`interp`]: reconstruct a continuous potential from its knots via linear,
//!   polynomial, or natural cubic spline interpolation
//! - [`grid`]: lay down a uniform coordinate grid
//! - [`hamiltonian`]: assemble the three-point finite-difference Hamiltonian
//! - [`solve`]: extract a window of eigenpairs, ascending in energy
//! - [`utils`]: normalize wavefunctions and compute position observables
//!
//! [`system::Params`] bundles all inputs and runs the whole chain.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod interp;
pub mod grid;
pub mod hamiltonian;
pub mod solve;
pub mod system;
pub mod utils;

pub mod docs;

pub use error::{ ConfigError, NumericalError, SolveError };
pub use interp::{ InterpMethod, Potential };
pub use system::{ Output, Params };

pub type SolveResult<T> = Result<T, SolveError>;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
