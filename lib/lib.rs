#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of
//! the radial, two-body, time-independent Schrödinger equation for central
//! potentials via Numerov's scheme, together with a shooting-style search for
//! bound-state energy eigenvalues driven by the wavefunction's decay at large
//! radius.
//!
//! Provides implementations for the following numerical routines:
//! - Naive radial Numerov integration at fixed trial energy
//! - Bound-state energy search via bisection on the asymptotic tail amplitude
//! - Composite Simpson quadrature for normalization and radial moments
//! - First-order perturbative energy shifts from potential differences
//!
//! The relativistic (Klein–Gordon) integration path is declared but not
//! implemented; see [`solve::Equation`].
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod grid;
pub mod potential;
pub mod solve;
pub mod perturb;
pub mod utils;

pub mod docs;

/// Default convergence bound on the trial energy (MeV).
pub const DEF_EPSILON: f64 = 1e-6;
/// Default iteration cap for the bound-state search.
pub const DEF_MAXITERS: usize = 100;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
