//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when an energy bracket is supplied with its bounds out of order.
///
/// The bound-state search rejects such brackets eagerly, before any
/// integration is attempted.
#[derive(Debug, Error)]
#[error("energy brackets must satisfy min < max; got [{0}, {1}]")]
pub struct BracketError(pub f64, pub f64);

impl BracketError {
    pub(crate) fn check(min_energy: f64, max_energy: f64) -> Result<(), Self> {
        (min_energy < max_energy).then_some(())
            .ok_or(Self(min_energy, max_energy))
    }
}

/// Returned from [`RadialGrid`][crate::grid::RadialGrid] constructors.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when fewer than 3 grid points are requested or supplied.
    #[error("radial grids must be longer than 2 points; got {0}")]
    TooShort(usize),

    /// Returned when the grid would start at or below the origin, where the
    /// centrifugal term diverges.
    #[error("radial grids must start at a strictly positive radius; got {0}")]
    NonPositiveStart(f64),

    /// Returned when the requested endpoints are out of order.
    #[error("radial grids must end beyond their starting radius; got [{0}, {1}]")]
    BadRange(f64, f64),

    /// Returned when a caller-supplied radius array is not uniformly spaced
    /// and strictly increasing.
    #[error("radial grids must be uniformly spaced and strictly increasing")]
    NonUniform,
}

/// Returned from quadrature and normalization functions in
/// [`utils`][crate::utils].
#[derive(Debug, Error)]
pub enum QuadError {
    /// Returned when a sample array is too short for the composite Simpson
    /// rule.
    #[error("quadrature requires at least 3 samples; got {0}")]
    TooShort(usize),

    /// Returned when a normalization integral vanishes or is non-finite, so
    /// no rescaling exists.
    #[error("normalization integral is zero or non-finite")]
    ZeroNorm,
}

/// Returned from radial wavefunction solver functions.
#[derive(Debug, Error)]
pub enum RError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when the Numerov recursion produces a non-finite value,
    /// usually because its denominator vanished at some grid point.
    #[error("numerov recursion produced a non-finite value at grid point {0}")]
    Degenerate(usize),

    /// Returned from the Klein–Gordon integration path, which is declared but
    /// not implemented.
    #[error("the Klein-Gordon integration path is not implemented")]
    Relativistic,

    /// [`BracketError`]
    #[error("bracket error: {0}")]
    Bracket(#[from] BracketError),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`QuadError`]
    #[error("quadrature error: {0}")]
    Quad(#[from] QuadError),
}

impl RError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }
}
