//! Miscellaneous numerical tools: quadrature, wavefunction normalization, and
//! derived radial observables.

use std::f64::consts::PI;
use ndarray::{ self as nd, Ix1 };
use num_traits::Num;
use crate::{ error::QuadError, grid::RadialGrid };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner
        = y.slice(nd::s![1..n - 1]).iter().copied()
        .fold(A::zero(), A::add);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Integrate using the composite Simpson rule.
///
/// An even sample count leaves a single unpaired interval at the outer
/// boundary, which is closed with the trapezoidal rule.
pub fn simpson<S>(y: &nd::ArrayBase<S, Ix1>, dx: f64) -> Result<f64, QuadError>
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    if n < 3 { return Err(QuadError::TooShort(n)); }
    // largest odd sample count = even interval count
    let m = if n % 2 == 1 { n } else { n - 1 };
    let mut acc = y[0] + y[m - 1];
    for (k, yk) in y.iter().enumerate().take(m - 1).skip(1) {
        acc += if k % 2 == 1 { 4.0 * *yk } else { 2.0 * *yk };
    }
    let mut res = dx / 3.0 * acc;
    if m < n {
        res += trapz(&y.slice(nd::s![n - 2..n]), dx);
    }
    Ok(res)
}

/// Calculate the squared norm `∫ q(r)² dr` of a wavefunction.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dr: f64) -> Result<f64, QuadError>
where S: nd::Data<Elem = f64>
{
    simpson(&q.mapv(|qk| qk * qk), dr)
}

/// Return a normalized copy of a wavefunction, rescaled so that
/// `∫ q(r)² dr = 1`.
pub fn wf_normalized<S>(q: &nd::ArrayBase<S, Ix1>, dr: f64)
    -> Result<nd::Array1<f64>, QuadError>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm(q, dr)?;
    if !norm.is_finite() || norm <= 0.0 { return Err(QuadError::ZeroNorm); }
    let norm = norm.sqrt();
    Ok(q.mapv(|qk| qk / norm))
}

/// Renormalize a wavefunction in place.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dr: f64)
    -> Result<(), QuadError>
where S: nd::DataMut<Elem = f64>
{
    let norm = wf_norm(q, dr)?;
    if !norm.is_finite() || norm <= 0.0 { return Err(QuadError::ZeroNorm); }
    let norm = norm.sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
    Ok(())
}

/// Calculate the root-mean-square radius `√∫ r² u(r)² dr` of a normalized
/// reduced wavefunction.
pub fn rms_radius<S, T>(u: &nd::ArrayBase<S, Ix1>, r: &nd::ArrayBase<T, Ix1>, dr: f64)
    -> Result<f64, QuadError>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let integrand: nd::Array1<f64>
        = u.iter().zip(r)
        .map(|(uk, rk)| (rk * uk).powi(2))
        .collect();
    simpson(&integrand, dr).map(f64::sqrt)
}

/// The real spherical harmonic `Y_l0` evaluated on the polar axis,
/// `√((2l + 1)/4π)` (`P_l(1) = 1`).
pub fn sph_harm_theta0(l: u32) -> f64 {
    (f64::from(2 * l + 1) / (4.0 * PI)).sqrt()
}

/// Sample the closed-form hydrogen-like ground-state reduced wavefunction
/// `u(r) = 2 a^(-3/2) r e^(-r/a)` on a grid, renormalized over the grid's
/// finite extent.
pub fn coulomb_ground_u(grid: &RadialGrid, a: f64)
    -> Result<nd::Array1<f64>, QuadError>
{
    let c = 2.0 * a.powf(-1.5);
    let u: nd::Array1<f64>
        = grid.get_r().mapv(|rk| c * rk * (-rk / a).exp());
    wf_normalized(&u, grid.get_dr())
}
