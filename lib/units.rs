#![allow(non_upper_case_globals)]

//! Physical constants and derived Coulombic scales for two-body bound-state
//! problems, expressed in MeV/fm units throughout.
//!
//! Concrete physical constants are taken from NIST/PDG.

/// reduced Planck constant times the speed of light (MeV fm)
pub const hbarc: f64 = 197.3269804;
//                 +/- 0 (exact)

/// fine structure constant
pub const alpha: f64 = 7.2973525693e-3;
//                 +/- 0.0000000011e-3

/// charged pion mass (MeV)
pub const m_pion: f64 = 139.57039;
//                  +/- 0.00018

/// ¹²C nuclear mass (MeV) = 12 u - 6 mₑ
pub const m_c12: f64 = 11174.8632;
//                 +/- 0.0000017

/// carbon charge number
pub const z_c: u32 = 6;

/// ¹²C uniform-density radius (fm) = r₀ A^(1/3), r₀ = 1.2 fm
pub const r_c12: f64 = 2.7473;

/// A collection of Coulombic scale parameters derived from a particle pair
/// and a central charge.
///
/// Constructor methods produce the reduced mass together with the
/// hydrogen-like energy and length scales of the pair, all in MeV/fm units.
/// These are the reference values used by the validation diagnostics; the
/// solver itself never consumes them.
#[derive(Copy, Clone, Debug)]
pub struct CoulombScales {
    /// Reduced mass (MeV).
    pub mu: f64,
    /// Rydberg-like energy scale (MeV).
    pub ry: f64,
    /// Bohr-like length scale (fm).
    pub a: f64,
}

impl CoulombScales {
    /// Construct from the two constituent masses (MeV) and the central charge
    /// number.
    pub fn new(mass_a: f64, mass_b: f64, z: u32) -> Self {
        let mu = mass_a * mass_b / (mass_a + mass_b);
        let za = f64::from(z) * alpha;
        let ry = mu * za.powi(2) / 2.0;
        let a = hbarc / (mu * za);
        Self { mu, ry, a }
    }

    /// Hydrogen-like reference energy `-Ry/n²` (MeV) for principal quantum
    /// number `n`.
    pub fn level(&self, n: u32) -> f64 {
        -self.ry / f64::from(n * n)
    }
}
