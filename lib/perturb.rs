//! First-order perturbative energy shifts.

use ndarray as nd;
use crate::{
    error::QuadError,
    potential::Potential,
    solve::Solution,
    utils::simpson,
};

/// Estimate the energy shift produced by a potential perturbation as the
/// expectation value `∫ u(r)² ΔV(r) dr` of the potential difference in the
/// unperturbed state.
///
/// `basic` supplies the grid and the unit-normalized reduced wavefunction, so
/// the integral is the first-order perturbation-theory correction to
/// `basic.energy`. Pure; evaluates `delta` once per grid point.
pub fn estimate_shift<P>(basic: &Solution, delta: &P) -> Result<f64, QuadError>
where P: Potential
{
    let integrand: nd::Array1<f64>
        = basic.u.iter().zip(basic.grid.get_r())
        .map(|(uk, rk)| uk.powi(2) * delta.eval(*rk))
        .collect();
    simpson(&integrand, basic.grid.get_dr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::RadialGrid,
        potential::PointCoulomb,
        solve::integrate,
        units,
    };

    fn basic_solution() -> Solution {
        let uu = units::CoulombScales::new(units::m_pion, units::m_c12, units::z_c);
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = RadialGrid::new_linspace(1e-6 * uu.a, 20.0 * uu.a, 2001)
            .unwrap();
        integrate(-uu.ry, 1, 0, &V, &grid, units::m_pion, units::m_c12)
            .unwrap()
    }

    #[test]
    fn zero_perturbation_shifts_nothing() {
        let sol = basic_solution();
        let shift = estimate_shift(&sol, &|_: f64| 0.0).unwrap();
        assert_eq!(shift, 0.0);
    }

    #[test]
    fn constant_perturbation_shifts_by_itself() {
        // ∫ u² (c) dr = c for a unit-normalized state
        let sol = basic_solution();
        let shift = estimate_shift(&sol, &|_: f64| 0.25).unwrap();
        approx::assert_relative_eq!(shift, 0.25, max_relative = 1e-9);
    }
}
