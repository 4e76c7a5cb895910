#![allow(non_snake_case)]

use rspace::{
    grid::RadialGrid,
    perturb::estimate_shift,
    potential::{ PointCoulomb, Potential, SmearedCoulomb },
    solve::{ self, Observe, SearchStep },
    units,
};

// find the ground state of the π⁻–¹²C system, then compare the point-charge
// eigenvalue against a charge smeared over the nuclear volume

struct Stdout;

impl Observe for Stdout {
    fn progress(&mut self, step: &SearchStep) {
        println!(
            "iteration {}, at_infinity {:.3e}, energy {:.6e}",
            step.iteration, step.tail, step.energy,
        );
    }

    fn non_convergence(&mut self, step: &SearchStep) {
        println!(
            "WARNING: max iterations reached at iteration {}",
            step.iteration,
        );
    }
}

fn main() {
    let uu = units::CoulombScales::new(units::m_pion, units::m_c12, units::z_c);
    println!("\n\t Numerov solver for the pi-12C system:");
    println!("\n\t nucleus mass= {:.4} MeV", units::m_c12);
    println!("\t pion    mass= {:.5} MeV", units::m_pion);
    println!("\t reduced mass= {:.4} MeV\n", uu.mu);

    let grid = RadialGrid::new_linspace(1e-6 * uu.a, 20.0 * uu.a, 10_000)
        .unwrap();
    let point = PointCoulomb::for_charge(units::z_c);
    let found = solve::search_observed(
        &point, &grid, units::m_pion, units::m_c12, 1, 0,
        (-1.1 * uu.ry, -0.8 * uu.ry), 1e-8, 100, &mut Stdout,
    ).unwrap();
    let sol = &found.solution;
    println!(
        "point charge ground state ({} iterations{}):",
        found.iterations,
        if found.converged { "" } else { ", not converged" },
    );
    println!("  E [MeV]      = {:.6e}", sol.energy);
    println!("  E/Ry         = {:.6}", sol.energy / uu.ry);
    println!(
        "  r_rms [fm]   = {:7.3} ({:.4} a_B)",
        sol.rms_radius, sol.rms_radius / uu.a,
    );
    println!("  u(r_max)     = {:9.2e}", sol.tail);
    println!("  |1-E/(-Ry)|  = {:.3e}", sol.validation_error(uu.ry));

    let smeared = SmearedCoulomb::for_charge(units::z_c, units::r_c12);
    let found_s = solve::search_observed(
        &smeared, &grid, units::m_pion, units::m_c12, 1, 0,
        (-1.1 * uu.ry, -0.8 * uu.ry), 1e-8, 100, &mut Stdout,
    ).unwrap();
    let dE_exact = found_s.solution.energy - sol.energy;
    let delta = |r: f64| smeared.eval(r) - point.eval(r);
    let dE_pert = estimate_shift(sol, &delta).unwrap();
    println!("\nsmeared nuclear charge (R = {} fm):", units::r_c12);
    println!("  Es [MeV]             = {:.6e}", found_s.solution.energy);
    println!("  dE_exct [MeV]        = {:9.2e}", dE_exact);
    println!("  dE_prtb [MeV]        = {:9.2e}", dE_pert);
    println!("  |1-dE_prtb/dE_exct|  = {:.2e}", (1.0 - dE_pert / dE_exact).abs());
}
