//! Functions to compute bound-state solutions of the radial, two-body,
//! time-independent Schrödinger equation for central potentials.

use std::cmp;
use ndarray as nd;
use crate::{
    DEF_EPSILON,
    DEF_MAXITERS,
    error::{ BracketError, RError },
    grid::RadialGrid,
    potential::Potential,
    units,
    utils::{ rms_radius, sph_harm_theta0, wf_normalized },
};

pub type RResult<T> = Result<T, RError>;

// progress reports are emitted every this many search iterations
const LOG_EVERY: usize = 100;

/// A single solution of the radial equation at a fixed (trial or converged)
/// energy.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself. Both wavefunctions are normalized to
/// `∫ q(r)² dr = 1` on construction and the whole record is immutable
/// afterwards.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy (MeV).
    pub energy: f64,
    /// Radial level tag; feeds only the validation diagnostic.
    pub n: u32,
    /// Orbital angular momentum quantum number.
    pub l: u32,
    /// Magnetic quantum number (only `m = 0` is produced).
    pub m: i32,
    /// Radial grid the solution was integrated on.
    pub grid: RadialGrid,
    /// Normalized reduced wavefunction `u(r)`.
    pub u: nd::Array1<f64>,
    /// Normalized full wavefunction `ψ(r) = Y_l0(0) u(r)/r`.
    pub wf: nd::Array1<f64>,
    /// Asymptotic amplitude `|u|` at the outermost grid point.
    pub tail: f64,
    /// Root-mean-square radius `√∫ r² u(r)² dr` (fm).
    pub rms_radius: f64,
}

impl Solution {
    /// Compare two `Solution`s by their asymptotic tail amplitude, the
    /// boundary-decay proxy for "closer to a true bound state".
    pub fn cmp_tail(&self, other: &Self) -> Option<cmp::Ordering> {
        self.tail.partial_cmp(&other.tail)
    }

    /// Relative deviation of the energy from the hydrogen-like reference
    /// `-Ry/n²`.
    ///
    /// Purely informational; never used for control flow.
    pub fn validation_error(&self, ry: f64) -> f64 {
        (1.0 - self.energy / (-ry / f64::from(self.n * self.n))).abs()
    }
}

#[derive(Copy, Clone, Debug)]
struct Window(f64, f64);

impl Window {
    fn push(&mut self, val: f64) { self.0 = self.1; self.1 = val; }
}

/// Perform a naive Numerov integration outward from the origin for a fixed
/// trial energy.
///
/// The driving function is `g(r) = (2μ/ħc²)(E - V(r)) - l(l+1)/r²` with
/// `μ = mₐm_b/(mₐ + m_b)`, and the integration seeds the regular solution
/// `u(r₀) = 0`, `u(r₁) = h^(l+1)`. The level tag `n` rides along into the
/// returned [`Solution`]; it does not enter the integration.
///
/// The energy may be any real value; negative energies are the physically
/// relevant bound-state regime. A vanishing recursion denominator or any
/// other non-finite propagated value is surfaced as
/// [`RError::Degenerate`] rather than packaged into a `Solution`.
pub fn integrate<P>(
    energy: f64,
    n: u32,
    l: u32,
    potential: &P,
    grid: &RadialGrid,
    mass_a: f64,
    mass_b: f64,
) -> RResult<Solution>
where P: Potential
{
    let reduced_mass = mass_a * mass_b / (mass_a + mass_b);
    let ll = f64::from(l * (l + 1));
    let c0 = 2.0 * reduced_mass / units::hbarc.powi(2);
    let g = |r: f64| c0 * (energy - potential.eval(r)) - ll / r.powi(2);

    let r = grid.get_r();
    let h = grid.get_dr();
    let N = grid.len();
    let a = h.powi(2) / 12.0;

    let mut u: nd::Array1<f64> = nd::Array1::zeros(N);
    u[1] = h.powi(l as i32 + 1);
    let mut uprev = Window(0.0, u[1]);
    let mut Tprev = Window(a * g(r[0]), a * g(r[1]));
    for i in 1..N - 1 {
        let Tnext = a * g(r[i + 1]);
        let unext
            = ((2.0 - 10.0 * Tprev.1) * uprev.1 - (1.0 + Tprev.0) * uprev.0)
            / (1.0 + Tnext);
        u[i + 1] = unext;
        uprev.push(unext);
        Tprev.push(Tnext);
    }
    if let Some(i) = u.iter().position(|uk| !uk.is_finite()) {
        return Err(RError::Degenerate(i));
    }

    let Y = sph_harm_theta0(l);
    let wf_raw: nd::Array1<f64>
        = u.iter().zip(r).map(|(uk, rk)| Y * uk / rk).collect();
    let u = wf_normalized(&u, h)?;
    let wf = wf_normalized(&wf_raw, h)?;
    let tail = u[N - 1].abs();
    let rms = rms_radius(&u, r, h)?;
    Ok(Solution {
        energy,
        n,
        l,
        m: 0,
        grid: grid.clone(),
        u,
        wf,
        tail,
        rms_radius: rms,
    })
}

/// Radial equation selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Equation {
    /// Non-relativistic Schrödinger equation.
    Schrodinger,
    /// Relativistic Klein–Gordon equation; declared for interface parity but
    /// not implemented.
    KleinGordon,
}

impl Equation {
    /// Return `true` if `self` is `Schrodinger`.
    pub fn is_schrodinger(&self) -> bool {
        matches!(self, Self::Schrodinger)
    }

    /// Return `true` if `self` is `KleinGordon`.
    pub fn is_klein_gordon(&self) -> bool {
        matches!(self, Self::KleinGordon)
    }
}

/// Radial Klein–Gordon integration.
///
/// Not implemented; always returns [`RError::Relativistic`] rather than a
/// silently empty wavefunction.
pub fn integrate_kg<P>(
    _energy: f64,
    _n: u32,
    _l: u32,
    _potential: &P,
    _grid: &RadialGrid,
    _mass_a: f64,
    _mass_b: f64,
) -> RResult<Solution>
where P: Potential
{
    Err(RError::Relativistic)
}

/// Master integration function for both [equations][Equation].
pub fn integrate_eq<P>(
    eq: Equation,
    energy: f64,
    n: u32,
    l: u32,
    potential: &P,
    grid: &RadialGrid,
    mass_a: f64,
    mass_b: f64,
) -> RResult<Solution>
where P: Potential
{
    match eq {
        Equation::Schrodinger => {
            integrate(energy, n, l, potential, grid, mass_a, mass_b)
        },
        Equation::KleinGordon => {
            integrate_kg(energy, n, l, potential, grid, mass_a, mass_b)
        },
    }
}

/// A single step of the bound-state search.
#[derive(Copy, Clone, Debug)]
pub struct SearchStep {
    /// 1-based iteration count.
    pub iteration: usize,
    /// Midpoint trial energy (MeV).
    pub energy: f64,
    /// Asymptotic tail amplitude of the midpoint solution.
    pub tail: f64,
}

/// Receives progress reports from [`search_observed`].
///
/// The solver holds no global logging state; all reporting flows through an
/// injected implementation of this trait.
pub trait Observe {
    /// Called every 100 iterations with the latest search step.
    fn progress(&mut self, step: &SearchStep);

    /// Called once if the search stops on its iteration cap instead of its
    /// convergence bound.
    fn non_convergence(&mut self, step: &SearchStep);
}

/// Silences all search reporting.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullObserver;

impl Observe for NullObserver {
    fn progress(&mut self, _: &SearchStep) {}

    fn non_convergence(&mut self, _: &SearchStep) {}
}

/// Forwards search reporting to the [`log`] facade at `info`/`warn` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl Observe for LogObserver {
    fn progress(&mut self, step: &SearchStep) {
        log::info!(
            "iteration {}, at_infinity {:.3e}, energy {:.6e}",
            step.iteration, step.tail, step.energy,
        );
    }

    fn non_convergence(&mut self, step: &SearchStep) {
        log::warn!(
            "max iterations reached at iteration {}, energy {:.6e}",
            step.iteration, step.energy,
        );
    }
}

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl Bounds<f64> {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }
}

/// The outcome of a bound-state search.
#[derive(Clone, Debug)]
pub struct Search {
    /// Best solution found; the last midpoint solution when `converged`.
    pub solution: Solution,
    /// Whether the convergence bound was met before the iteration cap.
    pub converged: bool,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final energy bracket.
    pub bracket: (f64, f64),
    /// Energy/tail record of every iteration.
    pub history: Vec<SearchStep>,
}

/// Find a bound state of a potential by bisection on the asymptotic tail
/// amplitude of trial solutions.
///
/// The caller supplies an energy bracket `bounds = (min, max)` expected to
/// contain (or closely flank) the eigenvalue. On every step the bracket
/// midpoint is integrated and becomes the current solution; then whichever
/// boundary's solution has the *larger* tail amplitude is moved halfway
/// toward the midpoint and re-integrated. Note that this moves only one
/// boundary per step, by a quarter of the bracket: it is a heuristic
/// shooting rule, not a sign-change bisection, and it can settle on a
/// spurious energy when the bracket is poorly chosen. The returned
/// [`Search`] carries the full iteration history so callers can audit
/// convergence.
///
/// Iteration stops when the energy moves by at most `epsilon` between
/// steps. Exhausting `maxiters` is recoverable: the observer's
/// [`non_convergence`][Observe::non_convergence] hook fires and the best
/// solution so far is returned with `converged = false`.
///
/// Fails fast with [`BracketError`] when `bounds.0 >= bounds.1`, before any
/// integration is attempted.
pub fn search_observed<P, O>(
    potential: &P,
    grid: &RadialGrid,
    mass_a: f64,
    mass_b: f64,
    n: u32,
    l: u32,
    bounds: (f64, f64),
    epsilon: f64,
    maxiters: usize,
    observer: &mut O,
) -> RResult<Search>
where
    P: Potential,
    O: Observe,
{
    BracketError::check(bounds.0, bounds.1)?;
    RError::check_epsilon(epsilon)?;
    RError::check_maxiters(maxiters)?;

    let mut Eb = Bounds(bounds.0, bounds.1);
    let mut Sb = Bounds(
        integrate(Eb.0, n, l, potential, grid, mass_a, mass_b)?,
        integrate(Eb.1, n, l, potential, grid, mass_a, mass_b)?,
    );
    let mut solution
        = if matches!(Sb.1.cmp_tail(&Sb.0), Some(cmp::Ordering::Less)) {
            Sb.1.clone()
        } else {
            Sb.0.clone()
        };

    let mut history: Vec<SearchStep> = Vec::new();
    let mut previous_energy = f64::INFINITY;
    let mut iterations: usize = 0;
    let mut converged = true;
    loop {
        if (previous_energy - solution.energy).abs() <= epsilon { break; }
        if iterations >= maxiters {
            converged = false;
            observer.non_convergence(&SearchStep {
                iteration: iterations,
                energy: solution.energy,
                tail: solution.tail,
            });
            break;
        }
        iterations += 1;

        let E = Eb.midpoint();
        previous_energy = solution.energy;
        solution = integrate(E, n, l, potential, grid, mass_a, mass_b)?;
        // move the boundary whose solution decays worse
        if Sb.1.tail < Sb.0.tail {
            Eb.0 = (Eb.0 + E) / 2.0;
            Sb.0 = integrate(Eb.0, n, l, potential, grid, mass_a, mass_b)?;
        } else {
            Eb.1 = (Eb.1 + E) / 2.0;
            Sb.1 = integrate(Eb.1, n, l, potential, grid, mass_a, mass_b)?;
        }

        let step = SearchStep {
            iteration: iterations,
            energy: solution.energy,
            tail: solution.tail,
        };
        history.push(step);
        if iterations % LOG_EVERY == 0 { observer.progress(&step); }
    }
    Ok(Search {
        solution,
        converged,
        iterations,
        bracket: (Eb.0, Eb.1),
        history,
    })
}

/// Like [`search_observed`], with `epsilon` and `maxiters` defaulting to
/// `1e-6` and `100` and reporting sent through a [`LogObserver`].
pub fn search<P>(
    potential: &P,
    grid: &RadialGrid,
    mass_a: f64,
    mass_b: f64,
    n: u32,
    l: u32,
    bounds: (f64, f64),
    epsilon: Option<f64>,
    maxiters: Option<usize>,
) -> RResult<Search>
where P: Potential
{
    search_observed(
        potential,
        grid,
        mass_a,
        mass_b,
        n,
        l,
        bounds,
        epsilon.unwrap_or(DEF_EPSILON),
        maxiters.unwrap_or(DEF_MAXITERS),
        &mut LogObserver,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::{ potential::PointCoulomb, utils::wf_norm };

    fn pionic_grid() -> RadialGrid {
        let uu = units::CoulombScales::new(units::m_pion, units::m_c12, units::z_c);
        RadialGrid::new_linspace(1e-6 * uu.a, 20.0 * uu.a, 2001).unwrap()
    }

    #[test]
    fn integrate_produces_normalized_regular_solution() {
        let uu = units::CoulombScales::new(units::m_pion, units::m_c12, units::z_c);
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = pionic_grid();
        let sol
            = integrate(-uu.ry, 1, 0, &V, &grid, units::m_pion, units::m_c12)
            .unwrap();
        assert_eq!(sol.u.len(), grid.len());
        assert_eq!(sol.wf.len(), grid.len());
        assert_eq!(sol.u[0], 0.0);
        assert_abs_diff_eq!(
            wf_norm(&sol.u, grid.get_dr()).unwrap(),
            1.0,
            epsilon = 1e-9,
        );
        assert_abs_diff_eq!(
            wf_norm(&sol.wf, grid.get_dr()).unwrap(),
            1.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn integrate_is_deterministic() {
        let uu = units::CoulombScales::new(units::m_pion, units::m_c12, units::z_c);
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = pionic_grid();
        let a = integrate(-uu.ry, 1, 0, &V, &grid, units::m_pion, units::m_c12)
            .unwrap();
        let b = integrate(-uu.ry, 1, 0, &V, &grid, units::m_pion, units::m_c12)
            .unwrap();
        assert_eq!(a.energy, b.energy);
        assert_eq!(a.tail, b.tail);
        assert_eq!(a.u, b.u);
    }

    #[test]
    fn search_rejects_inverted_brackets() {
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = pionic_grid();
        let res = search(
            &V, &grid, units::m_pion, units::m_c12, 1, 0,
            (-0.1, -0.2), None, None,
        );
        assert!(matches!(res, Err(RError::Bracket(_))));
    }

    #[test]
    fn search_rejects_bad_parameters() {
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = pionic_grid();
        let res = search(
            &V, &grid, units::m_pion, units::m_c12, 1, 0,
            (-0.2, -0.1), Some(-1e-6), None,
        );
        assert!(matches!(res, Err(RError::BadEpsilon(_))));
        let res = search(
            &V, &grid, units::m_pion, units::m_c12, 1, 0,
            (-0.2, -0.1), None, Some(0),
        );
        assert!(matches!(res, Err(RError::BadMaxiters(0))));
    }

    #[test]
    fn klein_gordon_path_is_unimplemented() {
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = pionic_grid();
        assert!(Equation::KleinGordon.is_klein_gordon());
        let res = integrate_eq(
            Equation::KleinGordon,
            -0.1, 1, 0, &V, &grid, units::m_pion, units::m_c12,
        );
        assert!(matches!(res, Err(RError::Relativistic)));
    }

    struct Recorder {
        steps: Vec<SearchStep>,
        warned: usize,
    }

    impl Observe for Recorder {
        fn progress(&mut self, step: &SearchStep) {
            self.steps.push(*step);
        }

        fn non_convergence(&mut self, _: &SearchStep) {
            self.warned += 1;
        }
    }

    #[test]
    fn exhausted_iteration_cap_is_recoverable() {
        let uu = units::CoulombScales::new(units::m_pion, units::m_c12, units::z_c);
        let V = PointCoulomb::for_charge(units::z_c);
        let grid = pionic_grid();
        let mut rec = Recorder { steps: Vec::new(), warned: 0 };
        let found = search_observed(
            &V, &grid, units::m_pion, units::m_c12, 1, 0,
            (-1.1 * uu.ry, -0.8 * uu.ry), 1e-15, 3, &mut rec,
        ).unwrap();
        assert!(!found.converged);
        assert_eq!(found.iterations, 3);
        assert_eq!(found.history.len(), 3);
        assert_eq!(rec.warned, 1);
        assert!(found.solution.energy.is_finite());
    }
}
