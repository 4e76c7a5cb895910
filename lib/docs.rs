//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [The tail-amplitude search](#the-tail-amplitude-search)
//! - [Normalization and observables](#normalization-and-observables)
//! - [Perturbative energy shifts](#perturbative-energy-shifts)
//!
//! # Background
//! A pair of particles with masses *m*<sub>*a*</sub> and *m*<sub>*b*</sub>
//! bound by a central potential *V*(*r*) reduces to an effective one-body
//! problem for the reduced mass
//! ```text
//!      mₐ m_b
//! μ = --------
//!     mₐ + m_b
//! ```
//! Separating the total wavefunction into radial and angular components
//! *ψ*(*r*, *θ*, *φ*) = *R*(*r*) *Y*(*θ*, *φ*), with *Y* a spherical
//! harmonic, and switching focus to the reduced radial wavefunction
//! *u*(*r*) ≡ *r* *R*(*r*), the time-independent Schrödinger equation takes
//! the one-dimensional form
//! ```text
//!    ħ² ∂²u               l (l + 1) ħ²
//! - --- --- + V(r) u(r) + ------------ u(r) = E u(r)
//!   2 μ ∂r²                  2 μ r²
//! ```
//! or equivalently
//! ```text
//! ∂²u                        2 μ             l (l + 1)
//! --- = -g(r) u(r),   g(r) = --- (E - V(r)) - ---------
//! ∂r²                        ħ²                  r²
//! ```
//! Regularity at the origin demands *u*(0) = 0 with *u* ∝ *r*<sup>*l*+1</sup>
//! for small *r*; a bound state additionally demands that *u* decay as
//! *r* → ∞ for some *E* < 0. Solutions are computed on a uniform radial grid
//! (excluding the origin, where the centrifugal term diverges) via Numerov's
//! method[^1]. Assuming a discretization
//! ```text
//! r[i] = r₀ + i h, i ∊ {0, ..., N - 1}
//! u[i] = u(r[i])
//! g[i] = g(r[i])
//! ```
//! Numerov's method is a three-point numerical integration scheme,
//! ```text
//!      h²                         5 h²                h²
//! (1 + -- g[i + 1]) u[i + 1] = (2 - -- g[i]) u[i] - (1 + -- g[i - 1]) u[i - 1]
//!      12                           6                    12
//! ```
//! which has a local error term of only *O*(*h*⁶) (c.f. the more generally
//! used fourth-order Runge-Kutta scheme, which has a *O*(*h*⁴) error term)
//! and requires no matrix solve. Seeding `u[0] = 0`, `u[1] = h^(l+1)` fixes
//! the regular solution up to overall normalization; the recursion is then
//! defined everywhere the denominator 1 + (*h*²/12) *g*\[*i*+1\] does not
//! vanish.
//!
//! # Units
//! All quantities are carried in MeV/fm units: masses and energies in MeV,
//! radii in fm, with the single conversion constant *ħc* = 197.327 MeV fm.
//! In these units the driving function reads
//! ```text
//!        2 μc²               l (l + 1)
//! g(r) = ------ (E - V(r)) - ---------
//!        (ħc)²                   r²
//! ```
//! For an attractive Coulomb coupling κ = *Z* *α* *ħc* the natural scales of
//! the bound spectrum are the Bohr-like length and Rydberg-like energy
//! ```text
//!        ħc                μ (Z α)²            -Ry
//! a_B = ------ ,      Ry = -------- ,    E_n = ---
//!       μ Z α                  2                n²
//! ```
//! provided by [`units::CoulombScales`][crate::units::CoulombScales] and used
//! only for diagnostics, never by the integrator itself.
//!
//! # The tail-amplitude search
//! For an arbitrary trial energy the outward integration couples to the
//! exponentially *growing* solution in the classically forbidden region, so
//! |*u*(*r*<sub>max</sub>)| is generically large; it shrinks as the trial
//! energy approaches an eigenvalue. The bound-state search exploits this as
//! a shooting criterion: maintain an energy bracket, integrate both
//! boundaries and the midpoint, then move whichever boundary's solution has
//! the larger terminal amplitude halfway toward the midpoint. Each step
//! moves one boundary by a quarter of the bracket; iteration stops when the
//! midpoint energy moves less than a tolerance between steps.
//!
//! Unlike a classical bisection, no sign change is tracked, so convergence
//! to the eigenvalue is *heuristic*: brackets that contain no eigenvalue, or
//! more than one, can settle on a spurious energy. The search therefore
//! records its full energy/tail history for callers to audit, and reports
//! exhaustion of its iteration cap as a recoverable condition rather than
//! an error.
//!
//! # Normalization and observables
//! Wavefunctions are normalized so that ∫ *u*(*r*)² d*r* = 1, with the
//! integral evaluated by composite Simpson quadrature over the grid (an even
//! sample count closes the final interval with the trapezoidal rule). The
//! same quadrature yields the root-mean-square radius
//! ```text
//! r_rms = √( ∫ r² u(r)² dr )
//! ```
//! and the full wavefunction is recovered as *ψ* = (*u*/*r*) *Y*<sub>*l*
//! 0</sub>, where only the *m* = 0 projection is produced and the angular
//! factor is the constant √((2*l*+1)/4π) (the polar-axis value, since only
//! the radial shape is exercised).
//!
//! # Perturbative energy shifts
//! For a small change Δ*V* to the potential, first-order perturbation
//! theory[^2] estimates the change in a bound-state energy as the
//! expectation value of the perturbation in the unperturbed state,
//! ```text
//! ΔE ≈ ⟨u|ΔV|u⟩ = ∫ u(r)² ΔV(r) dr
//! ```
//! evaluated with the same quadrature. Comparing this estimate against the
//! exact difference of two independently converged eigenvalues (e.g. a point
//! charge versus a charge smeared over the nuclear volume) validates both
//! the perturbation and the solver.
//!
//! [^1]: B. Numerov, "Note on the numerical integration of d2x/dt2 = f(x,t)."
//! Astronomische Nachrichten **230** 19 (1927).
//!
//! [^2]: J. J. Sakurai and J. Napolitano, "Modern Quantum Mechanics," 2nd ed.,
//! ch. 5 (Addison-Wesley, 2011).
