//! Durand–Kerner (Weierstrass) iteration specialized to the quartic family.

use nalgebra::Complex;

use super::eval::eval_quartic;

/// Number of simultaneous candidates; the family is degree-4 only.
pub const DEGREE: usize = 4;

/// Solver configuration (iteration cap and tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SolverCfg {
    /// Iteration cap; the sole resource bound of the solver.
    pub max_iter: usize,
    /// Early-exit threshold on the largest correction magnitude of a pass.
    pub tol: f64,
    /// Floor on the squared magnitude of the product-of-differences
    /// denominator; keeps corrections finite when candidates collide.
    pub eps_denom: f64,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            max_iter: 200,
            tol: 1e-12,
            eps_denom: 1e-18,
        }
    }
}

/// Solver output: four root estimates plus convergence diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct QuarticRoots {
    /// Root estimates in iteration order. Downstream role assignment is by
    /// index, so callers must not normalize or re-sort this array.
    pub roots: [Complex<f64>; DEGREE],
    /// Largest correction magnitude of the final pass (infinite when no pass
    /// ran, i.e. `max_iter == 0`).
    pub last_step: f64,
    /// Passes actually run.
    pub iterations: usize,
}

impl QuarticRoots {
    /// Whether the final pass moved every candidate by less than `tol`.
    #[inline]
    pub fn converged(&self, tol: f64) -> bool {
        self.last_step < tol
    }
}

/// All four roots of p(x) = x⁴ + m·x³ + m²·x² + m³·x + m⁴ by simultaneous
/// Newton-like corrections `delta_i = p(x_i) / Π_{j≠i}(x_i − x_j)`.
///
/// Candidates start on the circle of radius `1 + |Re m| + |Im m|` at angles
/// 2πk/4, k = 0..3. The radius heuristic encloses the true roots (modulus
/// |m|) for the parameter ranges of interest; it is a robustness choice, not
/// a guarantee. Each pass updates indices 0..3 sequentially, every update
/// reading the other candidates as they currently stand. The trajectory, and
/// therefore the output order, depends on that sweep order; the limit does
/// not.
///
/// Never fails: after `max_iter` passes the current estimates are returned
/// whether or not the largest correction dropped below `tol`. Callers can
/// check `QuarticRoots::converged` when they care.
pub fn durand_kerner(m: Complex<f64>, cfg: SolverCfg) -> QuarticRoots {
    let radius = 1.0 + m.re.abs() + m.im.abs();
    let mut roots = [Complex::new(0.0, 0.0); DEGREE];
    for (k, slot) in roots.iter_mut().enumerate() {
        let theta = std::f64::consts::TAU * (k as f64) / (DEGREE as f64);
        *slot = Complex::new(radius * theta.cos(), radius * theta.sin());
    }
    let mut moved = f64::INFINITY;
    let mut iterations = 0;
    for _ in 0..cfg.max_iter {
        moved = 0.0;
        for i in 0..DEGREE {
            let xi = roots[i];
            let pxi = eval_quartic(xi, m);
            let mut denom = Complex::new(1.0, 0.0);
            for (j, &xj) in roots.iter().enumerate() {
                if j != i {
                    denom *= xi - xj;
                }
            }
            // Colliding candidates make the denominator vanish; divide
            // through the conjugate with a floored squared magnitude so the
            // correction stays finite.
            let d2 = denom.norm_sqr();
            let delta = if d2 < cfg.eps_denom {
                pxi * denom.conj() / (d2 + cfg.eps_denom)
            } else {
                pxi / denom
            };
            roots[i] = xi - delta;
            moved = moved.max(delta.norm());
        }
        iterations += 1;
        if moved < cfg.tol {
            break;
        }
    }
    QuarticRoots {
        roots,
        last_step: moved,
        iterations,
    }
}
