//! Cross-pair intersections of two labeled point triples and the collinearity
//! verdict on them.

use nalgebra::{Complex, Vector2};

use super::line::{collinearity_det, GeomCfg, Line};
use crate::planar;
use crate::quartic::{durand_kerner, QuarticRoots, SolverCfg};

/// Role indices on the first carrier: (A1, B1, C1) = roots[0], roots[1],
/// roots[2].
pub const ROLES_ONE: [usize; 3] = [0, 1, 2];
/// Role indices on the second carrier: (A2, B2, C2) = roots[1], roots[2],
/// roots[3]. Overlaps [`ROLES_ONE`]; the pair is fixed, not configurable,
/// since a different assignment tests a different incidence instance.
pub const ROLES_TWO: [usize; 3] = [1, 2, 3];

/// Incidence outcome for one pair of triples.
#[derive(Clone, Copy, Debug)]
pub struct Incidence {
    /// Carrier lines through (A1, C1) and (A2, C2).
    pub carriers: [Line; 2],
    /// The cross-pair intersections P, Q, R; `None` where the paired lines
    /// are parallel or degenerate.
    pub points: [Option<Vector2<f64>>; 3],
    /// Line through P and Q, present only when all three points exist.
    pub pappus_line: Option<Line>,
    /// Signed twice-area of (P, Q, R), present only when all three exist.
    pub det: Option<f64>,
    /// `|det| < eps_collinear`; present exactly when `det` is.
    pub collinear: Option<bool>,
    /// Tolerance the verdict used.
    pub eps_collinear: f64,
}

/// Full construction record for one parameter value.
#[derive(Clone, Copy, Debug)]
pub struct Construction {
    /// Solver output, convergence diagnostics included.
    pub roots: QuarticRoots,
    /// Incidence outcome under the fixed role mapping.
    pub incidence: Incidence,
}

/// Pair the triples (A1,B1,C1) and (A2,B2,C2) hexagon-style and intersect:
/// P = A1B2 ∩ A2B1, Q = B1C2 ∩ B2C1, R = C1A2 ∩ C2A1.
///
/// When all three intersections exist, the signed twice-area of (P, Q, R)
/// and the collinearity verdict are filled in; with fewer points both stay
/// `None`, a legitimate terminal outcome rather than an error.
pub fn incidence_from_triples(
    first: [Vector2<f64>; 3],
    second: [Vector2<f64>; 3],
    cfg: GeomCfg,
) -> Incidence {
    let [a1, b1, c1] = first;
    let [a2, b2, c2] = second;
    let carriers = [Line::through(a1, c1), Line::through(a2, c2)];
    let p = Line::through(a1, b2).intersect(&Line::through(a2, b1), cfg.eps_det);
    let q = Line::through(b1, c2).intersect(&Line::through(b2, c1), cfg.eps_det);
    let r = Line::through(c1, a2).intersect(&Line::through(c2, a1), cfg.eps_det);
    let (pappus_line, det, collinear) = match (p, q, r) {
        (Some(p), Some(q), Some(r)) => {
            let det = collinearity_det(p, q, r);
            (
                Some(Line::through(p, q)),
                Some(det),
                Some(det.abs() < cfg.eps_collinear),
            )
        }
        _ => (None, None, None),
    };
    Incidence {
        carriers,
        points: [p, q, r],
        pappus_line,
        det,
        collinear,
        eps_collinear: cfg.eps_collinear,
    }
}

/// Apply the fixed role mapping ([`ROLES_ONE`], [`ROLES_TWO`]) to solver
/// output and run the construction.
///
/// The overlap makes A2 = B1 and B2 = C1, so the line pairs defining P and Q
/// each contain a zero line and those two slots are `None` for every root
/// set; only the R slot can carry a point. The verdict is therefore always
/// absent under this mapping. See DESIGN.md for the record of this behavior.
pub fn incidence_construction(roots: &QuarticRoots, cfg: GeomCfg) -> Incidence {
    let pts: [Vector2<f64>; 4] = [
        planar(roots.roots[0]),
        planar(roots.roots[1]),
        planar(roots.roots[2]),
        planar(roots.roots[3]),
    ];
    let first = [pts[ROLES_ONE[0]], pts[ROLES_ONE[1]], pts[ROLES_ONE[2]]];
    let second = [pts[ROLES_TWO[0]], pts[ROLES_TWO[1]], pts[ROLES_TWO[2]]];
    incidence_from_triples(first, second, cfg)
}

/// Full pipeline for one parameter: solve the quartic, map roots to planar
/// points under the fixed roles, intersect, and test collinearity.
pub fn construct(m: Complex<f64>, solver: SolverCfg, geom: GeomCfg) -> Construction {
    let roots = durand_kerner(m, solver);
    let incidence = incidence_construction(&roots, geom);
    Construction { roots, incidence }
}

/// [`construct`] with default solver and geometry configuration.
#[inline]
pub fn construct_with_defaults(m: Complex<f64>) -> Construction {
    construct(m, SolverCfg::default(), GeomCfg::default())
}
