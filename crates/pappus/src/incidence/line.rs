//! Implicit planar lines and the collinearity determinant.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Parallelism threshold for the 2×2 intersection determinant.
    pub eps_det: f64,
    /// Collinearity threshold on the signed twice-area of (P, Q, R). Looser
    /// than the solver tolerance on purpose: the intersections amplify root
    /// error.
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_collinear: 1e-6,
        }
    }
}

/// Implicit line `a·x + b·y + c = 0`. Derived from its defining points and
/// never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through `p` and `q`: (a, b, c) = (p.y − q.y, q.x − p.x,
    /// p.x·q.y − q.x·p.y).
    ///
    /// Coincident points yield the zero line a = b = c = 0, which intersects
    /// nothing; callers must keep the two points distinct (not checked here).
    #[inline]
    pub fn through(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self {
            a: p.y - q.y,
            b: q.x - p.x,
            c: p.x * q.y - q.x * p.y,
        }
    }

    /// Signed residual `a·x + b·y + c` at `p`; zero on the line.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Unique intersection by Cramer's rule, or `None` when the lines are
    /// parallel or coincident (`|a1·b2 − a2·b1| < eps_det`).
    pub fn intersect(&self, other: &Line, eps_det: f64) -> Option<Vector2<f64>> {
        let d = self.a * other.b - other.a * self.b;
        if d.abs() < eps_det {
            return None;
        }
        let x = (self.b * other.c - other.b * self.c) / d;
        let y = (other.a * self.c - self.a * other.c) / d;
        Some(Vector2::new(x, y))
    }
}

/// Twice the signed area of the triangle (p, q, r); zero iff the three points
/// are collinear.
#[inline]
pub fn collinearity_det(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    p.x * (q.y - r.y) + q.x * (r.y - p.y) + r.x * (p.y - q.y)
}
