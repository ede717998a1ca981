//! Quartic roots and the Pappus-style incidence construction built on them.
//!
//! Pipeline
//! - `quartic`: evaluate the fixed family p(x) = x⁴ + m·x³ + m²·x² + m³·x + m⁴
//!   and solve for all four roots at once (Durand–Kerner).
//! - `incidence`: identify roots with points of the real plane, intersect the
//!   cross-pair lines of two labeled triples, and test the three intersection
//!   points for collinearity.
//! - `params`: polar parameters m and reproducible draws for experiments.
//!
//! The crate is purely computational: no I/O, no clocks, no shared state.
//! Rendering and frame scheduling are callers' business; they consume the
//! `Construction` record and supply successive values of m. Repeated calls
//! with identical inputs are bit-identical, so invocations may run on any
//! thread without synchronization.
//!
//! Inputs are finite by caller contract. Non-finite m is not validated
//! against; NaN/Inf propagate into the outputs.

pub mod incidence;
pub mod params;
pub mod quartic;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use incidence::{construct, construct_with_defaults, Construction, GeomCfg, Incidence, Line};
pub use nalgebra::{Complex, Vector2 as Vec2};
pub use quartic::{durand_kerner, eval_quartic, QuarticRoots, SolverCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::incidence::{
        collinearity_det, construct, construct_with_defaults, incidence_construction,
        incidence_from_triples, Construction, GeomCfg, Incidence, Line,
    };
    pub use crate::params::{draw_param, polar, ParamCfg, ReplayToken};
    pub use crate::quartic::{durand_kerner, eval_quartic, QuarticRoots, SolverCfg};
    pub use crate::{from_planar, planar};
    pub use nalgebra::{Complex, Vector2 as Vec2};
}

/// Identify the complex value z = x + iy with the planar point (x, y).
#[inline]
pub fn planar(z: Complex<f64>) -> Vec2<f64> {
    Vec2::new(z.re, z.im)
}

/// Inverse of [`planar`].
#[inline]
pub fn from_planar(p: Vec2<f64>) -> Complex<f64> {
    Complex::new(p.x, p.y)
}
