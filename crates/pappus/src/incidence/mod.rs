//! Planar incidence construction on quartic roots.
//!
//! Purpose
//! - Identify the four roots with points of the real plane, assign the fixed
//!   overlapping roles (A1,B1,C1) = roots[0,1,2] and (A2,B2,C2) =
//!   roots[1,2,3], intersect the cross-pair lines, and test the three
//!   intersections P, Q, R for collinearity (the Pappus hexagon pairing).
//! - Keep the geometry explicit and eps-aware: parallel pairs produce absent
//!   points, never errors, and the verdict exists only when all three points
//!   do.
//!
//! Code cross-refs: `line::{Line, collinearity_det}`,
//! `construction::{incidence_from_triples, construct}`,
//! `quartic::durand_kerner`.

mod construction;
mod line;

pub use construction::{
    construct, construct_with_defaults, incidence_construction, incidence_from_triples,
    Construction, Incidence, ROLES_ONE, ROLES_TWO,
};
pub use line::{collinearity_det, GeomCfg, Line};
