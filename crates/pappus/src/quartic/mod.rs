//! The fixed quartic family and its simultaneous root solver.
//!
//! Purpose
//! - Evaluate p(x) = x⁴ + m·x³ + m²·x² + m³·x + m⁴ for a single complex
//!   parameter m, and find all four roots at once by Durand–Kerner iteration.
//! - Keep the surface minimal: one evaluator, one solver, one config struct
//!   centralizing the iteration cap and tolerances.
//!
//! Since (x − m)·p(x) = x⁵ − m⁵, the true roots are m times the primitive
//! fifth roots of unity. The solver does not exploit this identity, but the
//! test suite does.
//!
//! Code cross-refs: `incidence::construct` consumes the solver output.

mod eval;
mod solver;

pub use eval::eval_quartic;
pub use solver::{durand_kerner, QuarticRoots, SolverCfg, DEGREE};

#[cfg(test)]
mod tests;
