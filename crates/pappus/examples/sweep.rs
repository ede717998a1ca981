//! Sweep the parameter angle over one revolution and print diagnostics.
//!
//! Purpose
//! - Show the intended call pattern for hosts that animate m = R·(cos θ,
//!   sin θ): the host owns θ and the step policy, the core stays a pure
//!   function of m.
//! - Give a quick eyeball check of convergence quality (iterations and final
//!   correction) across the circle |m| = R.

use pappus::incidence::construct_with_defaults;
use pappus::params::polar;

fn main() {
    let mag = 1.0;
    let steps = 32;
    println!("sweep |m| = {mag}, {steps} steps");
    for k in 0..steps {
        let angle = std::f64::consts::TAU * (k as f64) / (steps as f64);
        let m = polar(mag, angle);
        let out = construct_with_defaults(m);
        let present = out
            .incidence
            .points
            .iter()
            .filter(|p| p.is_some())
            .count();
        let verdict = match (out.incidence.det, out.incidence.collinear) {
            (Some(det), Some(true)) => format!("collinear (det = {det:.3e})"),
            (Some(det), _) => format!("not collinear (det = {det:.3e})"),
            _ => "verdict absent".to_string(),
        };
        println!(
            "θ = {angle:6.4}  m = {:+.4}{:+.4}i  iters = {:3}  step = {:.2e}  points = {present}/3  {verdict}",
            m.re, m.im, out.roots.iterations, out.roots.last_step,
        );
    }
}
