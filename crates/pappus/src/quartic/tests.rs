use super::*;
use crate::params::{draw_param, ParamCfg, ReplayToken};
use nalgebra::Complex;
use proptest::prelude::*;

fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

#[test]
fn eval_matches_monomial_sum() {
    let x = c(0.7, -1.3);
    let m = c(-0.4, 0.9);
    let direct = x.powu(4) + m * x.powu(3) + m.powu(2) * x.powu(2) + m.powu(3) * x + m.powu(4);
    assert!((eval_quartic(x, m) - direct).norm() < 1e-9);
}

#[test]
fn eval_factors_the_fifth_power_difference() {
    // (x − m)·p(x) = x⁵ − m⁵ for this family.
    let x = c(1.2, 0.5);
    let m = c(0.3, -0.8);
    let lhs = (x - m) * eval_quartic(x, m);
    let rhs = x.powu(5) - m.powu(5);
    assert!((lhs - rhs).norm() < 1e-9);
}

#[test]
fn zero_parameter_collapses_all_roots_to_origin() {
    // p degenerates to x⁴; the quadruple root slows the iteration to a
    // linear contraction, which still lands well inside 200 passes.
    let out = durand_kerner(c(0.0, 0.0), SolverCfg::default());
    assert!(out.converged(SolverCfg::default().tol));
    for r in out.roots {
        assert!(r.norm() < 1e-9);
    }
}

#[test]
fn unit_parameter_yields_primitive_fifth_roots_of_unity() {
    let m = c(1.0, 0.0);
    let out = durand_kerner(m, SolverCfg::default());
    assert!(out.converged(SolverCfg::default().tol));
    for r in out.roots {
        assert!(eval_quartic(r, m).norm() < 1e-6);
        assert!((r.norm() - 1.0).abs() < 1e-6);
        assert!((r.powu(5) - c(1.0, 0.0)).norm() < 1e-6);
        // primitive: the root itself is not 1
        assert!((r - c(1.0, 0.0)).norm() > 0.5);
    }
}

#[test]
fn roots_are_the_parameter_times_fifth_roots_of_unity() {
    let m = c(0.8, 0.6);
    let out = durand_kerner(m, SolverCfg::default());
    let mut used = [false; 4];
    for r in out.roots {
        let k = (1..=4usize)
            .find(|&k| {
                let zeta = Complex::from_polar(1.0, std::f64::consts::TAU * k as f64 / 5.0);
                (r - m * zeta).norm() < 1e-6
            })
            .expect("root matches a scaled primitive fifth root of unity");
        assert!(!used[k - 1], "two estimates converged to the same root");
        used[k - 1] = true;
    }
}

#[test]
fn identical_inputs_give_bit_identical_roots() {
    let m = c(-0.6, 0.35);
    let cfg = SolverCfg::default();
    let a = durand_kerner(m, cfg);
    let b = durand_kerner(m, cfg);
    assert_eq!(a.iterations, b.iterations);
    for i in 0..DEGREE {
        assert_eq!(a.roots[i].re.to_bits(), b.roots[i].re.to_bits());
        assert_eq!(a.roots[i].im.to_bits(), b.roots[i].im.to_bits());
    }
}

#[test]
fn exhausted_cap_still_returns_four_values() {
    let m = c(0.9, -0.4);
    let out = durand_kerner(
        m,
        SolverCfg {
            max_iter: 2,
            ..SolverCfg::default()
        },
    );
    assert_eq!(out.iterations, 2);
    assert!(!out.converged(1e-12));
    for r in out.roots {
        assert!(r.re.is_finite() && r.im.is_finite());
    }
}

proptest! {
    #[test]
    fn eval_matches_horner_form(
        re in -2.0..2.0f64,
        im in -2.0..2.0f64,
        mre in -2.0..2.0f64,
        mim in -2.0..2.0f64,
    ) {
        let x = c(re, im);
        let m = c(mre, mim);
        let horner = (((x + m) * x + m.powu(2)) * x + m.powu(3)) * x + m.powu(4);
        prop_assert!((eval_quartic(x, m) - horner).norm() < 1e-9);
    }

    #[test]
    fn sampled_parameters_yield_small_residuals(seed in 0u64..(1 << 32), index in 0u64..1024) {
        let m = draw_param(ParamCfg::default(), ReplayToken { seed, index });
        let out = durand_kerner(m, SolverCfg::default());
        for r in out.roots {
            prop_assert!(eval_quartic(r, m).norm() < 1e-6);
        }
    }
}
