//! Complex parameters in polar form, with reproducible draws.
//!
//! Purpose
//! - Callers drive the pipeline with m = mag·(cos angle, sin angle), usually
//!   advancing the angle themselves; `polar` is that one conversion.
//! - Benches and property tests want many parameters that are reproducible
//!   and indexable, so draws go through a replay token `(seed, index)` mixed
//!   into a single RNG rather than ambient randomness.

use nalgebra::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// m = mag·(cos angle, sin angle).
#[inline]
pub fn polar(mag: f64, angle: f64) -> Complex<f64> {
    Complex::new(mag * angle.cos(), mag * angle.sin())
}

/// Parameter draw configuration.
#[derive(Clone, Copy, Debug)]
pub struct ParamCfg {
    /// Magnitude range [lo, hi]; lo is clamped to 0, hi to lo.
    pub mag_lo: f64,
    pub mag_hi: f64,
    /// Random phase in [0, 2π)? Otherwise phase 0.
    pub random_phase: bool,
}

impl Default for ParamCfg {
    fn default() -> Self {
        Self {
            mag_lo: 0.25,
            mag_hi: 2.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one parameter m. Same `(cfg, tok)` always yields the same value.
pub fn draw_param(cfg: ParamCfg, tok: ReplayToken) -> Complex<f64> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.mag_lo.max(0.0);
    let hi = cfg.mag_hi.max(lo);
    let mag = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
    let angle = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    polar(mag, angle)
}
