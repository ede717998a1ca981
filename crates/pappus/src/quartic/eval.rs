use nalgebra::Complex;

/// Evaluate p(x) = x⁴ + m·x³ + m²·x² + m³·x + m⁴.
///
/// Powers are built by successive multiplication (x² = x·x, x³ = x²·x,
/// x⁴ = x³·x, likewise for m) so the operation count per call is fixed.
/// Total over finite inputs; non-finite inputs propagate.
#[inline]
pub fn eval_quartic(x: Complex<f64>, m: Complex<f64>) -> Complex<f64> {
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    let m2 = m * m;
    let m3 = m2 * m;
    let m4 = m2 * m2;
    x4 + m * x3 + m2 * x2 + m3 * x + m4
}
