//! Golden-section search for one-dimensional unimodal minimization.

/// 1/φ = (√5 − 1)/2.
const INVPHI: f64 = 0.618_033_988_749_894_8;
/// 1/φ² = (3 − √5)/2.
const INVPHI2: f64 = 0.381_966_011_250_105_1;

/// Minimize `f` over `[a, b]`, assuming a single minimum in the interval.
///
/// Pre: `a <= b`, `f` is side-effect free.
/// Post: returns the midpoint of a final bracket of width `<= tol`.
///
/// `tol` is floored at `f64::EPSILON * max(|b - a|, 1)`; a zero, negative or
/// NaN tolerance searches down to that resolution instead of looping forever.
///
/// If `b - a <= tol` the midpoint is returned without evaluating `f`.
/// Otherwise the step count is fixed up front,
/// `n = ceil(ln(tol / (b - a)) / ln(1/φ))`, and exactly `n - 1` narrowing
/// steps run. One interior value is reused per step, so `f` is evaluated
/// `n + 1` times in total.
pub fn golden_section_search<F>(f: F, a: f64, b: f64, tol: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = (a, b);
    let mut h = b - a;
    let tol = tol.max(f64::EPSILON * h.abs().max(1.0));
    if h <= tol {
        return 0.5 * (a + b);
    }

    let n = ((tol / h).ln() / INVPHI.ln()).ceil() as i64;

    let mut c = a + INVPHI2 * h;
    let mut d = a + INVPHI * h;
    let mut yc = f(c);
    let mut yd = f(d);

    for _ in 0..(n - 1) {
        h *= INVPHI;
        if yc < yd {
            b = d;
            d = c;
            yd = yc;
            c = a + INVPHI2 * h;
            yc = f(c);
        } else {
            a = c;
            c = d;
            yc = yd;
            d = a + INVPHI * h;
            yd = f(d);
        }
    }

    if yc < yd {
        0.5 * (a + d)
    } else {
        0.5 * (c + b)
    }
}
