/// Bounded response curves shared by the signal tracker and decision engine.

/// Saturating response: 1 - exp(-k * x), clamped to [0, 1].
#[inline]
pub fn saturate(x: f64, k: f64) -> f64 {
    (1.0 - (-k.max(0.0) * x.max(0.0)).exp()).clamp(0.0, 1.0)
}

/// Convex blend w * a + (1 - w) * b with w clamped to [0, 1].
#[inline]
pub fn blend(a: f64, b: f64, w: f64) -> f64 {
    let w = w.clamp(0.0, 1.0);
    w * a + (1.0 - w) * b
}

/// num / den, or `fallback` when the denominator carries no weight.
#[inline]
pub fn share(num: f64, den: f64, fallback: f64) -> f64 {
    if den > 0.0 && den.is_finite() {
        (num / den).clamp(0.0, 1.0)
    } else {
        fallback.clamp(0.0, 1.0)
    }
}
