/// Stochastic mechanics: seeded draws for optional noise systems.
/// Callers own the `WyRand`; nothing here seeds from the environment.
use bevy_prng::WyRand;
use rand_core::RngCore;

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn uniform01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Gaussian(0,1) via Box–Muller.
#[inline]
pub fn gaussian01(rng: &mut WyRand) -> f64 {
    // 1 - u keeps the log argument in (0, 1].
    let u1 = 1.0 - uniform01(rng);
    let u2 = uniform01(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let t = 2.0 * std::f64::consts::PI * u2;
    r * t.cos()
}

/// Additive jitter N(0, sigma²); zero sigma draws nothing.
#[inline]
pub fn jitter(rng: &mut WyRand, sigma: f64) -> f64 {
    if sigma > 0.0 { gaussian01(rng) * sigma } else { 0.0 }
}
