/// Learning-curve and investment mechanics for a single country.

/// Cost after one round of learning. Only moves when the global adoption
/// fraction has reached `threshold`; never increases and never goes negative.
#[inline]
pub fn learned_cost(cost: f64, fraction: f64, threshold: f64, rate: f64) -> f64 {
    let cost = cost.max(0.0);
    if fraction >= threshold {
        (cost * (1.0 - rate.clamp(0.0, 1.0) * fraction.clamp(0.0, 1.0))).max(0.0)
    } else {
        cost
    }
}

/// Investment made this round: rate * income * intensity, never negative.
#[inline]
pub fn investment(income: f64, intensity: f64, rate: f64) -> f64 {
    (rate.max(0.0) * income.max(0.0) * intensity.clamp(0.0, 1.0)).max(0.0)
}

/// Cost as a share of income (poorer countries bear more).
#[inline]
pub fn effective_cost(cost: f64, income: f64) -> f64 {
    cost.max(0.0) / income.max(1e-9)
}
