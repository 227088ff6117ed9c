//! Global urgency / pressure tracking.
//!
//! [`GlobalSignal::observe`] is a pure function of the current round's
//! country states plus the prior signal (for the shortfall ratchet). It is
//! undefined for an empty slice; [`crate::Population`] guarantees that the
//! simulation never calls it with one.

use serde::Serialize;

use crate::country::CountryState;
use crate::mechanics::control;
use crate::simulation::SimConfig;

/// Aggregate world-state after a round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GlobalSignal {
    pub round: u32,
    /// Share of countries whose adoption is above the cutoff.
    pub adoption_fraction: f64,
    /// Influence-weighted adoption intensity (the threshold public good).
    pub weighted_adoption: f64,
    /// Vulnerability-weighted non-adoption.
    pub exposure: f64,
    pub threshold_met: bool,
    /// Rounds so far in which the threshold was not met. Never decreases.
    pub shortfall_rounds: u32,
    pub urgency: f64,
    pub pressure: f64,
}

impl GlobalSignal {
    /// Round-0 baseline: the initial states are measured, but urgency and
    /// pressure start at zero and no shortfall has accrued.
    pub fn neutral(states: &[CountryState], cfg: &SimConfig) -> Self {
        let m = measure(states, cfg);
        Self {
            round: 0,
            adoption_fraction: m.adoption_fraction,
            weighted_adoption: m.weighted_adoption,
            exposure: m.exposure,
            threshold_met: m.weighted_adoption >= cfg.threshold,
            shortfall_rounds: 0,
            urgency: 0.0,
            pressure: 0.0,
        }
    }

    /// Signal for `round` given the states that round produced.
    pub fn observe(
        states: &[CountryState],
        prior: &GlobalSignal,
        round: u32,
        cfg: &SimConfig,
    ) -> Self {
        debug_assert!(!states.is_empty(), "signal is undefined for zero countries");

        let m = measure(states, cfg);
        let threshold_met = m.weighted_adoption >= cfg.threshold;
        let shortfall_rounds = if threshold_met {
            prior.shortfall_rounds
        } else {
            prior.shortfall_rounds.saturating_add(1)
        };
        let urgency = urgency(m.exposure, shortfall_rounds, cfg);
        let pressure = pressure(urgency, m.adoption_fraction, cfg);

        Self {
            round,
            adoption_fraction: m.adoption_fraction,
            weighted_adoption: m.weighted_adoption,
            exposure: m.exposure,
            threshold_met,
            shortfall_rounds,
            urgency,
            pressure,
        }
    }
}

struct Measures {
    adoption_fraction: f64,
    weighted_adoption: f64,
    exposure: f64,
}

fn measure(states: &[CountryState], cfg: &SimConfig) -> Measures {
    let n = states.len().max(1) as f64;

    let adopters = states.iter().filter(|s| s.is_adopter(cfg.adoption_cutoff)).count() as f64;
    let adoption_fraction = (adopters / n).clamp(0.0, 1.0);

    let mean_intensity = states.iter().map(|s| s.adoption()).sum::<f64>() / n;
    let total_influence: f64 = states.iter().map(|s| s.influence()).sum();
    let weighted: f64 = states.iter().map(|s| s.influence() * s.adoption()).sum();
    let weighted_adoption = control::share(weighted, total_influence, mean_intensity);

    let total_vuln: f64 = states.iter().map(|s| s.vulnerability()).sum();
    let exposed_vuln: f64 = states
        .iter()
        .filter(|s| !s.is_adopter(cfg.adoption_cutoff))
        .map(|s| s.vulnerability())
        .sum();
    let exposure = control::share(exposed_vuln, total_vuln, 1.0 - adoption_fraction);

    Measures { adoption_fraction, weighted_adoption, exposure }
}

/// Exposure blended with the shortfall ratchet 1 - exp(-growth * rounds).
#[inline]
pub fn urgency(exposure: f64, shortfall_rounds: u32, cfg: &SimConfig) -> f64 {
    let ratchet = control::saturate(shortfall_rounds as f64, cfg.urgency_growth);
    control::blend(exposure, ratchet, cfg.exposure_weight).clamp(0.0, 1.0)
}

/// Pressure in [0, 1]: grows with urgency and with how many already adopt.
#[inline]
pub fn pressure(urgency: f64, adoption_fraction: f64, cfg: &SimConfig) -> f64 {
    control::saturate(urgency + adoption_fraction, cfg.pressure_gain)
}
