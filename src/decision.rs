//! Adopt-vs-free-ride choice.
//!
//! Stateless: a decision depends only on one country's state, the signal of
//! the previous round and the configuration.
//!
//! adopt      = co_benefit + benefit_weight * vulnerability * pressure - cost / income
//! free-ride  = -damage_weight * vulnerability * urgency
//!
//! Adopting wins only on a strict inequality; ties keep the status quo.

use serde::{Deserialize, Serialize};

use crate::country::CountryState;
use crate::mechanics::learning;
use crate::signal::GlobalSignal;

/// Payoff coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffWeights {
    /// Economic gain from the transition itself; must be positive.
    pub co_benefit: f64,
    /// Value of reduced exposure per unit of vulnerability at full pressure.
    pub benefit_weight: f64,
    /// Expected damage per unit of vulnerability at full urgency.
    pub damage_weight: f64,
}

impl Default for PayoffWeights {
    fn default() -> Self {
        Self { co_benefit: 0.01, benefit_weight: 0.1, damage_weight: 0.1 }
    }
}

/// How a payoff margin turns into an adoption intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionMode {
    /// Full adoption (1.0) or none (0.0).
    #[default]
    Binary,
    /// Partial adoption: clamp(margin * steepness, 0, 1) for a positive margin.
    Graded { steepness: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Payoffs {
    pub adopt: f64,
    pub free_ride: f64,
}

impl Payoffs {
    #[inline]
    pub fn margin(&self) -> f64 {
        self.adopt - self.free_ride
    }
}

/// A country's choice for one round, with the payoffs it was made from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Decision {
    pub payoffs: Payoffs,
    pub intensity: f64,
}

impl Decision {
    #[inline]
    pub fn adopts(&self) -> bool {
        self.intensity > 0.0
    }
}

/// Expected payoffs for both strategies under `signal`.
pub fn payoffs(country: &CountryState, signal: &GlobalSignal, w: &PayoffWeights) -> Payoffs {
    let v = country.vulnerability();
    let cost = learning::effective_cost(country.adoption_cost(), country.income());
    let adopt = w.co_benefit + w.benefit_weight * v * signal.pressure - cost;
    let free_ride = -w.damage_weight * v * signal.urgency;
    Payoffs { adopt, free_ride }
}

/// Turn payoffs into a decision. `permitted = false` forces free-riding.
pub fn choose(payoffs: Payoffs, permitted: bool, mode: DecisionMode) -> Decision {
    let margin = payoffs.margin();
    let intensity = if permitted && margin > 0.0 {
        match mode {
            DecisionMode::Binary => 1.0,
            DecisionMode::Graded { steepness } => (margin * steepness.max(0.0)).clamp(0.0, 1.0),
        }
    } else {
        0.0
    };
    Decision { payoffs, intensity }
}

