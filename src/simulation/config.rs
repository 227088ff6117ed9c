use serde::{Deserialize, Serialize};

use crate::decision::{DecisionMode, PayoffWeights};
use crate::error::{Result, SimError};

/// Upper bound on rounds; anything larger is treated as a configuration error.
pub const MAX_ROUNDS: i64 = 100_000;

/// Run configuration. Every field has a default, so partial JSON is fine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Rounds to play. Zero or negative completes with only the initial state.
    pub rounds: i64,
    /// Influence-weighted adoption needed for the public good to be provided.
    pub threshold: f64,
    /// Intensity above which a country counts as an adopter.
    pub adoption_cutoff: f64,
    /// Adoption fraction at which the learning curve starts to bite.
    pub learning_threshold: f64,
    /// Per-round cost reduction at full adoption.
    pub learning_rate: f64,
    /// Growth rate of the shortfall ratchet.
    pub urgency_growth: f64,
    /// Weight of exposure (vs. the ratchet) in urgency.
    pub exposure_weight: f64,
    pub pressure_gain: f64,
    /// Share of income invested per round at full adoption.
    pub investment_rate: f64,
    pub payoff: PayoffWeights,
    pub decision: DecisionMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            threshold: 0.6,
            adoption_cutoff: 0.5,
            learning_threshold: 0.5,
            learning_rate: 0.1,
            urgency_growth: 0.1,
            exposure_weight: 0.5,
            pressure_gain: 1.0,
            investment_rate: 0.01,
            payoff: PayoffWeights::default(),
            decision: DecisionMode::Binary,
        }
    }
}

impl SimConfig {
    pub fn with_rounds(mut self, rounds: i64) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn with_urgency_growth(mut self, growth: f64) -> Self {
        self.urgency_growth = growth;
        self
    }

    pub fn with_decision(mut self, mode: DecisionMode) -> Self {
        self.decision = mode;
        self
    }

    /// Parse and validate a JSON document. Unparseable input (e.g. a
    /// non-numeric round count) is a configuration error like any other.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| SimError::InvalidConfiguration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Number of rounds that will actually execute.
    pub fn effective_rounds(&self) -> u32 {
        self.rounds.clamp(0, MAX_ROUNDS) as u32
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds > MAX_ROUNDS {
            return Err(SimError::InvalidConfiguration(format!(
                "rounds must be at most {MAX_ROUNDS} (got {})",
                self.rounds
            )));
        }

        fraction("threshold", self.threshold)?;
        fraction("adoption_cutoff", self.adoption_cutoff)?;
        if self.adoption_cutoff >= 1.0 {
            return Err(SimError::InvalidConfiguration(
                "adoption_cutoff must be below 1 so full adoption counts".to_string(),
            ));
        }
        fraction("learning_threshold", self.learning_threshold)?;
        fraction("learning_rate", self.learning_rate)?;
        fraction("exposure_weight", self.exposure_weight)?;

        non_negative("urgency_growth", self.urgency_growth)?;
        non_negative("pressure_gain", self.pressure_gain)?;
        non_negative("investment_rate", self.investment_rate)?;
        non_negative("payoff.benefit_weight", self.payoff.benefit_weight)?;
        non_negative("payoff.damage_weight", self.payoff.damage_weight)?;
        non_negative("payoff.co_benefit", self.payoff.co_benefit)?;
        if self.payoff.co_benefit <= 0.0 {
            return Err(SimError::InvalidConfiguration(
                "payoff.co_benefit must be positive".to_string(),
            ));
        }

        if let DecisionMode::Graded { steepness } = self.decision {
            non_negative("decision.steepness", steepness)?;
        }
        Ok(())
    }
}

fn fraction(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(SimError::InvalidConfiguration(format!("{name} must be within [0, 1] (got {v})")))
    }
}

fn non_negative(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfiguration(format!(
            "{name} must be finite and non-negative (got {v})"
        )))
    }
}
