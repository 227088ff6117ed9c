//! Per-country records and their per-round evolution.
//!
//! A [`CountryBaseline`] is what the external dataset provides. The
//! [`Population`] validates a set of baselines once; the simulation then
//! seeds one [`CountryState`] per country and replaces it every round with
//! [`CountryState::advance`]. Baseline attributes (income, influence,
//! vulnerability) are private and never change after seeding.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::decision::Decision;
use crate::error::{Result, SimError};
use crate::mechanics::learning;
use crate::signal::GlobalSignal;
use crate::simulation::SimConfig;

/// Baseline attributes for one country, as supplied by the data provider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryBaseline {
    pub income: f64,
    pub influence: f64,
    pub vulnerability: f64,
    pub adoption_cost: f64,
}

impl CountryBaseline {
    pub fn new(income: f64, influence: f64, vulnerability: f64, adoption_cost: f64) -> Self {
        Self { income, influence, vulnerability, adoption_cost }
    }

    fn validate(&self, country: &str) -> Result<()> {
        let fields = [
            ("income", self.income),
            ("influence", self.influence),
            ("vulnerability", self.vulnerability),
            ("adoption_cost", self.adoption_cost),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(country, format!("{name} is not finite ({value})")));
            }
            if value < 0.0 {
                return Err(invalid(country, format!("{name} is negative ({value})")));
            }
        }
        if self.vulnerability > 1.0 {
            return Err(invalid(
                country,
                format!("vulnerability must be within [0, 1] ({})", self.vulnerability),
            ));
        }
        Ok(())
    }
}

fn invalid(country: &str, reason: String) -> SimError {
    SimError::InvalidBaseline { country: country.to_string(), reason }
}

/// A validated, non-empty, ordered set of country baselines.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    entries: Vec<(String, CountryBaseline)>,
}

impl Population {
    /// Validate and fix the order of the countries. Order is preserved in
    /// every snapshot the simulation emits.
    pub fn new<I, S>(baselines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, CountryBaseline)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (id, baseline) in baselines {
            let id = id.into();
            baseline.validate(&id)?;
            if !seen.insert(id.clone()) {
                return Err(SimError::DuplicateCountry(id));
            }
            entries.push((id, baseline));
        }
        if entries.is_empty() {
            return Err(SimError::EmptyPopulation);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryBaseline)> {
        self.entries.iter().map(|(id, b)| (id.as_str(), b))
    }

    /// Initial states: nobody has adopted, nothing has been invested.
    pub fn seed(&self) -> Vec<CountryState> {
        self.entries.iter().map(|(id, b)| CountryState::seed(id, b)).collect()
    }
}

/// One country in one round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryState {
    id: String,
    income: f64,
    influence: f64,
    vulnerability: f64,
    adoption_cost: f64,
    cumulative_investment: f64,
    adoption: f64,
}

impl CountryState {
    fn seed(id: &str, b: &CountryBaseline) -> Self {
        Self {
            id: id.to_string(),
            income: b.income,
            influence: b.influence,
            vulnerability: b.vulnerability,
            adoption_cost: b.adoption_cost.max(0.0),
            cumulative_investment: 0.0,
            adoption: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn influence(&self) -> f64 {
        self.influence
    }

    pub fn vulnerability(&self) -> f64 {
        self.vulnerability
    }

    pub fn adoption_cost(&self) -> f64 {
        self.adoption_cost
    }

    pub fn cumulative_investment(&self) -> f64 {
        self.cumulative_investment
    }

    /// Adoption intensity in [0, 1]; binary decisions give exactly 0 or 1.
    pub fn adoption(&self) -> f64 {
        self.adoption
    }

    /// Counted as an adopter when intensity is strictly above `cutoff`.
    #[inline]
    pub fn is_adopter(&self, cutoff: f64) -> bool {
        self.adoption > cutoff
    }

    /// Next-round state from this round's decision and the signal it was
    /// decided under.
    ///
    /// - adoption is set directly from the decision intensity
    /// - investment grows by `investment_rate * income * intensity`
    /// - cost falls along the learning curve once the signal's adoption
    ///   fraction has reached `learning_threshold`, floored at zero
    pub fn advance(&self, decision: &Decision, signal: &GlobalSignal, cfg: &SimConfig) -> Self {
        let intensity = decision.intensity.clamp(0.0, 1.0);
        let invested = learning::investment(self.income, intensity, cfg.investment_rate);
        let cost = learning::learned_cost(
            self.adoption_cost,
            signal.adoption_fraction,
            cfg.learning_threshold,
            cfg.learning_rate,
        );
        Self {
            id: self.id.clone(),
            income: self.income,
            influence: self.influence,
            vulnerability: self.vulnerability,
            adoption_cost: cost.min(self.adoption_cost).max(0.0),
            cumulative_investment: self.cumulative_investment + invested,
            adoption: intensity,
        }
    }
}
