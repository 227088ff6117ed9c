//! Derive country baselines from raw economic indicators.
//!
//! Influence combines each country's share of world GDP, energy use and
//! capital formation. Adoption cost grows with carbon intensity, economic
//! weight and fossil dependence, plus a development penalty that is largest
//! for the poorest countries:
//!
//! ```text
//! influence_i = norm(wg * gdp_i/Σgdp + we * energy_i/Σenergy + wk * capital_i/Σcapital)
//! alpha_i     = carbon_i / max(carbon)
//! penalty_i   = exp(-gdppc_i / max(gdppc)) + 1
//! cost_i      = alpha_i * gdp_i/Σgdp * (1 + fossil_i/100) * penalty_i * cost_scale
//! vuln_i      = score_i / 100
//! income_i    = gdppc_i
//! ```

use serde::{Deserialize, Serialize};

use crate::country::{CountryBaseline, Population};
use crate::error::{Result, SimError};

/// Raw per-country indicators, already cleaned by the data provider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub gdp: f64,
    pub gdp_per_capita: f64,
    pub capital_formation: f64,
    pub energy_use: f64,
    /// kg CO2e per unit of GDP.
    pub carbon_intensity: f64,
    /// Fossil share of energy consumption, in percent.
    pub fossil_share_pct: f64,
    /// Climate vulnerability score on a 0–100 scale.
    pub vulnerability_score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationWeights {
    pub gdp: f64,
    pub energy: f64,
    pub capital: f64,
    pub cost_scale: f64,
}

impl Default for CalibrationWeights {
    fn default() -> Self {
        Self { gdp: 0.5, energy: 0.25, capital: 0.25, cost_scale: 100_000.0 }
    }
}

impl CalibrationWeights {
    /// Every weight must be finite and non-negative. All-zero influence
    /// weights fall back to an equal split.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gdp", self.gdp),
            ("energy", self.energy),
            ("capital", self.capital),
            ("cost_scale", self.cost_scale),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(SimError::InvalidConfiguration(format!(
                    "calibration weight {name} must be finite and non-negative (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Build a validated population. Shares over a zero total fall back to an
/// equal split so a single all-zero column can't poison the result.
pub fn calibrate<S: AsRef<str>>(
    rows: &[(S, Indicators)],
    w: &CalibrationWeights,
) -> Result<Population> {
    w.validate()?;
    if rows.is_empty() {
        return Err(SimError::EmptyPopulation);
    }
    for (id, ind) in rows {
        check(id.as_ref(), ind)?;
    }

    let n = rows.len() as f64;
    let total = |f: fn(&Indicators) -> f64| rows.iter().map(|(_, i)| f(i)).sum::<f64>();
    let max = |f: fn(&Indicators) -> f64| rows.iter().map(|(_, i)| f(i)).fold(0.0_f64, f64::max);
    let norm = |x: f64, sum: f64| if sum > 0.0 { x / sum } else { 1.0 / n };

    let gdp_sum = total(|i| i.gdp);
    let energy_sum = total(|i| i.energy_use);
    let capital_sum = total(|i| i.capital_formation);
    let max_carbon = max(|i| i.carbon_intensity);
    let max_gdppc = max(|i| i.gdp_per_capita);

    let raw_influence: Vec<f64> = rows
        .iter()
        .map(|(_, i)| {
            w.gdp * norm(i.gdp, gdp_sum)
                + w.energy * norm(i.energy_use, energy_sum)
                + w.capital * norm(i.capital_formation, capital_sum)
        })
        .collect();
    let influence_sum: f64 = raw_influence.iter().sum();

    let baselines = rows.iter().zip(raw_influence).map(|((id, i), infl)| {
        let gdp_norm = norm(i.gdp, gdp_sum);
        let alpha = if max_carbon > 0.0 { i.carbon_intensity / max_carbon } else { 0.0 };
        let penalty = if max_gdppc > 0.0 {
            (-i.gdp_per_capita / max_gdppc).exp() + 1.0
        } else {
            2.0
        };
        let cost = alpha * gdp_norm * (1.0 + i.fossil_share_pct / 100.0) * penalty * w.cost_scale;
        let baseline = CountryBaseline {
            income: i.gdp_per_capita,
            influence: norm(infl, influence_sum),
            vulnerability: i.vulnerability_score / 100.0,
            adoption_cost: cost.max(0.0),
        };
        (id.as_ref().to_string(), baseline)
    });

    Population::new(baselines)
}

fn check(country: &str, ind: &Indicators) -> Result<()> {
    let fields = [
        ("gdp", ind.gdp),
        ("gdp_per_capita", ind.gdp_per_capita),
        ("capital_formation", ind.capital_formation),
        ("energy_use", ind.energy_use),
        ("carbon_intensity", ind.carbon_intensity),
        ("fossil_share_pct", ind.fossil_share_pct),
        ("vulnerability_score", ind.vulnerability_score),
    ];
    for (name, v) in fields {
        if !v.is_finite() || v < 0.0 {
            return Err(SimError::InvalidBaseline {
                country: country.to_string(),
                reason: format!("{name} must be finite and non-negative ({v})"),
            });
        }
    }
    if ind.vulnerability_score > 100.0 {
        return Err(SimError::InvalidBaseline {
            country: country.to_string(),
            reason: format!(
                "vulnerability_score must be within [0, 100] ({})",
                ind.vulnerability_score
            ),
        });
    }
    Ok(())
}
