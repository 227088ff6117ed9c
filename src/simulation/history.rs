use serde::Serialize;

use crate::country::CountryState;
use crate::decision::Decision;
use crate::signal::GlobalSignal;

/// Everything produced by one round. Round 0 is the seeded state and
/// carries no decisions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundRecord {
    pub round: u32,
    pub countries: Vec<CountryState>,
    /// Same order as `countries`.
    pub decisions: Vec<Decision>,
    pub signal: GlobalSignal,
}

impl RoundRecord {
    pub fn country(&self, id: &str) -> Option<(&CountryState, Option<&Decision>)> {
        let idx = self.countries.iter().position(|c| c.id() == id)?;
        Some((&self.countries[idx], self.decisions.get(idx)))
    }
}

/// Append-only, replayable run history.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct History {
    rounds: Vec<RoundRecord>,
}

impl History {
    pub(crate) fn push(&mut self, record: RoundRecord) {
        debug_assert_eq!(record.round as usize, self.rounds.len());
        self.rounds.push(record);
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn get(&self, round: u32) -> Option<&RoundRecord> {
        self.rounds.get(round as usize)
    }

    pub fn final_record(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    pub fn signals(&self) -> impl Iterator<Item = &GlobalSignal> {
        self.rounds.iter().map(|r| &r.signal)
    }

    /// Share of adopting countries per round (unweighted).
    pub fn adoption_trajectory(&self) -> Vec<f64> {
        self.signals().map(|s| s.adoption_fraction).collect()
    }

    /// Influence-weighted adoption per round.
    pub fn weighted_trajectory(&self) -> Vec<f64> {
        self.signals().map(|s| s.weighted_adoption).collect()
    }

    /// One country's state (and decision, from round 1 on) across the run.
    pub fn country_series<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Iterator<Item = (u32, &'a CountryState, Option<&'a Decision>)> + 'a {
        self.rounds
            .iter()
            .filter_map(move |r| r.country(id).map(|(c, d)| (r.round, c, d)))
    }

    pub fn into_rounds(self) -> Vec<RoundRecord> {
        self.rounds
    }
}
