//! Round loop.
//!
//! A [`Simulation`] owns the whole run: configuration, current states, the
//! latest signal, hooks and the append-only [`History`]. Each round:
//!
//! 1. every country decides against the previous round's signal
//! 2. every state advances with its decision
//! 3. the tracker derives the new signal from the new states
//! 4. states, decisions and signal are appended as one [`RoundRecord`]
//!
//! Rounds are strictly sequential; a round only becomes visible in the
//! history once all of it has been computed.

mod config;
mod history;

pub use config::{MAX_ROUNDS, SimConfig};
pub use history::{History, RoundRecord};

use tracing::{debug, info, warn};

use crate::country::{CountryState, Population};
use crate::decision::{self, Decision};
use crate::error::Result;
use crate::signal::GlobalSignal;
use crate::systems::sdk::{Hook, apply_hooks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    RoundInProgress,
    Completed,
}

pub struct Simulation {
    config: SimConfig,
    total_rounds: u32,
    round: u32,
    phase: Phase,
    states: Vec<CountryState>,
    signal: GlobalSignal,
    hooks: Vec<Box<dyn Hook>>,
    history: History,
}

impl Simulation {
    /// Validate the configuration and seed round 0. Fails before anything is
    /// recorded.
    pub fn new(population: &Population, config: SimConfig) -> Result<Self> {
        config.validate()?;
        if config.rounds <= 0 {
            warn!(rounds = config.rounds, "Non-positive round count, no rounds will run");
        }

        let states = population.seed();
        let signal = GlobalSignal::neutral(&states, &config);
        let total_rounds = config.effective_rounds();

        let mut history = History::default();
        history.push(RoundRecord {
            round: 0,
            countries: states.clone(),
            decisions: Vec::new(),
            signal,
        });

        info!(countries = states.len(), rounds = total_rounds, "Simulation initialised");

        Ok(Self {
            config,
            total_rounds,
            round: 0,
            phase: if total_rounds == 0 { Phase::Completed } else { Phase::Initializing },
            states,
            signal,
            hooks: Vec::new(),
            history,
        })
    }

    /// Add a system. Round 0 has already been recorded, so its `on_round`
    /// fires immediately to keep observers aligned with the history.
    pub fn with_hook(mut self, hook: impl Hook + 'static) -> Self {
        let mut hook: Box<dyn Hook> = Box::new(hook);
        if let Some(initial) = self.history.get(0) {
            hook.on_round(initial);
        }
        self.hooks.push(hook);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn signal(&self) -> &GlobalSignal {
        &self.signal
    }

    pub fn states(&self) -> &[CountryState] {
        &self.states
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Play one round. Returns the new record, or `None` once completed.
    pub fn step(&mut self) -> Option<&RoundRecord> {
        if self.phase == Phase::Completed {
            return None;
        }
        self.phase = Phase::RoundInProgress;
        let round = self.round + 1;

        let decisions: Vec<Decision> = self
            .states
            .iter()
            .map(|c| {
                let raw = decision::payoffs(c, &self.signal, &self.config.payoff);
                let (payoffs, permitted) = apply_hooks(&mut self.hooks, c, &self.signal, raw);
                decision::choose(payoffs, permitted, self.config.decision)
            })
            .collect();

        let next: Vec<CountryState> = self
            .states
            .iter()
            .zip(&decisions)
            .map(|(c, d)| c.advance(d, &self.signal, &self.config))
            .collect();

        let signal = GlobalSignal::observe(&next, &self.signal, round, &self.config);

        debug!(
            round,
            adoption_fraction = signal.adoption_fraction,
            weighted_adoption = signal.weighted_adoption,
            urgency = signal.urgency,
            pressure = signal.pressure,
            "Round complete"
        );

        let record = RoundRecord {
            round,
            countries: next.clone(),
            decisions,
            signal,
        };
        for h in self.hooks.iter_mut() {
            h.on_round(&record);
        }

        self.states = next;
        self.signal = signal;
        self.round = round;
        self.history.push(record);

        if self.round >= self.total_rounds {
            self.phase = Phase::Completed;
            info!(
                rounds = self.round,
                adoption_fraction = signal.adoption_fraction,
                weighted_adoption = signal.weighted_adoption,
                "Simulation completed"
            );
        }
        self.history.final_record()
    }

    /// Play every remaining round and hand over the history.
    pub fn run(mut self) -> History {
        while self.step().is_some() {}
        self.history
    }
}

/// Convenience: seed, run to completion, return the history.
pub fn run(population: &Population, config: SimConfig) -> Result<History> {
    Ok(Simulation::new(population, config)?.run())
}
