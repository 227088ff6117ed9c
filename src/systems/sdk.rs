// src/systems/sdk.rs

//! # Systems SDK
//!
//! Hook protocol for **systems**: optional mechanics that plug into the round
//! loop without changing the payoff model, the signal tracker or the state
//! update. The core loop runs without any; a caller stacks as many as needed
//! on a [`Simulation`](crate::Simulation).
//!
//! ## When to create a new system
//! Create a system when a mechanic modulates individual decisions or observes
//! the run, and can be switched on or off per scenario, e.g.:
//! - **income_floor**: countries below a development floor cannot adopt
//! - **payoff_noise**: seeded perception noise on the adopt payoff
//! - **recorder**: capture trajectories as the run progresses
//!
//! ## Hooks
//! Implement [`Hook`]; every method has a no-op default.
//!
//! - `adjust_payoffs(&CountryState, &GlobalSignal, Payoffs) -> Payoffs`
//!   Rewrite the payoffs a country sees before it chooses. Hooks compose in
//!   the order they were added; each receives the previous hook's output.
//!
//! - `permits_adoption(&CountryState) -> bool`
//!   Veto adoption outright. One veto is enough.
//!
//! - `on_round(&RoundRecord)`
//!   Observe a completed round (round 0 included).
//!
//! ## Determinism
//! - Hooks run sequentially, country by country in population order.
//! - A hook that draws random numbers must own an explicitly seeded RNG, so
//!   reruns with the same seed produce identical histories.
//!
//! ## Anti-patterns to avoid
//! - Don't recompute payoffs from scratch in a hook. Hooks *modulate* the
//!   model, they don't rebuild it.
//! - Don't mutate country state from a hook; the loop owns the history.

use crate::country::CountryState;
use crate::decision::Payoffs;
use crate::signal::GlobalSignal;
use crate::simulation::RoundRecord;

/// A pluggable mechanic consulted by the round loop.
pub trait Hook {
    /// (Optional) rewrite the payoffs a country is about to compare.
    fn adjust_payoffs(
        &mut self,
        _country: &CountryState,
        _signal: &GlobalSignal,
        payoffs: Payoffs,
    ) -> Payoffs {
        payoffs
    }
    /// (Optional) forbid adoption for this country this round.
    fn permits_adoption(&self, _country: &CountryState) -> bool {
        true
    }
    /// (Optional) observe a completed round.
    fn on_round(&mut self, _record: &RoundRecord) {}
}

/// Run every hook's payoff adjustment in order and collect vetoes.
pub(crate) fn apply_hooks(
    hooks: &mut [Box<dyn Hook>],
    country: &CountryState,
    signal: &GlobalSignal,
    payoffs: Payoffs,
) -> (Payoffs, bool) {
    let mut out = payoffs;
    let mut permitted = true;
    for h in hooks.iter_mut() {
        out = h.adjust_payoffs(country, signal, out);
        permitted &= h.permits_adoption(country);
    }
    (out, permitted)
}
