/*!
`climate_game` — a deterministic round simulator for a threshold
public-goods game of renewable-energy adoption.

What it does
- Keeps one state per country (income, influence, vulnerability, adoption
  cost, cumulative investment, adoption).
- Each round, every country compares the payoff of adopting with the payoff
  of free-riding under the previous round's global signal.
- Aggregates the new states into a [`GlobalSignal`]: adoption fraction,
  influence-weighted adoption, vulnerability-weighted exposure, and the
  bounded urgency/pressure that feed the next round's decisions.
- Records every round, so the whole run can be replayed or plotted.

How to use (call surface only)
- Build a [`Population`] from `(id, CountryBaseline)` pairs, or derive one from
  raw indicators with [`calibration::calibrate`].
- Pick a [`SimConfig`] (`Default` is a reasonable start, JSON via
  [`SimConfig::from_json`]).
- Call [`simulation::run`], or drive a [`Simulation`] round by round with
  `step`, stacking optional systems with `with_hook`.

What it does NOT do
- No I/O, no plotting, no dataset parsing. Logging goes through `tracing`;
  install a subscriber if you want to see it.
- No randomness unless you add a seeded system (see [`systems`]).
*/

pub mod calibration;
pub mod country;
pub mod decision;
pub mod error;
pub mod mechanics;
pub mod signal;
pub mod simulation;
pub mod systems;

pub use country::{CountryBaseline, CountryState, Population};
pub use decision::{Decision, DecisionMode, PayoffWeights, Payoffs};
pub use error::{Result, SimError};
pub use signal::GlobalSignal;
pub use simulation::{History, Phase, RoundRecord, SimConfig, Simulation};
