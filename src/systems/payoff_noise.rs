//! Perception noise on the adopt payoff.
//!
//! Each country draws N(0, sigma²) once per round and adds it to its adopt
//! payoff. The RNG is seeded explicitly, so two runs with the same seed,
//! population and configuration produce the same history.

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use crate::country::CountryState;
use crate::decision::Payoffs;
use crate::mechanics::stoch;
use crate::signal::GlobalSignal;
use crate::systems::sdk::Hook;

pub struct PayoffNoise {
    rng: WyRand,
    pub sigma: f64,
}

impl PayoffNoise {
    pub fn new(sigma: f64, seed: u64) -> Self {
        Self {
            rng: WyRand::from_seed(seed.to_le_bytes()),
            sigma: sigma.max(0.0),
        }
    }
}

impl Hook for PayoffNoise {
    fn adjust_payoffs(
        &mut self,
        _country: &CountryState,
        _signal: &GlobalSignal,
        payoffs: Payoffs,
    ) -> Payoffs {
        Payoffs {
            adopt: payoffs.adopt + stoch::jitter(&mut self.rng, self.sigma),
            free_ride: payoffs.free_ride,
        }
    }
}
