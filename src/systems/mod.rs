pub mod sdk;
#[cfg(feature="system-income_floor")] pub mod income_floor;
#[cfg(feature="system-payoff_noise")] pub mod payoff_noise;
#[cfg(feature="system-recorder")]     pub mod recorder;

pub use sdk::Hook;
