use thiserror::Error;

/// Precondition failures. Everything here is raised before the first round;
/// numeric edge cases inside a run clamp instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Empty population: at least one country is required")]
    EmptyPopulation,

    #[error("Invalid baseline for {country}: {reason}")]
    InvalidBaseline { country: String, reason: String },

    #[error("Duplicate country identifier: {0}")]
    DuplicateCountry(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
