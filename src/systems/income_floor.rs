//! Development floor: countries whose income is at or below the floor cannot
//! adopt, whatever their payoffs say.

use crate::country::CountryState;
use crate::systems::sdk::Hook;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IncomeFloor {
    pub min_income: f64,
}

impl IncomeFloor {
    pub fn new(min_income: f64) -> Self {
        Self { min_income: min_income.max(0.0) }
    }
}

impl Hook for IncomeFloor {
    fn permits_adoption(&self, country: &CountryState) -> bool {
        country.income() > self.min_income
    }
}
