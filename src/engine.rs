//! Feasibility engine: five derived quantities from one input record
//!
//! Evaluation order follows the data dependencies:
//! system size → generation, system size → cost, consumption × tariff → savings,
//! cost ÷ annualised savings → payback.

use crate::assumptions::{Assumptions, DAYS_PER_MONTH, MONTHS_PER_YEAR, WATTS_PER_KW};
use crate::error::Result;
use crate::input::FeasibilityInput;
use crate::result::FeasibilityResult;

/// Round to `places` decimal places.
///
/// Goes through the formatter, which rounds the exact binary value with ties
/// to even, so `6.25` becomes `6.2` and `150.125` becomes `150.12`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Stateless evaluator over one input record
///
/// Every method recomputes from the input; nothing is cached and nothing is
/// mutated, so identical inputs always give bit-identical results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityEngine {
    input: FeasibilityInput,
    assumptions: Assumptions,
}

impl FeasibilityEngine {
    /// Create an engine with the default assumptions. No validation is applied.
    pub fn new(input: FeasibilityInput) -> Self {
        Self::with_assumptions(input, Assumptions::default())
    }

    pub fn with_assumptions(input: FeasibilityInput, assumptions: Assumptions) -> Self {
        Self { input, assumptions }
    }

    /// Validate the input before constructing the engine
    pub fn try_new(input: FeasibilityInput, assumptions: Assumptions) -> Result<Self> {
        input.validate()?;
        assumptions.validate()?;
        Ok(Self::with_assumptions(input, assumptions))
    }

    pub fn input(&self) -> &FeasibilityInput {
        &self.input
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Rated capacity in kW
    pub fn system_size_kw(&self) -> f64 {
        round_to(self.input.roof_area * self.assumptions.panel_efficiency_factor, 2)
    }

    /// Expected monthly generation in kWh over a 30-day month, derated
    pub fn monthly_generation_kwh(&self) -> f64 {
        let daily_yield = self.system_size_kw() * self.input.irradiance;
        round_to(daily_yield * DAYS_PER_MONTH * self.assumptions.performance_ratio, 2)
    }

    /// Monthly savings, valued at the full current bill.
    ///
    /// Not capped at generated energy: a system producing less than the
    /// site consumes still reports the whole bill as saved.
    pub fn monthly_savings(&self) -> f64 {
        round_to(self.input.monthly_consumption * self.input.tariff_rate, 2)
    }

    /// Installed cost; capacity is converted from kW to W before pricing
    pub fn total_system_cost(&self) -> f64 {
        round_to(self.system_size_kw() * self.input.cost_per_watt * WATTS_PER_KW, 2)
    }

    /// Years for cumulative savings to repay the installed cost.
    ///
    /// `None` when annual savings are zero or negative (or NaN).
    pub fn payback_years(&self) -> Option<f64> {
        let annual_savings = self.monthly_savings() * MONTHS_PER_YEAR;
        let cost = self.total_system_cost();

        if annual_savings > 0.0 {
            Some(round_to(cost / annual_savings, 1))
        } else {
            log::warn!(
                "payback undefined: annual savings {} (consumption {}, tariff {})",
                annual_savings,
                self.input.monthly_consumption,
                self.input.tariff_rate
            );
            None
        }
    }

    /// Evaluate all five quantities
    pub fn summary(&self) -> FeasibilityResult {
        let result = FeasibilityResult {
            system_size_kw: self.system_size_kw(),
            monthly_generation_kwh: self.monthly_generation_kwh(),
            monthly_savings: self.monthly_savings(),
            total_system_cost: self.total_system_cost(),
            payback_years: self.payback_years(),
        };
        log::debug!("{:?} -> {:?}", self.input, result);
        result
    }
}
