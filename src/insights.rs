//! Presentation-level readings of a result: payback tier, energy balance, annual savings

use crate::assumptions::MONTHS_PER_YEAR;
use crate::input::FeasibilityInput;
use crate::result::FeasibilityResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payback ceiling (years) for an excellent rating
pub const EXCELLENT_PAYBACK_YEARS: f64 = 5.0;

/// Payback ceiling (years) for a good rating
pub const GOOD_PAYBACK_YEARS: f64 = 8.0;

/// Qualitative payback rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaybackTier {
    Excellent,
    Good,
    ConsiderCarefully,
    /// Payback could not be computed
    Undefined,
}

impl PaybackTier {
    pub fn from_payback(payback_years: Option<f64>) -> Self {
        match payback_years {
            None => PaybackTier::Undefined,
            Some(p) if p <= EXCELLENT_PAYBACK_YEARS => PaybackTier::Excellent,
            Some(p) if p <= GOOD_PAYBACK_YEARS => PaybackTier::Good,
            Some(_) => PaybackTier::ConsiderCarefully,
        }
    }

    /// User-facing message for this tier
    pub fn message(&self, payback_years: Option<f64>) -> String {
        let years = payback_years.unwrap_or_default();
        match self {
            PaybackTier::Excellent => format!("Excellent! Payback Period: {:?} years", years),
            PaybackTier::Good => format!("Good! Payback Period: {:?} years", years),
            PaybackTier::ConsiderCarefully => {
                format!("Consider carefully. Payback Period: {:?} years", years)
            }
            PaybackTier::Undefined => {
                "Unable to calculate payback period. Check your inputs.".to_string()
            }
        }
    }
}

/// Monthly generation compared with consumption
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnergyBalance {
    /// Generation meets or exceeds consumption
    Surplus { excess_kwh: f64 },
    /// Generation falls short of consumption
    Shortfall { coverage_pct: f64, deficit_kwh: f64 },
}

impl EnergyBalance {
    pub fn evaluate(generation_kwh: f64, consumption_kwh: f64) -> Self {
        if generation_kwh >= consumption_kwh {
            EnergyBalance::Surplus {
                excess_kwh: generation_kwh - consumption_kwh,
            }
        } else {
            EnergyBalance::Shortfall {
                coverage_pct: generation_kwh / consumption_kwh * 100.0,
                deficit_kwh: consumption_kwh - generation_kwh,
            }
        }
    }
}

impl fmt::Display for EnergyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyBalance::Surplus { excess_kwh } => write!(
                f,
                "Your system will generate {:.1} kWh excess electricity monthly!",
                excess_kwh
            ),
            EnergyBalance::Shortfall { coverage_pct, deficit_kwh } => write!(
                f,
                "Your system will cover {:.1}% of your electricity needs. \
                 You'll still need {:.1} kWh from the grid monthly.",
                coverage_pct, deficit_kwh
            ),
        }
    }
}

pub fn annual_savings(result: &FeasibilityResult) -> f64 {
    result.monthly_savings * MONTHS_PER_YEAR
}

/// A result together with the insights derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub input: FeasibilityInput,
    pub result: FeasibilityResult,
    pub payback_tier: PaybackTier,
    pub energy_balance: EnergyBalance,
    pub annual_savings: f64,
}

impl Report {
    pub fn new(input: FeasibilityInput, result: FeasibilityResult) -> Self {
        Self {
            input,
            result,
            payback_tier: PaybackTier::from_payback(result.payback_years),
            energy_balance: EnergyBalance::evaluate(
                result.monthly_generation_kwh,
                input.monthly_consumption,
            ),
            annual_savings: annual_savings(&result),
        }
    }

    /// Insight lines for console output
    pub fn insight_lines(&self) -> Vec<String> {
        vec![
            self.payback_tier.message(self.result.payback_years),
            self.energy_balance.to_string(),
            format!("Estimated annual savings: {:.2}", self.annual_savings),
        ]
    }
}
