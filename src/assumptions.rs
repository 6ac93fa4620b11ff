//! Fixed physical and financial assumptions used by the engine

use crate::error::{FeasibilityError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Fraction of roof area converted to rated kW capacity (10% average module efficiency)
pub const DEFAULT_PANEL_EFFICIENCY_FACTOR: f64 = 0.10;

/// Real-world derating of theoretical generation
pub const DEFAULT_PERFORMANCE_RATIO: f64 = 0.75;

/// Billing month length used to scale daily yield
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const WATTS_PER_KW: f64 = 1000.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Tunable engine assumptions
///
/// Both fields default to the reference values. Missing keys in a JSON
/// assumptions file fall back to the same defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// kW of rated capacity per square metre of roof
    pub panel_efficiency_factor: f64,

    /// Derating for soiling, temperature, inverter and wiring losses
    pub performance_ratio: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            panel_efficiency_factor: DEFAULT_PANEL_EFFICIENCY_FACTOR,
            performance_ratio: DEFAULT_PERFORMANCE_RATIO,
        }
    }
}

impl Assumptions {
    /// Load assumptions from a JSON file and validate them
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let assumptions: Assumptions = serde_json::from_reader(BufReader::new(file))?;
        assumptions.validate()?;
        log::debug!("loaded assumptions from {}: {:?}", path.display(), assumptions);
        Ok(assumptions)
    }

    /// Check both factors lie in (0, 1]
    pub fn validate(&self) -> Result<()> {
        check_fraction("panel_efficiency_factor", self.panel_efficiency_factor)?;
        check_fraction("performance_ratio", self.performance_ratio)
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(FeasibilityError::Assumptions { name, value })
    }
}
