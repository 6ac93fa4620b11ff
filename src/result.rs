//! Feasibility result record and its key/value rendering

use serde::{Deserialize, Serialize};

/// The five derived quantities for one input record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// Rated capacity (kW), 2 dp
    pub system_size_kw: f64,

    /// Expected generation (kWh/month), 2 dp
    pub monthly_generation_kwh: f64,

    /// Bill savings (currency/month), 2 dp
    pub monthly_savings: f64,

    /// Installed cost (currency), 2 dp
    pub total_system_cost: f64,

    /// Payback period (years), 1 dp; `None` when savings are not positive
    pub payback_years: Option<f64>,
}

impl FeasibilityResult {
    /// Summary entries in display order, keyed the way the console report names them
    pub fn entries(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("system_size_kw", Some(self.system_size_kw)),
            ("monthly_electricity_generation_kwh", Some(self.monthly_generation_kwh)),
            ("monthly_savings", Some(self.monthly_savings)),
            ("total_system_cost", Some(self.total_system_cost)),
            ("payback_years", self.payback_years),
        ]
    }

    /// `Key Name: value` lines, one per entry
    pub fn to_lines(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|(key, value)| format!("{}: {}", humanize_key(key), format_value(*value)))
            .collect()
    }
}

/// `monthly_savings` → `Monthly Savings`
///
/// Underscores become spaces, then each run of letters is title-cased:
/// first letter upper, the rest lower. Nothing else is removed or merged.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Shortest round-trip float form with a trailing `.0` for whole numbers; `None` when absent
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "None".to_string(),
    }
}
