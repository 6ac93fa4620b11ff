//! Scenario runner for batch and sensitivity evaluations
//!
//! Holds one set of assumptions and evaluates many inputs against it, or one
//! input against many assumption sets.

use crate::assumptions::Assumptions;
use crate::engine::FeasibilityEngine;
use crate::error::Result;
use crate::input::{FeasibilityInput, Site};
use crate::result::FeasibilityResult;
use rayon::prelude::*;
use std::path::Path;

/// Shared-assumption evaluator
///
/// # Example
/// ```
/// use solar_feasibility::{FeasibilityInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&FeasibilityInput::new(100.0, 300.0, 9.5, 50.0, 5.0));
/// assert_eq!(result.payback_years, Some(14.6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with the default assumptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner by loading assumptions from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_json_path(path)?))
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Evaluate a single input
    pub fn run(&self, input: &FeasibilityInput) -> FeasibilityResult {
        FeasibilityEngine::with_assumptions(*input, self.assumptions).summary()
    }

    /// Evaluate many inputs in parallel; output order matches input order
    pub fn run_batch(&self, inputs: &[FeasibilityInput]) -> Vec<FeasibilityResult> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Evaluate named sites in parallel, keeping each site id with its result
    pub fn run_sites<'a>(&self, sites: &'a [Site]) -> Vec<(&'a str, FeasibilityResult)> {
        log::info!("evaluating {} sites", sites.len());
        sites
            .par_iter()
            .map(|site| (site.site_id.as_str(), self.run(&site.input)))
            .collect()
    }

    /// Evaluate one input under several assumption sets
    pub fn run_sensitivity(
        input: &FeasibilityInput,
        assumption_sets: &[Assumptions],
    ) -> Vec<FeasibilityResult> {
        assumption_sets
            .iter()
            .map(|assumptions| FeasibilityEngine::with_assumptions(*input, *assumptions).summary())
            .collect()
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> FeasibilityInput {
        FeasibilityInput::new(100.0, 300.0, 9.5, 50.0, 5.0)
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<FeasibilityInput> = (1..=50)
            .map(|i| FeasibilityInput { roof_area: i as f64 * 10.0, ..reference_input() })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 50);
        for (input, result) in inputs.iter().zip(&results) {
            assert_eq!(*result, FeasibilityEngine::new(*input).summary());
        }

        // Larger roof means a bigger, costlier system
        assert!(results[49].total_system_cost > results[0].total_system_cost);
    }

    #[test]
    fn test_run_sites() {
        let sites = vec![
            Site { site_id: "a".to_string(), input: reference_input() },
            Site {
                site_id: "b".to_string(),
                input: FeasibilityInput { tariff_rate: 0.0, ..reference_input() },
            },
        ];
        let results = ScenarioRunner::new().run_sites(&sites);

        assert_eq!(results[0].0, "a");
        assert_eq!(results[0].1.payback_years, Some(14.6));
        assert_eq!(results[1].0, "b");
        assert_eq!(results[1].1.payback_years, None);
    }

    #[test]
    fn test_sensitivity_on_performance_ratio() {
        let sets: Vec<Assumptions> = [0.6, 0.75, 0.9]
            .iter()
            .map(|&ratio| Assumptions { performance_ratio: ratio, ..Default::default() })
            .collect();

        let results = ScenarioRunner::run_sensitivity(&reference_input(), &sets);
        assert_eq!(results.len(), 3);
        assert_eq!(results[1].monthly_generation_kwh, 1125.0);
        assert!(results[2].monthly_generation_kwh > results[0].monthly_generation_kwh);

        // Performance ratio does not enter cost or savings
        assert!(results.iter().all(|r| r.payback_years == Some(14.6)));
    }

    #[test]
    fn test_assumptions_mut() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().panel_efficiency_factor = 0.2;
        assert_eq!(runner.assumptions().panel_efficiency_factor, 0.2);
        assert_eq!(runner.run(&reference_input()).system_size_kw, 20.0);
    }
}
