//! Solar Feasibility - rooftop solar sizing and payback estimation
//!
//! This library provides:
//! - A deterministic feasibility engine (system size, generation, savings, cost, payback)
//! - Tunable panel efficiency and performance ratio assumptions
//! - Presentation insights (payback tier, surplus or grid coverage, annual savings)
//! - CSV site loading and parallel batch evaluation

pub mod assumptions;
pub mod engine;
pub mod error;
pub mod input;
pub mod insights;
pub mod result;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use engine::FeasibilityEngine;
pub use error::{FeasibilityError, Result};
pub use input::{FeasibilityInput, InputField, Site};
pub use insights::{EnergyBalance, PaybackTier, Report};
pub use result::FeasibilityResult;
pub use scenario::ScenarioRunner;
