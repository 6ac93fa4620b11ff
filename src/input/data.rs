//! The five-field input record and the ranges the entry form enforces

use crate::error::{FeasibilityError, Result};
use serde::{Deserialize, Serialize};

/// One field of [`FeasibilityInput`], carrying the entry form's metadata
///
/// Ranges, defaults and steps belong to the form. The engine accepts any
/// value and never consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    RoofArea,
    MonthlyConsumption,
    TariffRate,
    CostPerWatt,
    Irradiance,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::RoofArea,
        InputField::MonthlyConsumption,
        InputField::TariffRate,
        InputField::CostPerWatt,
        InputField::Irradiance,
    ];

    /// snake_case field name, as used in CSV headers and error messages
    pub fn name(&self) -> &'static str {
        match self {
            InputField::RoofArea => "roof_area",
            InputField::MonthlyConsumption => "monthly_consumption",
            InputField::TariffRate => "tariff_rate",
            InputField::CostPerWatt => "cost_per_watt",
            InputField::Irradiance => "irradiance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::RoofArea => "Roof Area (sq meters)",
            InputField::MonthlyConsumption => "Monthly Electricity Consumption (kWh)",
            InputField::TariffRate => "Electricity Tariff Rate (per kWh)",
            InputField::CostPerWatt => "Solar System Cost (per Watt)",
            InputField::Irradiance => "Daily Solar Irradiance (kWh/m²/day)",
        }
    }

    /// Inclusive (min, max) accepted by the form
    pub fn range(&self) -> (f64, f64) {
        match self {
            InputField::RoofArea => (1.0, 1000.0),
            InputField::MonthlyConsumption => (1.0, 10_000.0),
            InputField::TariffRate => (0.1, 50.0),
            InputField::CostPerWatt => (10.0, 200.0),
            InputField::Irradiance => (1.0, 10.0),
        }
    }

    pub fn default_value(&self) -> f64 {
        match self {
            InputField::RoofArea => 100.0,
            InputField::MonthlyConsumption => 300.0,
            InputField::TariffRate => 5.0,
            InputField::CostPerWatt => 50.0,
            InputField::Irradiance => 5.0,
        }
    }

    pub fn step(&self) -> f64 {
        match self {
            InputField::RoofArea => 1.0,
            InputField::MonthlyConsumption => 10.0,
            InputField::TariffRate => 0.1,
            InputField::CostPerWatt => 1.0,
            InputField::Irradiance => 0.1,
        }
    }

    /// Describe a clamp adjustment, e.g. `1200 is above the maximum 1000; using 1000`
    pub fn clamp_note(&self, original: f64, clamped: f64) -> String {
        let (min, max) = self.range();
        if original.is_nan() {
            format!("not a number; using default {}", clamped)
        } else if original < min {
            format!("{} is below the minimum {}; using {}", original, min, clamped)
        } else {
            format!("{} is above the maximum {}; using {}", original, max, clamped)
        }
    }

    /// Clamp a value into the form range. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default_value();
        }
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

/// User-supplied site parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityInput {
    /// Usable roof area (m²)
    pub roof_area: f64,

    /// Average electricity consumption (kWh/month)
    pub monthly_consumption: f64,

    /// Grid price (currency units per kWh)
    pub tariff_rate: f64,

    /// Installed cost (currency units per watt)
    pub cost_per_watt: f64,

    /// Average daily solar irradiance (kWh/m²/day)
    pub irradiance: f64,
}

impl FeasibilityInput {
    pub fn new(
        roof_area: f64,
        monthly_consumption: f64,
        tariff_rate: f64,
        cost_per_watt: f64,
        irradiance: f64,
    ) -> Self {
        Self {
            roof_area,
            monthly_consumption,
            tariff_rate,
            cost_per_watt,
            irradiance,
        }
    }

    /// The record the entry form starts from
    pub fn form_defaults() -> Self {
        Self::new(
            InputField::RoofArea.default_value(),
            InputField::MonthlyConsumption.default_value(),
            InputField::TariffRate.default_value(),
            InputField::CostPerWatt.default_value(),
            InputField::Irradiance.default_value(),
        )
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::RoofArea => self.roof_area,
            InputField::MonthlyConsumption => self.monthly_consumption,
            InputField::TariffRate => self.tariff_rate,
            InputField::CostPerWatt => self.cost_per_watt,
            InputField::Irradiance => self.irradiance,
        }
    }

    fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::RoofArea => self.roof_area = value,
            InputField::MonthlyConsumption => self.monthly_consumption = value,
            InputField::TariffRate => self.tariff_rate = value,
            InputField::CostPerWatt => self.cost_per_watt = value,
            InputField::Irradiance => self.irradiance = value,
        }
    }

    /// Copy of this record with every field clamped into its form range
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for field in InputField::ALL {
            let original = self.get(field);
            let value = field.clamp(original);
            if value != original {
                log::warn!("{}: {}", field.label(), field.clamp_note(original, value));
            }
            out.set(field, value);
        }
        out
    }

    /// Reject non-finite or negative values.
    ///
    /// Zero passes so that a zero tariff or consumption still reaches the
    /// engine and yields an undefined payback period.
    pub fn validate(&self) -> Result<()> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(FeasibilityError::InvalidInput {
                    field: field.name(),
                    value,
                    reason: "must be a finite number",
                });
            }
            if value < 0.0 {
                return Err(FeasibilityError::InvalidInput {
                    field: field.name(),
                    value,
                    reason: "must not be negative",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let input = FeasibilityInput::form_defaults();
        assert_eq!(input, FeasibilityInput::new(100.0, 300.0, 5.0, 50.0, 5.0));
    }

    #[test]
    fn test_defaults_lie_within_ranges() {
        for field in InputField::ALL {
            let (min, max) = field.range();
            let default = field.default_value();
            assert!(min <= default && default <= max, "{:?}", field);
            assert!(field.step() > 0.0);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(InputField::RoofArea.clamp(0.0), 1.0);
        assert_eq!(InputField::RoofArea.clamp(5000.0), 1000.0);
        assert_eq!(InputField::TariffRate.clamp(0.0), 0.1);
        assert_eq!(InputField::Irradiance.clamp(6.5), 6.5);
        assert_eq!(InputField::CostPerWatt.clamp(f64::NAN), 50.0);
    }

    #[test]
    fn test_labels_and_clamp_notes() {
        assert_eq!(InputField::RoofArea.label(), "Roof Area (sq meters)");
        assert_eq!(
            InputField::Irradiance.label(),
            "Daily Solar Irradiance (kWh/m²/day)"
        );
        assert_eq!(
            InputField::RoofArea.clamp_note(1200.0, 1000.0),
            "1200 is above the maximum 1000; using 1000"
        );
        assert_eq!(
            InputField::TariffRate.clamp_note(0.0, 0.1),
            "0 is below the minimum 0.1; using 0.1"
        );
        assert_eq!(
            InputField::CostPerWatt.clamp_note(f64::NAN, 50.0),
            "not a number; using default 50"
        );
    }

    #[test]
    fn test_clamped_record() {
        let input = FeasibilityInput::new(2000.0, 0.5, 9.5, 5.0, 12.0);
        let clamped = input.clamped();
        assert_eq!(clamped, FeasibilityInput::new(1000.0, 1.0, 9.5, 10.0, 10.0));
    }

    #[test]
    fn test_validate_accepts_zero() {
        let input = FeasibilityInput::new(100.0, 0.0, 0.0, 50.0, 5.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let input = FeasibilityInput::new(100.0, 300.0, 5.0, 50.0, -1.0);
        match input.validate() {
            Err(FeasibilityError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "irradiance");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let input = FeasibilityInput::new(f64::NAN, 300.0, 5.0, 50.0, 5.0);
        assert!(matches!(
            input.validate(),
            Err(FeasibilityError::InvalidInput { field: "roof_area", .. })
        ));

        let input = FeasibilityInput::new(100.0, 300.0, f64::INFINITY, 50.0, 5.0);
        assert!(input.validate().is_err());
    }
}
