//! Error types for input validation and assumption/site loading

use thiserror::Error;

/// Errors raised outside the formula chain itself.
///
/// The formulas never fail; an undefined payback period is reported as
/// `None`, not as an error.
#[derive(Debug, Error)]
pub enum FeasibilityError {
    /// A field of [`crate::FeasibilityInput`] failed validation
    #[error("invalid {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An engine assumption is outside (0, 1]
    #[error("assumption {name} must be in (0, 1], got {value}")]
    Assumptions { name: &'static str, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl FeasibilityError {
    /// True for bad user-supplied values, as opposed to loading or internal failures
    pub fn is_input_error(&self) -> bool {
        matches!(self, FeasibilityError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, FeasibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = FeasibilityError::InvalidInput {
            field: "irradiance",
            value: -1.0,
            reason: "must not be negative",
        };
        assert_eq!(err.to_string(), "invalid irradiance: -1 (must not be negative)");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_io_is_not_input_error() {
        let err: FeasibilityError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_input_error());
    }
}
