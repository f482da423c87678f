use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a [`CalculatorConfig`] holds an unusable constant.
#[derive(Debug, Error, PartialEq)]
pub enum CalculatorConfigError {
    #[error("cups per liter must be a positive finite number, got {0}")]
    InvalidCupsPerLiter(f64),

    #[error("liters per bag must be a positive finite number, got {0}")]
    InvalidLitersPerBag(f64),

    #[error("preview max dimension must be a positive finite number, got {0}")]
    InvalidPreviewMaxDimension(f64),
}

/// Conversion constants used by the soil calculator.
///
/// Missing keys fall back to the defaults when deserialized, so a config
/// file only needs to name the values it overrides.
///
/// # Example
///
/// ```
/// use soil_core::CalculatorConfig;
///
/// let config = CalculatorConfig::default();
///
/// assert_eq!(config.cups_per_liter, 4.22675);
/// assert_eq!(config.liters_per_bag, 2.5);
/// assert_eq!(config.preview_max_dimension, 180.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// US cups in one liter.
    pub cups_per_liter: f64,

    /// Liters of soil in one retail bag.
    pub liters_per_bag: f64,

    /// Longest side of the preview box, in display units.
    pub preview_max_dimension: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            cups_per_liter: 4.22675,
            liters_per_bag: 2.5,
            preview_max_dimension: 180.0,
        }
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl CalculatorConfig {
    /// Checks that every constant is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`CalculatorConfigError`].
    pub fn validate(&self) -> Result<(), CalculatorConfigError> {
        if !positive_finite(self.cups_per_liter) {
            return Err(CalculatorConfigError::InvalidCupsPerLiter(
                self.cups_per_liter,
            ));
        }
        if !positive_finite(self.liters_per_bag) {
            return Err(CalculatorConfigError::InvalidLitersPerBag(
                self.liters_per_bag,
            ));
        }
        if !positive_finite(self.preview_max_dimension) {
            return Err(CalculatorConfigError::InvalidPreviewMaxDimension(
                self.preview_max_dimension,
            ));
        }
        Ok(())
    }
}
