//! Soil volume estimate for a container.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Convert length, width and soil depth to centimeters |
//! | 2    | Soil depth must be a positive number, else no result |
//! | 3    | Footprint: `length × width` for tanks, `π × (width / 2)²` for jars |
//! | 4    | Volume in cm³: footprint × soil depth |
//! | 5    | Liters: cm³ / 1000 |
//! | 6    | Cups: liters × cups per liter (4.22675) |
//! | 7    | Bags: liters / liters per bag (2.5) |
//! | 8    | Cost: liters × price per liter, only when a positive price is set |
//!
//! Incomplete input never raises an error. The calculator returns `None`
//! and the caller keeps showing its prompt.
//!
//! # Example
//!
//! ```
//! use soil_core::{CalculatorInput, ContainerShape, LengthUnit, compute_volume};
//!
//! let input = CalculatorInput {
//!     length: "20".into(),
//!     width: "10".into(),
//!     height: "15".into(),
//!     soil_depth: "5".into(),
//!     ..CalculatorInput::new(ContainerShape::Rectangular, LengthUnit::Centimeters)
//! };
//!
//! let result = compute_volume(&input).unwrap();
//!
//! assert!((result.liters - 1.0).abs() < 1e-9);
//! assert!((result.bags - 0.4).abs() < 1e-9);
//! assert_eq!(result.cost, None);
//! ```

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::calculations::common::parse_positive;
use crate::{
    CalculatorConfig, CalculatorConfigError, CalculatorInput, CalculatorResult, ContainerShape,
    LengthUnit,
};

const CM3_PER_LITER: f64 = 1000.0;

/// Computes the soil estimate with the default constants.
///
/// See [`SoilVolumeCalculator::compute_volume`].
pub fn compute_volume(input: &CalculatorInput) -> Option<CalculatorResult> {
    SoilVolumeCalculator::default().compute_volume(input)
}

/// Soil calculator bound to a set of conversion constants.
///
/// # Example
///
/// ```
/// use soil_core::{
///     CalculatorConfig, CalculatorInput, ContainerShape, LengthUnit, SoilVolumeCalculator,
/// };
///
/// let calculator = SoilVolumeCalculator::new(CalculatorConfig {
///     liters_per_bag: 5.0,
///     ..Default::default()
/// })
/// .unwrap();
///
/// let input = CalculatorInput {
///     width: "10".into(),
///     soil_depth: "5".into(),
///     ..CalculatorInput::new(ContainerShape::Cylindrical, LengthUnit::Centimeters)
/// };
///
/// let result = calculator.compute_volume(&input).unwrap();
/// assert!((result.liters - 0.39269908).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SoilVolumeCalculator {
    config: CalculatorConfig,
}

impl SoilVolumeCalculator {
    /// Binds the calculator to `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`CalculatorConfigError`] when a constant is zero, negative
    /// or not finite.
    pub fn new(config: CalculatorConfig) -> Result<Self, CalculatorConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Estimates the soil needed for one form snapshot.
    ///
    /// Returns `None` unless the soil depth is a positive number and the
    /// footprint is complete: length and width for a rectangular tank, the
    /// diameter (width field) for a cylindrical jar. Height does not affect
    /// the volume.
    ///
    /// The cost is present only when the price per liter is a positive
    /// number.
    ///
    /// # Example
    ///
    /// ```
    /// use soil_core::{CalculatorInput, ContainerShape, LengthUnit, SoilVolumeCalculator};
    ///
    /// let calculator = SoilVolumeCalculator::default();
    ///
    /// // 10 × 5 × 2 inches is 25.4 × 12.7 × 5.08 cm.
    /// let input = CalculatorInput {
    ///     length: "10".into(),
    ///     width: "5".into(),
    ///     soil_depth: "2".into(),
    ///     cost_per_liter: "3.50".into(),
    ///     ..CalculatorInput::new(ContainerShape::Rectangular, LengthUnit::Inches)
    /// };
    ///
    /// let result = calculator.compute_volume(&input).unwrap();
    /// assert!((result.liters - 1.6387064).abs() < 1e-6);
    /// assert!((result.cost.unwrap() - 1.6387064 * 3.5).abs() < 1e-6);
    ///
    /// // No soil depth, no estimate.
    /// let empty_depth = CalculatorInput {
    ///     soil_depth: String::new(),
    ///     ..input
    /// };
    /// assert_eq!(calculator.compute_volume(&empty_depth), None);
    /// ```
    pub fn compute_volume(
        &self,
        input: &CalculatorInput,
    ) -> Option<CalculatorResult> {
        let Some(soil_depth) = self.dimension_cm(&input.soil_depth, input.unit) else {
            debug!(
                soil_depth = %input.soil_depth,
                "soil depth missing or not positive; no estimate"
            );
            return None;
        };

        let Some(footprint) = self.footprint_cm2(input) else {
            debug!(
                shape = input.shape.as_str(),
                length = %input.length,
                width = %input.width,
                "container footprint incomplete; no estimate"
            );
            return None;
        };

        let liters = footprint * soil_depth / CM3_PER_LITER;
        trace!(liters, shape = input.shape.as_str(), "computed soil volume");

        Some(CalculatorResult {
            liters,
            cups: self.cups(liters),
            bags: self.bags(liters),
            cost: self.cost(liters, &input.cost_per_liter),
        })
    }

    /// Reads a positive dimension and converts it to centimeters.
    fn dimension_cm(
        &self,
        text: &str,
        unit: LengthUnit,
    ) -> Option<f64> {
        parse_positive(text).map(|value| unit.to_cm(value))
    }

    /// Area of the container floor in cm².
    fn footprint_cm2(
        &self,
        input: &CalculatorInput,
    ) -> Option<f64> {
        match input.shape {
            ContainerShape::Rectangular => {
                let length = self.dimension_cm(&input.length, input.unit)?;
                let width = self.dimension_cm(&input.width, input.unit)?;
                Some(length * width)
            }
            ContainerShape::Cylindrical => {
                let diameter = self.dimension_cm(&input.width, input.unit)?;
                let radius = diameter / 2.0;
                Some(PI * radius * radius)
            }
        }
    }

    fn cups(
        &self,
        liters: f64,
    ) -> f64 {
        liters * self.config.cups_per_liter
    }

    fn bags(
        &self,
        liters: f64,
    ) -> f64 {
        liters / self.config.liters_per_bag
    }

    /// Total price, or `None` when no positive price per liter is set.
    fn cost(
        &self,
        liters: f64,
        cost_per_liter: &str,
    ) -> Option<f64> {
        parse_positive(cost_per_liter).map(|price| liters * price)
    }
}
