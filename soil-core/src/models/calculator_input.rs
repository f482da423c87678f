use serde::{Deserialize, Serialize};

use super::{ContainerShape, LengthUnit};

/// One snapshot of the calculator form.
///
/// Numeric fields hold the text exactly as typed. They may be empty,
/// non-numeric, zero or negative; the calculations treat anything that does
/// not parse to a usable number as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInput {
    pub shape: ContainerShape,
    pub unit: LengthUnit,
    pub length: String,
    /// Width of a tank, or the diameter of a jar.
    pub width: String,
    pub height: String,
    pub soil_depth: String,
    /// Optional price per liter of soil. Empty means "not set".
    pub cost_per_liter: String,
}

impl CalculatorInput {
    /// Creates an empty form for the given shape and unit.
    pub fn new(
        shape: ContainerShape,
        unit: LengthUnit,
    ) -> Self {
        Self {
            shape,
            unit,
            ..Default::default()
        }
    }
}
