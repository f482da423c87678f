use serde::{Deserialize, Serialize};

/// Soil estimate for a container.
///
/// Only produced when the dimensions are sufficient; otherwise the
/// calculator returns `None` and the caller shows its prompt instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub liters: f64,
    /// US cups.
    pub cups: f64,
    /// Retail soil bags of the configured size.
    pub bags: f64,
    /// `None` when no valid price per liter was entered. A computed cost is
    /// never replaced by zero.
    pub cost: Option<f64>,
}

/// Proportional drawing of the container and its fill level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewGeometry {
    /// Share of the container height taken by soil, in `[0, 100]`.
    pub fill_percent: f64,
    pub display_width: f64,
    pub display_height: f64,
}

/// Outline of the container preview, scaled so its longest side equals the
/// configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewBox {
    pub display_width: f64,
    pub display_height: f64,
}
