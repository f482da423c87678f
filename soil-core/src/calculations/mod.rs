//! Soil calculator operations.
//!
//! The calculator is a set of pure functions over one [`CalculatorInput`]
//! snapshot. Callers recompute on every form change; nothing is cached.
//!
//! [`CalculatorInput`]: crate::CalculatorInput

pub mod common;
pub mod preview;
pub mod volume;

pub use preview::{compute_aspect, compute_fill_percent, compute_preview};
pub use volume::{SoilVolumeCalculator, compute_volume};
