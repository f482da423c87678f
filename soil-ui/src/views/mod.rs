//! Text views for the soil calculator.
//!
//! - `form` - Shape, unit and the labelled input fields
//! - `result` - Soil estimate or the prompt to enter dimensions
//! - `preview` - Proportional container drawing with fill level
//!
//! Each view is a pure function from the form snapshot to text.

mod form;
mod preview;
mod result;

pub use form::format_form;
pub use preview::{PreviewOutline, format_preview};
pub use result::format_result;

use soil_core::SoilVolumeCalculator;

use crate::state::CalculatorState;

/// Renders form, estimate and preview for the current state.
pub fn render_calculator(
    calculator: &SoilVolumeCalculator,
    state: &CalculatorState,
) -> String {
    let input = state.input();
    let result = calculator.compute_volume(&input);
    let preview = calculator.preview(&input);

    [
        format_form(state),
        format_result(result.as_ref(), calculator.config()),
        format_preview(&preview, state.shape, calculator.config()),
    ]
    .join(&format!("\n{}\n", "─".repeat(50)))
}
