//! Container preview: fill level and a proportional outline.
//!
//! Both values are drawing aids. They read the raw form text without unit
//! conversion because only ratios matter, and they never withhold output:
//! missing fields fall back to an empty container or a unit square.

use tracing::trace;

use crate::calculations::SoilVolumeCalculator;
use crate::calculations::common::{parse_measurement, parse_positive};
use crate::{CalculatorInput, PreviewBox, PreviewGeometry};

/// Share of the container height filled with soil, in `[0, 100]`.
///
/// See [`SoilVolumeCalculator::fill_percent`].
pub fn compute_fill_percent(
    height: &str,
    soil_depth: &str,
) -> f64 {
    SoilVolumeCalculator::default().fill_percent(height, soil_depth)
}

/// Preview outline scaled to the default maximum side of 180.
///
/// See [`SoilVolumeCalculator::aspect`].
pub fn compute_aspect(
    length: &str,
    width: &str,
    height: &str,
) -> PreviewBox {
    SoilVolumeCalculator::default().aspect(length, width, height)
}

/// Fill level and outline for one form snapshot, with default constants.
pub fn compute_preview(input: &CalculatorInput) -> PreviewGeometry {
    SoilVolumeCalculator::default().preview(input)
}

/// First positive value among `preferred` and `fallback`, else 1.
fn basis(
    preferred: &str,
    fallback: &str,
) -> f64 {
    parse_positive(preferred)
        .or_else(|| parse_positive(fallback))
        .unwrap_or(1.0)
}

impl SoilVolumeCalculator {
    /// Share of the container height filled with soil.
    ///
    /// Returns 0 unless the height is a positive number and the soil depth
    /// is a number. The ratio is clamped to `[0, 100]`, so soil deeper than
    /// the container reads as exactly full and a negative depth as empty.
    ///
    /// # Example
    ///
    /// ```
    /// use soil_core::compute_fill_percent;
    ///
    /// assert_eq!(compute_fill_percent("20", "5"), 25.0);
    /// assert_eq!(compute_fill_percent("20", "35"), 100.0);
    /// assert_eq!(compute_fill_percent("", "5"), 0.0);
    /// assert_eq!(compute_fill_percent("20", "-5"), 0.0);
    /// ```
    pub fn fill_percent(
        &self,
        height: &str,
        soil_depth: &str,
    ) -> f64 {
        let (Some(height), Some(soil_depth)) =
            (parse_positive(height), parse_measurement(soil_depth))
        else {
            return 0.0;
        };

        let percent = soil_depth / height * 100.0;
        if percent <= 0.0 {
            0.0
        } else {
            percent.min(100.0)
        }
    }

    /// Outline of the container seen from the front.
    ///
    /// The drawn width is the width field (the diameter of a jar), falling
    /// back to the length; the length, falling back to the width, only takes
    /// part in choosing the scale. Missing sides count as 1. The longest of
    /// the three sides is scaled to the configured maximum.
    ///
    /// # Example
    ///
    /// ```
    /// use soil_core::compute_aspect;
    ///
    /// let outline = compute_aspect("40", "20", "30");
    /// assert_eq!(outline.display_width, 90.0);
    /// assert_eq!(outline.display_height, 135.0);
    ///
    /// // Nothing entered yet: a square at full size.
    /// let empty = compute_aspect("", "", "");
    /// assert_eq!(empty.display_width, 180.0);
    /// assert_eq!(empty.display_height, 180.0);
    /// ```
    pub fn aspect(
        &self,
        length: &str,
        width: &str,
        height: &str,
    ) -> PreviewBox {
        let length_basis = basis(length, width);
        let width_basis = basis(width, length);
        let height_basis = parse_positive(height).unwrap_or(1.0);

        let longest = length_basis.max(width_basis).max(height_basis);
        let scale = self.config().preview_max_dimension / longest;
        trace!(length_basis, width_basis, height_basis, scale, "scaled preview outline");

        PreviewBox {
            display_width: width_basis * scale,
            display_height: height_basis * scale,
        }
    }

    /// Fill level and outline for one form snapshot.
    pub fn preview(
        &self,
        input: &CalculatorInput,
    ) -> PreviewGeometry {
        let outline = self.aspect(&input.length, &input.width, &input.height);

        PreviewGeometry {
            fill_percent: self.fill_percent(&input.height, &input.soil_depth),
            display_width: outline.display_width,
            display_height: outline.display_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CalculatorConfig, ContainerShape, LengthUnit};

    const TOLERANCE: f64 = 1e-9;

    // =========================================================================
    // fill_percent tests
    // =========================================================================

    #[test]
    fn fill_percent_is_depth_over_height() {
        assert_eq!(compute_fill_percent("15", "5"), 5.0 / 15.0 * 100.0);
        assert_eq!(compute_fill_percent("8", "2"), 25.0);
    }

    #[test]
    fn fill_percent_is_exactly_full_when_depth_reaches_height() {
        assert_eq!(compute_fill_percent("10", "10"), 100.0);
        assert_eq!(compute_fill_percent("10", "10.5"), 100.0);
        assert_eq!(compute_fill_percent("0.3", "900"), 100.0);
    }

    #[test]
    fn fill_percent_is_zero_without_a_usable_height() {
        for height in ["", "0", "-10", "tall", "NaN"] {
            assert_eq!(
                compute_fill_percent(height, "5"),
                0.0,
                "height {height:?} should give an empty preview"
            );
        }
    }

    #[test]
    fn fill_percent_is_zero_without_a_numeric_depth() {
        assert_eq!(compute_fill_percent("10", ""), 0.0);
        assert_eq!(compute_fill_percent("10", "deep"), 0.0);
    }

    #[test]
    fn fill_percent_accepts_zero_depth() {
        assert_eq!(compute_fill_percent("10", "0"), 0.0);
    }

    #[test]
    fn fill_percent_floors_negative_depth_at_zero() {
        let percent = compute_fill_percent("10", "-4");

        assert_eq!(percent, 0.0);
        assert!(percent.is_sign_positive());
    }

    #[test]
    fn fill_percent_ignores_units() {
        // Same ratio whatever unit the numbers were typed in.
        assert_eq!(compute_fill_percent("12", "3"), 25.0);
    }

    // =========================================================================
    // aspect tests
    // =========================================================================

    #[test]
    fn aspect_scales_longest_side_to_maximum() {
        let outline = compute_aspect("60", "30", "45");

        assert!((outline.display_width - 90.0).abs() < TOLERANCE);
        assert!((outline.display_height - 135.0).abs() < TOLERANCE);
    }

    #[test]
    fn aspect_tall_container_is_full_height() {
        let outline = compute_aspect("10", "10", "40");

        assert!((outline.display_height - 180.0).abs() < TOLERANCE);
        assert!((outline.display_width - 45.0).abs() < TOLERANCE);
    }

    #[test]
    fn aspect_preserves_width_to_height_ratio() {
        let outline = compute_aspect("25", "16", "12");

        let ratio = outline.display_width / outline.display_height;
        assert!((ratio - 16.0 / 12.0).abs() < TOLERANCE);
        assert!(outline.display_width <= 180.0 && outline.display_height <= 180.0);
    }

    #[test]
    fn aspect_width_falls_back_to_length() {
        let outline = compute_aspect("30", "", "15");

        assert!((outline.display_width - 180.0).abs() < TOLERANCE);
        assert!((outline.display_height - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn aspect_length_falls_back_to_width() {
        // A jar: only the diameter and height are entered.
        let outline = compute_aspect("", "12", "24");

        assert!((outline.display_width - 90.0).abs() < TOLERANCE);
        assert!((outline.display_height - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn aspect_long_tank_shrinks_the_drawn_width() {
        // Length is not drawn but still sets the scale.
        let outline = compute_aspect("90", "30", "30");

        assert!((outline.display_width - 60.0).abs() < TOLERANCE);
        assert!((outline.display_height - 60.0).abs() < TOLERANCE);
    }

    #[test]
    fn aspect_missing_height_counts_as_one() {
        let outline = compute_aspect("", "", "");
        assert_eq!(outline.display_width, 180.0);
        assert_eq!(outline.display_height, 180.0);

        let flat = compute_aspect("", "2", "-3");
        assert!((flat.display_width - 180.0).abs() < TOLERANCE);
        assert!((flat.display_height - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn aspect_uses_configured_maximum() {
        let calculator = SoilVolumeCalculator::new(CalculatorConfig {
            preview_max_dimension: 100.0,
            ..Default::default()
        })
        .unwrap();

        let outline = calculator.aspect("50", "50", "25");

        assert!((outline.display_width - 100.0).abs() < TOLERANCE);
        assert!((outline.display_height - 50.0).abs() < TOLERANCE);
    }

    // =========================================================================
    // preview tests
    // =========================================================================

    #[test]
    fn preview_combines_fill_and_outline() {
        let input = CalculatorInput {
            length: "20".into(),
            width: "10".into(),
            height: "15".into(),
            soil_depth: "5".into(),
            ..CalculatorInput::new(ContainerShape::Rectangular, LengthUnit::Inches)
        };

        let preview = compute_preview(&input);

        assert!((preview.fill_percent - 100.0 / 3.0).abs() < TOLERANCE);
        assert!((preview.display_width - 90.0).abs() < TOLERANCE);
        assert!((preview.display_height - 135.0).abs() < TOLERANCE);
    }

    #[test]
    fn preview_of_empty_form_is_empty_square() {
        let preview = compute_preview(&CalculatorInput::default());

        assert_eq!(
            preview,
            PreviewGeometry {
                fill_percent: 0.0,
                display_width: 180.0,
                display_height: 180.0,
            }
        );
    }
}
