use soil_core::{CalculatorConfig, ContainerShape, PreviewGeometry};

use crate::utils::format_fixed;

/// Character cells used for a side at the configured maximum size.
const MAX_COLUMNS: f64 = 24.0;
const MAX_ROWS: f64 = 10.0;

/// How the container outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOutline {
    /// Square corners.
    Tank,
    /// Rounded sides.
    Jar,
}

impl PreviewOutline {
    pub fn for_shape(shape: ContainerShape) -> Self {
        match shape {
            ContainerShape::Rectangular => Self::Tank,
            ContainerShape::Cylindrical => Self::Jar,
        }
    }

    fn walls(&self) -> (char, char) {
        match self {
            Self::Tank => ('|', '|'),
            Self::Jar => ('(', ')'),
        }
    }

    fn rim(&self) -> (char, char) {
        match self {
            Self::Tank => ('+', '+'),
            Self::Jar => ('.', '.'),
        }
    }
}

/// Cells needed for `size` when `max_size` spans `max_cells`. At least one.
fn cells(
    size: f64,
    max_size: f64,
    max_cells: f64,
) -> usize {
    let scaled = (size / max_size * max_cells).round();
    if scaled.is_finite() && scaled >= 1.0 {
        scaled as usize
    } else {
        1
    }
}

/// Draws the container outline with its soil level and a caption.
pub fn format_preview(
    preview: &PreviewGeometry,
    shape: ContainerShape,
    config: &CalculatorConfig,
) -> String {
    let outline = PreviewOutline::for_shape(shape);
    let columns = cells(
        preview.display_width,
        config.preview_max_dimension,
        MAX_COLUMNS,
    );
    let rows = cells(
        preview.display_height,
        config.preview_max_dimension,
        MAX_ROWS,
    );
    let filled = ((preview.fill_percent / 100.0) * rows as f64).round() as usize;

    let (left, right) = outline.walls();
    let (rim_left, rim_right) = outline.rim();

    let mut lines = vec!["Container Preview".to_string()];
    lines.push(format!("{rim_left}{}{rim_right}", "-".repeat(columns)));
    for row in 0..rows {
        let fill = if row >= rows - filled.min(rows) { '#' } else { ' ' };
        lines.push(format!("{left}{}{right}", fill.to_string().repeat(columns)));
    }
    lines.push(format!("'{}'", "-".repeat(columns)));
    lines.push(format!(
        "Estimated substrate fill level ({}%)",
        format_fixed(preview.fill_percent, 0)
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn geometry(
        fill_percent: f64,
        display_width: f64,
        display_height: f64,
    ) -> PreviewGeometry {
        PreviewGeometry {
            fill_percent,
            display_width,
            display_height,
        }
    }

    #[test]
    fn empty_tank_is_a_full_size_square() {
        let text = format_preview(
            &geometry(0.0, 180.0, 180.0),
            ContainerShape::Rectangular,
            &CalculatorConfig::default(),
        );
        let lines: Vec<&str> = text.lines().collect();

        // title + rim + 10 rows + base + caption
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[1], format!("+{}+", "-".repeat(24)));
        assert!(!text.contains('#'));
        assert_eq!(lines[13], "Estimated substrate fill level (0%)");
    }

    #[test]
    fn half_full_jar_fills_bottom_rows() {
        let text = format_preview(
            &geometry(50.0, 90.0, 180.0),
            ContainerShape::Cylindrical,
            &CalculatorConfig::default(),
        );
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], format!("({})", " ".repeat(12)));
        assert_eq!(lines[11], format!("({})", "#".repeat(12)));
        assert_eq!(lines.iter().filter(|l| l.contains('#')).count(), 5);
        assert_eq!(lines[13], "Estimated substrate fill level (50%)");
    }

    #[test]
    fn caption_rounds_fill_to_whole_percent() {
        let text = format_preview(
            &geometry(100.0 / 3.0, 90.0, 135.0),
            ContainerShape::Rectangular,
            &CalculatorConfig::default(),
        );

        assert!(text.ends_with("Estimated substrate fill level (33%)"));
    }

    #[test]
    fn tiny_sides_still_get_one_cell() {
        assert_eq!(cells(0.5, 180.0, 24.0), 1);
        assert_eq!(cells(180.0, 180.0, 24.0), 24);
    }
}
