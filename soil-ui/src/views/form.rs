use soil_core::{ContainerShape, LengthUnit};

use crate::state::{CalculatorState, Field};

/// Lists the visible fields for the current shape with their labels.
pub fn format_form(state: &CalculatorState) -> String {
    let mut lines = vec![
        choice_row("Shape:", ContainerShape::all(), state.shape, |s| s.label()),
        choice_row("Units:", LengthUnit::all(), state.unit, |u| u.label()),
    ];

    for field in Field::dimensions_for(state.shape)
        .iter()
        .chain(std::iter::once(&Field::CostPerLiter))
    {
        lines.push(field_row(
            &field.label(state.shape, state.unit),
            state.field(*field),
        ));
    }

    lines.join("\n")
}

/// A labelled field row, blank values shown as `_`.
fn field_row(
    label: &str,
    value: &str,
) -> String {
    let shown = if value.trim().is_empty() { "_" } else { value };
    format!("{:26} {}", format!("{label}:"), shown)
}

/// A row of options with the selected one bracketed.
fn choice_row<T: Copy + PartialEq>(
    label: &str,
    options: &[T],
    selected: T,
    name: impl Fn(&T) -> &'static str,
) -> String {
    let choices = options
        .iter()
        .map(|option| {
            if *option == selected {
                format!("[{}]", name(option))
            } else {
                format!(" {} ", name(option))
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{label:26} {choices}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rectangular_form_shows_length_and_width() {
        let mut state = CalculatorState::new();
        state.set_field(Field::Length, "20");

        let text = format_form(&state);

        assert!(text.contains("Length (cm):"));
        assert!(text.contains("Width (cm):"));
        assert!(text.contains("[Rectangular Tank]"));
        assert!(text.contains("[Centimeters]"));
    }

    #[test]
    fn cylindrical_form_shows_diameter_only() {
        let mut state = CalculatorState::new();
        state.set_shape(ContainerShape::Cylindrical);
        state.set_unit(LengthUnit::Inches);

        let text = format_form(&state);

        assert!(text.contains("Diameter (in):"));
        assert!(!text.contains("Length"));
        assert!(text.contains("[Cylindrical Jar]"));
    }

    #[test]
    fn field_row_marks_blank_values() {
        assert_eq!(field_row("Height (cm)", ""), format!("{:26} _", "Height (cm):"));
        assert_eq!(field_row("Height (cm)", "15"), format!("{:26} 15", "Height (cm):"));
    }
}
