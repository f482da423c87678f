use soil_core::{CalculatorConfig, CalculatorResult};

use crate::utils::{format_currency, format_fixed, format_trimmed};

const PROMPT: &str = "Enter your container dimensions to calculate soil volume.";
const SETTLING_TIP: &str = "Tip: Add 10–15% extra for decoration and settling.";

/// Formats the soil estimate, or the prompt when there is none.
pub fn format_result(
    result: Option<&CalculatorResult>,
    config: &CalculatorConfig,
) -> String {
    let Some(r) = result else {
        return PROMPT.to_string();
    };

    let mut lines = vec![
        "Estimated Soil Needed:".to_string(),
        format!(
            "{} liters ≈ {} cups ≈ {} soil bags ({} L each)",
            format_fixed(r.liters, 2),
            format_fixed(r.cups, 1),
            format_fixed(r.bags, 2),
            format_trimmed(config.liters_per_bag),
        ),
    ];
    if let Some(cost) = r.cost {
        lines.push(format!("Estimated Soil Cost: {}", format_currency(cost)));
    }
    lines.push(SETTLING_TIP.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn one_liter() -> CalculatorResult {
        CalculatorResult {
            liters: 1.0,
            cups: 4.22675,
            bags: 0.4,
            cost: None,
        }
    }

    #[test]
    fn missing_result_shows_prompt() {
        let text = format_result(None, &CalculatorConfig::default());

        assert_eq!(text, PROMPT);
    }

    #[test]
    fn result_uses_fixed_places_per_quantity() {
        let text = format_result(Some(&one_liter()), &CalculatorConfig::default());

        assert_eq!(
            text,
            "Estimated Soil Needed:\n\
             1.00 liters ≈ 4.2 cups ≈ 0.40 soil bags (2.5 L each)\n\
             Tip: Add 10–15% extra for decoration and settling."
        );
    }

    #[test]
    fn cost_line_only_when_cost_is_set() {
        let with_cost = CalculatorResult {
            liters: 2.0,
            cups: 8.4535,
            bags: 0.8,
            cost: Some(7.0),
        };

        let text = format_result(Some(&with_cost), &CalculatorConfig::default());
        assert!(text.contains("Estimated Soil Cost: $7.00"));

        let text = format_result(Some(&one_liter()), &CalculatorConfig::default());
        assert!(!text.contains("Cost"));
    }

    #[test]
    fn bag_size_follows_config() {
        let config = CalculatorConfig {
            liters_per_bag: 10.0,
            ..Default::default()
        };

        let text = format_result(Some(&one_liter()), &config);

        assert!(text.contains("(10 L each)"));
    }
}
