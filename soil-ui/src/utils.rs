use rust_decimal::Decimal;
use soil_core::calculations::common::round_half_up;

/// Formats a value with exactly `dp` decimal places, rounding halves away
/// from zero.
///
/// Values with no decimal representation fall back to `"—"`.
pub fn format_fixed(
    value: f64,
    dp: u32,
) -> String {
    match round_half_up(value, dp) {
        Some(rounded) => format!("{:.*}", dp as usize, rounded),
        None => {
            tracing::warn!(value, "value cannot be shown as a decimal");
            "—".to_string()
        }
    }
}

/// Formats an amount of money as dollars and cents, e.g. `$7.00`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}

/// Drops insignificant trailing zeros, e.g. `2.50` becomes `2.5`.
pub fn format_trimmed(value: f64) -> String {
    round_half_up(value, 4)
        .map(|d: Decimal| d.normalize().to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_fixed_pads_to_requested_places() {
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(4.22675, 1), "4.2");
        assert_eq!(format_fixed(0.4, 2), "0.40");
    }

    #[test]
    fn format_fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(62.5, 0), "63");
    }

    #[test]
    fn format_fixed_zero_places_has_no_point() {
        assert_eq!(format_fixed(33.333, 0), "33");
    }

    #[test]
    fn format_fixed_handles_non_finite() {
        assert_eq!(format_fixed(f64::NAN, 2), "—");
    }

    #[test]
    fn format_currency_uses_dollars_and_cents() {
        assert_eq!(format_currency(7.0), "$7.00");
        assert_eq!(format_currency(12.5), "$12.50");
    }

    #[test]
    fn format_trimmed_drops_trailing_zeros() {
        assert_eq!(format_trimmed(2.5), "2.5");
        assert_eq!(format_trimmed(180.0), "180");
    }
}
