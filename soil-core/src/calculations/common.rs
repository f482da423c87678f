//! Shared helpers for reading form text and rounding derived values.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Trims whitespace and drops `,` thousands separators.
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Reads a form field as a finite number.
///
/// Empty text, non-numeric text and non-finite values (`inf`, `NaN`) all
/// yield `None`. Parsing never reports an error; a field that cannot be
/// read is simply missing.
///
/// # Examples
///
/// ```
/// use soil_core::calculations::common::parse_measurement;
///
/// assert_eq!(parse_measurement(" 12.5 "), Some(12.5));
/// assert_eq!(parse_measurement("1,250"), Some(1250.0));
/// assert_eq!(parse_measurement("-3"), Some(-3.0));
/// assert_eq!(parse_measurement(""), None);
/// assert_eq!(parse_measurement("abc"), None);
/// assert_eq!(parse_measurement("inf"), None);
/// ```
pub fn parse_measurement(s: &str) -> Option<f64> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Reads a form field as a finite number strictly greater than zero.
///
/// ```
/// use soil_core::calculations::common::parse_positive;
///
/// assert_eq!(parse_positive("4"), Some(4.0));
/// assert_eq!(parse_positive("0"), None);
/// assert_eq!(parse_positive("-4"), None);
/// ```
pub fn parse_positive(s: &str) -> Option<f64> {
    parse_measurement(s).filter(|value| *value > 0.0)
}

/// Rounds a value to `dp` decimal places, halves away from zero.
///
/// Returns `None` for values that have no decimal representation
/// (non-finite or out of range).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use soil_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(7.0, 2), Some(dec!(7.00)));
/// assert_eq!(round_half_up(0.39269908, 2), Some(dec!(0.39)));
/// assert_eq!(round_half_up(f64::NAN, 2), None);
/// ```
pub fn round_half_up(
    value: f64,
    dp: u32,
) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}
