//! Deterministic tick-value formatting.
//!
//! The decimal count follows the tick interval so every label on one axis
//! carries the same precision; magnitudes outside a comfortable fixed-point
//! band switch to exponential notation.

/// Magnitude at or above which labels switch to exponential notation.
const EXPONENT_UPPER: f64 = 1e6;
/// Nonzero magnitude below which labels switch to exponential notation.
const EXPONENT_LOWER: f64 = 1e-4;

/// Decimal places needed to print multiples of `interval` exactly.
fn interval_decimals(interval: f64) -> usize {
    let mut decimals = 0usize;
    let mut scaled = interval;
    while decimals < 12 && (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

fn trim_mantissa(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = if mantissa.contains('.') {
                mantissa.trim_end_matches('0').trim_end_matches('.')
            } else {
                mantissa
            };
            format!("{mantissa}e{exponent}")
        }
        None => text.to_owned(),
    }
}

/// Formats one tick value for an axis with the given tick interval.
///
/// Values within rounding noise of zero print as `0`, never in exponential
/// notation.
#[must_use]
pub fn format_tick(value: f64, interval: f64) -> String {
    if value == 0.0 || value.abs() < interval.abs() * 1e-9 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        return trim_mantissa(&format!("{value:.2e}"));
    }

    let decimals = interval_decimals(interval);
    format!("{value:.decimals$}")
}
