//! Nice-number rounding families.
//!
//! Every helper normalizes its argument by a power of ten so the mantissa
//! falls in `[1, 10)`, snaps the mantissa to the family's step set, then
//! re-applies sign and magnitude. Negative arguments obey sign symmetry:
//! `round_up(-x) == -round_down(x)`.

/// Relative slack when comparing a mantissa against a step boundary, so that
/// values already sitting on a step are not pushed to the next one.
const STEP_TOLERANCE: f64 = 1e-10;

/// Absolute magnitude below which a rounded result snaps exactly to zero.
pub(crate) const ZERO_SNAP: f64 = 1e-14;

fn split_magnitude(x: f64) -> (f64, f64) {
    let exponent = x.abs().log10().floor();
    let power = 10f64.powi(exponent as i32);
    (x.abs() / power, power)
}

fn snap_up(mantissa: f64, steps: &[f64]) -> f64 {
    for &step in steps {
        if mantissa <= step * (1.0 + STEP_TOLERANCE) {
            return step;
        }
    }
    10.0
}

fn snap_down(mantissa: f64, steps: &[f64]) -> f64 {
    for &step in steps.iter().rev() {
        if mantissa >= step * (1.0 - STEP_TOLERANCE) {
            return step;
        }
    }
    steps[0]
}

const DECIMAL_STEPS: [f64; 3] = [1.0, 2.0, 5.0];
const EVEN_STEPS: [f64; 4] = [2.0, 4.0, 6.0, 8.0];
const SEMI_DECIMAL_STEPS: [f64; 2] = [1.0, 5.0];

fn is_zeroish(x: f64) -> bool {
    x == 0.0 || x.abs() < ZERO_SNAP
}

/// Round away from zero to the nearest 1, 2, 5, or 10 times a power of ten.
#[must_use]
pub fn round_up_decimal(x: f64) -> f64 {
    if is_zeroish(x) {
        return 0.0;
    }
    if x < 0.0 {
        return -round_down_decimal(-x);
    }
    let (mantissa, power) = split_magnitude(x);
    snap_up(mantissa, &DECIMAL_STEPS) * power
}

/// Round toward zero to the nearest 1, 2, 5, or 10 times a power of ten.
#[must_use]
pub fn round_down_decimal(x: f64) -> f64 {
    if is_zeroish(x) {
        return 0.0;
    }
    if x < 0.0 {
        return -round_up_decimal(-x);
    }
    let (mantissa, power) = split_magnitude(x);
    snap_down(mantissa, &DECIMAL_STEPS) * power
}

/// Round away from zero to the nearest 2, 4, 6, 8, or 10 times a power of ten.
#[must_use]
pub fn round_up_even(x: f64) -> f64 {
    if is_zeroish(x) {
        return 0.0;
    }
    if x < 0.0 {
        return -round_down_even(-x);
    }
    let (mantissa, power) = split_magnitude(x);
    snap_up(mantissa, &EVEN_STEPS) * power
}

/// Round toward zero to the nearest 1, 2, 4, 6, or 8 times a power of ten.
///
/// The downward direction admits 1 so that mantissas below 2 have a target
/// on the same decade.
#[must_use]
pub fn round_down_even(x: f64) -> f64 {
    if is_zeroish(x) {
        return 0.0;
    }
    if x < 0.0 {
        return -round_up_even(-x);
    }
    let (mantissa, power) = split_magnitude(x);
    if mantissa < 2.0 * (1.0 - STEP_TOLERANCE) {
        return power;
    }
    snap_down(mantissa, &EVEN_STEPS) * power
}

/// Round away from zero to the nearest 1, 5, or 10 times a power of ten.
#[must_use]
pub fn round_up_semi_decimal(x: f64) -> f64 {
    if is_zeroish(x) {
        return 0.0;
    }
    if x < 0.0 {
        return -round_down_semi_decimal(-x);
    }
    let (mantissa, power) = split_magnitude(x);
    snap_up(mantissa, &SEMI_DECIMAL_STEPS) * power
}

/// Downward counterpart of [`round_up_semi_decimal`], used for pre-rounding
/// the lower bound with `steps = 5`.
pub(crate) fn round_down_semi_decimal(x: f64) -> f64 {
    if is_zeroish(x) {
        return 0.0;
    }
    if x < 0.0 {
        return -round_up_semi_decimal(-x);
    }
    let (mantissa, power) = split_magnitude(x);
    snap_down(mantissa, &SEMI_DECIMAL_STEPS) * power
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_round_up_covers_each_band() {
        assert_eq!(round_up_decimal(1.0), 1.0);
        assert_eq!(round_up_decimal(1.3), 2.0);
        assert_eq!(round_up_decimal(3.2), 5.0);
        assert_eq!(round_up_decimal(7.0), 10.0);
        assert_eq!(round_up_decimal(0.034), 0.05);
        assert_eq!(round_up_decimal(230.0), 500.0);
    }

    #[test]
    fn decimal_round_down_covers_each_band() {
        assert_eq!(round_down_decimal(1.7), 1.0);
        assert_eq!(round_down_decimal(4.9), 2.0);
        assert_eq!(round_down_decimal(9.5), 5.0);
        assert_eq!(round_down_decimal(0.7), 0.5);
    }

    #[test]
    fn values_on_a_step_are_fixed_points() {
        for value in [0.2, 1.0, 2.0, 5.0, 10.0, 50.0, 200.0] {
            assert_eq!(round_up_decimal(value), value, "up({value})");
            assert_eq!(round_down_decimal(value), value, "down({value})");
        }
    }

    #[test]
    fn even_family_uses_two_step_bands() {
        assert_eq!(round_up_even(1.1), 2.0);
        assert_eq!(round_up_even(3.0), 4.0);
        assert_eq!(round_up_even(5.5), 6.0);
        assert_eq!(round_up_even(6.2), 8.0);
        assert_eq!(round_up_even(8.4), 10.0);
        assert_eq!(round_down_even(9.9), 8.0);
        assert_eq!(round_down_even(1.5), 1.0);
    }

    #[test]
    fn semi_decimal_family_skips_two() {
        assert_eq!(round_up_semi_decimal(1.2), 5.0);
        assert_eq!(round_up_semi_decimal(5.5), 10.0);
        assert_eq!(round_up_semi_decimal(0.9), 1.0);
        assert_eq!(round_down_semi_decimal(4.9), 1.0);
        assert_eq!(round_down_semi_decimal(7.2), 5.0);
    }

    #[test]
    fn negative_inputs_mirror_positive_rounding() {
        assert_eq!(round_up_decimal(-1.7), -round_down_decimal(1.7));
        assert_eq!(round_down_decimal(-1.7), -round_up_decimal(1.7));
        assert_eq!(round_up_even(-1.5), -round_down_even(1.5));
        assert_eq!(round_up_even(-3.3), -round_down_even(3.3));
    }

    #[test]
    fn near_zero_snaps_to_zero() {
        assert_eq!(round_up_decimal(1e-15), 0.0);
        assert_eq!(round_down_decimal(-1e-15), 0.0);
        assert_eq!(round_up_decimal(0.0), 0.0);
    }
}
