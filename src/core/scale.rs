//! Axis autoscaling: turning a raw numeric range into a rounded axis range
//! with a nice tick interval.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::limits::{self, is_limit_value};
use crate::core::rounding::{
    ZERO_SNAP, round_down_decimal, round_down_even, round_down_semi_decimal, round_up_decimal,
    round_up_even, round_up_semi_decimal,
};
use crate::error::{LayoutError, LayoutResult};

/// Finalized axis bounds. Both bounds are finite and `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// # Errors
    ///
    /// [`LayoutError::InvalidRange`] unless both bounds are finite and
    /// `min < max`.
    pub fn new(min: f64, max: f64) -> LayoutResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(LayoutError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Whether the range contains zero strictly inside both bounds.
    #[must_use]
    pub fn straddles_zero(self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Tick interval and count for a finalized [`AxisRange`].
///
/// A plan with `count == 3`, `interval == 1.0` coming out of the
/// degenerate-range branch of [`scale`] is the collapsed-range sentinel: the
/// input spanned (almost) a single repeated value and the axis was fixed to
/// one unit on either side of the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub interval: f64,
    pub count: usize,
    pub includes_origin: bool,
}

impl TickPlan {
    /// Major tick values across `range`, lowest first. Values within rounding
    /// noise of zero are snapped exactly to zero.
    #[must_use]
    pub fn values(&self, range: AxisRange) -> Vec<f64> {
        let interval = self.interval;
        (0..self.count)
            .map(move |index| snap_zero(range.min + index as f64 * interval, interval))
            .collect()
    }
}

/// Options controlling [`scale`]. Immutable; construct with the fluent
/// `with_*` methods or plain field initialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Force zero onto the axis by extending the bound on the wrong side.
    pub origin: bool,
    /// Fraction of one tick interval a boundary data point may protrude past
    /// the outermost tick before that tick must be kept. Range `[0, 1]`.
    pub tight: f64,
    /// Minimum number of major ticks.
    pub min_ticks: usize,
    /// Pre-round the raw bounds outward to a step family before scaling:
    /// 0 = none, 2 = even steps, 5 = semi-decimal steps, 10 = decimal steps.
    pub steps: u8,
    /// Whether sequence adapters scan for NaN/infinite/sentinel samples.
    pub check_limits: bool,
    /// Multiplier applied to per-point uncertainties before they widen the
    /// raw range.
    pub plus_minus_factor: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            origin: false,
            tight: 0.0,
            min_ticks: 3,
            steps: 0,
            check_limits: true,
            plus_minus_factor: 1.0,
        }
    }
}

impl ScaleOptions {
    #[must_use]
    pub fn with_origin(mut self, origin: bool) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_tight(mut self, tight: f64) -> Self {
        self.tight = tight;
        self
    }

    #[must_use]
    pub fn with_min_ticks(mut self, min_ticks: usize) -> Self {
        self.min_ticks = min_ticks;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: u8) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_check_limits(mut self, check_limits: bool) -> Self {
        self.check_limits = check_limits;
        self
    }

    #[must_use]
    pub fn with_plus_minus_factor(mut self, factor: f64) -> Self {
        self.plus_minus_factor = factor;
        self
    }

    pub(crate) fn validate(&self) -> LayoutResult<()> {
        if !self.tight.is_finite() || !(0.0..=1.0).contains(&self.tight) {
            return Err(LayoutError::InvalidOption(format!(
                "tight must be within [0, 1], got {}",
                self.tight
            )));
        }
        if !matches!(self.steps, 0 | 2 | 5 | 10) {
            return Err(LayoutError::InvalidOption(format!(
                "steps must be one of 0, 2, 5, 10, got {}",
                self.steps
            )));
        }
        if self.min_ticks < 3 {
            return Err(LayoutError::InvalidOption(format!(
                "min_ticks must be at least 3, got {}",
                self.min_ticks
            )));
        }
        if !self.plus_minus_factor.is_finite() || self.plus_minus_factor < 0.0 {
            return Err(LayoutError::InvalidOption(format!(
                "plus_minus_factor must be finite and non-negative, got {}",
                self.plus_minus_factor
            )));
        }
        Ok(())
    }
}

/// Result of autoscaling a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoscale {
    pub range: AxisRange,
    pub ticks: TickPlan,
    /// Number of samples excluded as NaN, infinite, or sentinel.
    pub excluded: usize,
}

/// Relative threshold below which a range counts as a single repeated value.
const COLLAPSE_RELATIVE: f64 = 1e4 * f64::EPSILON;

/// Absolute threshold below which a range counts as a single repeated value.
const COLLAPSE_ABSOLUTE: f64 = 1e3 * f64::MIN_POSITIVE;

fn snap_zero(value: f64, interval: f64) -> f64 {
    if value.abs() < ZERO_SNAP.max(interval * 1e-12) {
        0.0
    } else {
        value
    }
}

fn collapsed(mean: f64) -> (AxisRange, TickPlan) {
    let range = AxisRange {
        min: mean - 1.0,
        max: mean + 1.0,
    };
    let plan = TickPlan {
        interval: 1.0,
        count: 3,
        includes_origin: range.min <= 0.0 && range.max >= 0.0,
    };
    (range, plan)
}

/// Scales a raw `(min, max)` pair into a rounded axis range and tick plan.
///
/// A range narrower than the collapse thresholds is treated as a single
/// repeated value: the result is `mean - 1 ..= mean + 1` with unit interval
/// and the three-tick collapsed-range sentinel.
///
/// # Errors
///
/// [`LayoutError::InvalidRange`] on non-finite bounds or `min >= max`;
/// [`LayoutError::InvalidOption`] on out-of-range options.
pub fn scale(min: f64, max: f64, options: &ScaleOptions) -> LayoutResult<(AxisRange, TickPlan)> {
    options.validate()?;
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(LayoutError::InvalidRange { min, max });
    }

    let mut lo = min;
    let mut hi = max;

    // Step 1: optional outward pre-rounding of the raw bounds.
    match options.steps {
        0 => {}
        2 => {
            lo = round_down_even(lo);
            hi = round_up_even(hi);
        }
        5 => {
            lo = round_down_semi_decimal(lo);
            hi = round_up_semi_decimal(hi);
        }
        10 => {
            lo = round_down_decimal(lo);
            hi = round_up_decimal(hi);
        }
        _ => unreachable!("validated above"),
    }

    // Step 2: clamp the working range to include the origin.
    if options.origin {
        if lo > 0.0 {
            lo = 0.0;
        }
        if hi < 0.0 {
            hi = 0.0;
        }
    }

    // Step 3: guard against division instability on near-zero ranges.
    let range = hi - lo;
    let magnitude = lo.abs().max(hi.abs());
    if range < COLLAPSE_ABSOLUTE || range < COLLAPSE_RELATIVE * magnitude {
        let mean = lo + range / 2.0;
        trace!(mean, "range collapsed to a single repeated value");
        return Ok(collapsed(mean));
    }

    // Step 4: power-of-ten interval sized for roughly ten ticks, then snap
    // the upper bound down onto the tick grid and walk the lower bound out.
    let mut interval = 10f64.powf((range / 10.0).log10().ceil());
    let tolerance = interval * 1e-10;

    let mut axis_max = (hi / interval).floor() * interval;
    if axis_max < hi - tolerance {
        axis_max += interval;
    }
    axis_max = snap_zero(axis_max, interval);

    let mut axis_min = axis_max;
    let mut count = 1usize;
    while axis_min > lo + tolerance {
        axis_min -= interval;
        count += 1;
    }
    axis_min = snap_zero(axis_min, interval);

    // Step 5: halve the interval until the minimum tick count is met; on the
    // un-prerounded path, drop ticks the halving left stranded beyond the
    // raw bounds.
    let mut halved = false;
    while count < options.min_ticks {
        interval /= 2.0;
        count = ((axis_max - axis_min) / interval).round() as usize + 1;
        halved = true;
    }
    if halved && options.steps == 0 {
        let tolerance = interval * 1e-10;
        while count > 2 && axis_min + interval <= lo + tolerance {
            axis_min += interval;
            count -= 1;
        }
        while count > 2 && axis_max - interval >= hi - tolerance {
            axis_max -= interval;
            count -= 1;
        }
        axis_min = snap_zero(axis_min, interval);
        axis_max = snap_zero(axis_max, interval);
    }

    // Step 6: with a tight tolerance, an outermost tick is droppable when the
    // data would protrude past its neighbor by less than `tight` intervals.
    // Dropping one tick can expose another, so each side is re-checked once.
    if options.tight > 0.0 {
        let allowed = options.tight * interval;
        for _ in 0..2 {
            if count > 3 && (axis_min + interval) - lo < allowed {
                axis_min += interval;
                count -= 1;
            } else {
                break;
            }
        }
        for _ in 0..2 {
            if count > 3 && hi - (axis_max - interval) < allowed {
                axis_max -= interval;
                count -= 1;
            } else {
                break;
            }
        }
        axis_min = snap_zero(axis_min, interval);
        axis_max = snap_zero(axis_max, interval);
    }

    let range = AxisRange::new(axis_min, axis_max)?;
    let plan = TickPlan {
        interval,
        count,
        includes_origin: axis_min <= 0.0 && axis_max >= 0.0,
    };
    Ok((range, plan))
}

/// Autoscales a sample sequence: scans it for a finite range (respecting
/// `check_limits`), then applies [`scale`].
///
/// An all-equal sequence collapses to the unit window around the repeated
/// value, same as the degenerate-range branch of [`scale`].
///
/// # Errors
///
/// [`LayoutError::NoUsableData`] when fewer than two finite samples remain;
/// otherwise as [`scale`].
pub fn autoscale(values: &[f64], options: &ScaleOptions) -> LayoutResult<Autoscale> {
    options.validate()?;
    let scan = if options.check_limits {
        limits::scan(values)?
    } else {
        limits::scan_trusted(values)?
    };

    let (range, ticks) = if scan.min == scan.max {
        collapsed(scan.min)
    } else {
        scale(scan.min, scan.max, options)?
    };
    Ok(Autoscale {
        range,
        ticks,
        excluded: scan.excluded(),
    })
}

/// Autoscales samples that carry a per-point uncertainty, widening each
/// sample by `plus_minus_factor * uncertainty` before the range is taken.
///
/// # Errors
///
/// [`LayoutError::InvalidOption`] when the slices differ in length;
/// otherwise as [`autoscale`].
pub fn autoscale_with_uncertainty(
    values: &[f64],
    uncertainties: &[f64],
    options: &ScaleOptions,
) -> LayoutResult<Autoscale> {
    options.validate()?;
    if values.len() != uncertainties.len() {
        return Err(LayoutError::InvalidOption(format!(
            "uncertainty count {} does not match sample count {}",
            uncertainties.len(),
            values.len()
        )));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut usable = 0usize;
    let mut excluded = 0usize;
    for (&value, &sigma) in values.iter().zip(uncertainties) {
        if options.check_limits && is_limit_value(value) {
            excluded += 1;
            continue;
        }
        let spread = if is_limit_value(sigma) {
            0.0
        } else {
            options.plus_minus_factor * sigma.abs()
        };
        min = min.min(value - spread);
        max = max.max(value + spread);
        usable += 1;
    }
    if usable < 2 {
        return Err(LayoutError::NoUsableData {
            usable,
            total: values.len(),
        });
    }

    let (range, ticks) = if min == max {
        collapsed(min)
    } else {
        scale(min, max, options)?
    };
    Ok(Autoscale {
        range,
        ticks,
        excluded,
    })
}
