//! Finite-range extraction from raw sample sequences.
//!
//! Autoscaling needs a finite `(min, max)` pair. Samples can carry NaN,
//! infinities, or the sentinel magnitudes other parts of a data pipeline use
//! as "missing value" markers; those are excluded here, with per-class
//! counts kept for diagnostics.

use tracing::trace;

use crate::error::{LayoutError, LayoutResult};

/// Result of scanning a sample sequence for usable values.
///
/// The exclusion counters are observational only; they never influence the
/// returned `min`/`max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitScan {
    pub min: f64,
    pub max: f64,
    /// Number of samples that participated in the min/max.
    pub usable: usize,
    pub excluded_nan: usize,
    pub excluded_infinite: usize,
    pub excluded_sentinel: usize,
}

impl LimitScan {
    /// Total number of excluded samples, regardless of class.
    #[must_use]
    pub fn excluded(&self) -> usize {
        self.excluded_nan + self.excluded_infinite + self.excluded_sentinel
    }
}

/// Returns `true` for values autoscaling must ignore: NaN, infinities, and
/// the sentinel magnitudes (`f64::MAX`, `f64::MIN`, `f64::MIN_POSITIVE`)
/// used elsewhere as missing-value markers.
#[must_use]
pub fn is_limit_value(value: f64) -> bool {
    !value.is_finite()
        || value == f64::MAX
        || value == f64::MIN
        || value == f64::MIN_POSITIVE
}

/// Scans `values` once, excluding limit values, and returns the finite
/// min/max with diagnostic counts.
///
/// # Errors
///
/// [`LayoutError::NoUsableData`] when fewer than two usable values remain.
pub fn scan(values: &[f64]) -> LayoutResult<LimitScan> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut usable = 0usize;
    let mut excluded_nan = 0usize;
    let mut excluded_infinite = 0usize;
    let mut excluded_sentinel = 0usize;

    for &value in values {
        if value.is_nan() {
            excluded_nan += 1;
            continue;
        }
        if value.is_infinite() {
            excluded_infinite += 1;
            continue;
        }
        if value == f64::MAX || value == f64::MIN || value == f64::MIN_POSITIVE {
            excluded_sentinel += 1;
            continue;
        }
        min = min.min(value);
        max = max.max(value);
        usable += 1;
    }

    if usable < 2 {
        return Err(LayoutError::NoUsableData {
            usable,
            total: values.len(),
        });
    }

    let result = LimitScan {
        min,
        max,
        usable,
        excluded_nan,
        excluded_infinite,
        excluded_sentinel,
    };
    if result.excluded() > 0 {
        trace!(
            nan = excluded_nan,
            infinite = excluded_infinite,
            sentinel = excluded_sentinel,
            "excluded limit values from autoscale scan"
        );
    }
    Ok(result)
}

/// Direct min/max scan that trusts the caller's claim that no limit values
/// are present.
///
/// Valid only when the sequence is known clean, for example because it was
/// produced by an earlier filtered pass or loaded from a validated store.
/// A stray NaN here poisons the result instead of being excluded.
///
/// # Errors
///
/// [`LayoutError::NoUsableData`] when the sequence holds fewer than two
/// values.
pub fn scan_trusted(values: &[f64]) -> LayoutResult<LimitScan> {
    if values.len() < 2 {
        return Err(LayoutError::NoUsableData {
            usable: values.len(),
            total: values.len(),
        });
    }

    let mut min = values[0];
    let mut max = values[0];
    for &value in &values[1..] {
        min = min.min(value);
        max = max.max(value);
    }

    Ok(LimitScan {
        min,
        max,
        usable: values.len(),
        excluded_nan: 0,
        excluded_infinite: 0,
        excluded_sentinel: 0,
    })
}
