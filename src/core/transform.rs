//! Affine data-to-canvas maps built from a finalized axis range and the plot
//! window edges.

use crate::core::scale::AxisRange;
use crate::core::types::PlotWindow;
use crate::error::{LayoutError, LayoutResult};

/// One-dimensional affine map `canvas = scale * data + shift`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    scale: f64,
    shift: f64,
}

impl AxisTransform {
    /// Map for the horizontal axis: `range.min` lands on the window's left
    /// edge, `range.max` on the right edge.
    pub fn horizontal(range: AxisRange, window: PlotWindow) -> LayoutResult<Self> {
        let scale = window.width() / range.span();
        let shift = window.left - scale * range.min;
        Self::validated(scale, shift, "x")
    }

    /// Map for the vertical axis. Canvas y grows downward while data grows
    /// upward, so the scale factor is negated: `range.min` lands on the
    /// window's bottom edge, `range.max` on the top edge.
    pub fn vertical(range: AxisRange, window: PlotWindow) -> LayoutResult<Self> {
        let scale = -window.height() / range.span();
        let shift = window.bottom - scale * range.min;
        Self::validated(scale, shift, "y")
    }

    fn validated(scale: f64, shift: f64, axis: &'static str) -> LayoutResult<Self> {
        // A zero shift is legitimate geometry; anything subnormal, infinite,
        // or NaN means a near-zero axis span leaked through and the pass
        // must abort.
        let shift_ok = shift == 0.0 || shift.is_normal();
        if !scale.is_normal() || !shift_ok {
            return Err(LayoutError::ScalingError { axis, scale, shift });
        }
        Ok(Self { scale, shift })
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        self.scale * value + self.shift
    }

    #[must_use]
    pub fn invert(self, canvas: f64) -> f64 {
        (canvas - self.shift) / self.scale
    }

    #[must_use]
    pub fn scale_factor(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn shift(self) -> f64 {
        self.shift
    }
}

/// Pair of per-axis maps taking a data point to a canvas point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    pub x: AxisTransform,
    pub y: AxisTransform,
}

impl CoordinateTransform {
    pub fn new(
        x_range: AxisRange,
        y_range: AxisRange,
        window: PlotWindow,
    ) -> LayoutResult<Self> {
        Ok(Self {
            x: AxisTransform::horizontal(x_range, window)?,
            y: AxisTransform::vertical(y_range, window)?,
        })
    }

    /// Maps a data point to canvas coordinates.
    #[must_use]
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.apply(x), self.y.apply(y))
    }
}
