use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Output canvas extent in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Rectangular sub-region of the canvas inside which data, axis lines, and
/// ticks are drawn. Canvas y grows downward, so `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotWindow {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotWindow {
    /// # Errors
    ///
    /// [`LayoutError::DegenerateWindow`] when the edges are non-finite or the
    /// window has no positive extent.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> LayoutResult<Self> {
        let finite =
            left.is_finite() && right.is_finite() && top.is_finite() && bottom.is_finite();
        if !finite || right <= left || bottom <= top {
            return Err(LayoutError::DegenerateWindow {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// One straight segment in canvas coordinates, consumed by the drawing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}
