//! Layout orchestration: one deterministic forward pass from finalized axis
//! ranges and a style to pixel-space geometry.
//!
//! The pass never backtracks. Space reservation, axis positioning, the
//! coordinate transform, and tick geometry are computed in that order; if a
//! later stage would invalidate an earlier one (a collapsed window, a
//! non-normal transform) the pass fails instead of re-solving.

use tracing::{debug, trace};

use crate::core::scale::{AxisRange, TickPlan};
use crate::core::transform::CoordinateTransform;
use crate::core::types::{CanvasSize, LineSegment, PlotWindow};
use crate::error::LayoutResult;
use crate::layout::format::format_tick;
use crate::layout::rotation::TextAnchor;
use crate::layout::style::{ChartStyle, TickAnchor};
use crate::layout::ticks::{self, AxisGeometry, AxisPlacement, LabelGeometry};
use crate::layout::window::{self, ReservationInputs};

/// Where the x-axis line is drawn, decided by the y range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAxisPosition {
    /// Along the bottom window edge: the y range is entirely non-negative.
    Bottom,
    /// Along the top window edge: the y range is entirely non-positive.
    Top,
    /// Through the y-axis zero crossing: the y range straddles zero.
    CrossesOther,
}

/// Where the y-axis line is drawn, decided by the x range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAxisPosition {
    Left,
    Right,
    CrossesOther,
}

/// One legend row: sample line plus entry label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub sample: LineSegment,
    pub label: LabelGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendGeometry {
    pub frame: PlotWindow,
    pub entries: Vec<LegendEntry>,
}

/// Complete geometry of one render pass, consumed by the drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub window: PlotWindow,
    pub transform: CoordinateTransform,
    pub x_position: HorizontalAxisPosition,
    pub y_position: VerticalAxisPosition,
    pub x_axis: AxisGeometry,
    pub y_axis: AxisGeometry,
    pub title: Option<LabelGeometry>,
    pub legend: Option<LegendGeometry>,
}

/// Computes chart geometry from finalized axis ranges and a style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutEngine {
    style: ChartStyle,
}

impl LayoutEngine {
    #[must_use]
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Runs the layout pass.
    ///
    /// # Errors
    ///
    /// [`crate::LayoutError::DegenerateWindow`] when space reservations
    /// consume the canvas; [`crate::LayoutError::ScalingError`] when an axis
    /// span produces a non-normal transform.
    pub fn layout(
        &self,
        canvas: CanvasSize,
        x: (AxisRange, TickPlan),
        y: (AxisRange, TickPlan),
    ) -> LayoutResult<Layout> {
        let (x_range, x_plan) = x;
        let (y_range, y_plan) = y;
        let style = &self.style;
        debug!(
            width = canvas.width,
            height = canvas.height,
            "layout pass started"
        );

        let x_position = if y_range.straddles_zero() {
            HorizontalAxisPosition::CrossesOther
        } else if y_range.min >= 0.0 {
            HorizontalAxisPosition::Bottom
        } else {
            HorizontalAxisPosition::Top
        };
        let y_position = if x_range.straddles_zero() {
            VerticalAxisPosition::CrossesOther
        } else if x_range.min >= 0.0 {
            VerticalAxisPosition::Left
        } else {
            VerticalAxisPosition::Right
        };

        let x_external = !(style.x_axis.tick_anchor == TickAnchor::Axis
            && x_position == HorizontalAxisPosition::CrossesOther);
        let y_external = !(style.y_axis.tick_anchor == TickAnchor::Axis
            && y_position == VerticalAxisPosition::CrossesOther);

        let longest_x_label = longest_label(&style.x_axis.font, x_range, &x_plan);
        let longest_y_label = longest_label(&style.y_axis.font, y_range, &y_plan);

        let reservation = window::reserve(
            canvas,
            style,
            ReservationInputs {
                x_external,
                y_external,
                longest_x_label,
                longest_y_label,
            },
        )?;
        let window = reservation.window;

        let transform = CoordinateTransform::new(x_range, y_range, window)?;

        let x_axis_at = match x_position {
            HorizontalAxisPosition::Bottom => window.bottom,
            HorizontalAxisPosition::Top => window.top,
            HorizontalAxisPosition::CrossesOther => transform.y.apply(0.0),
        };
        let y_axis_at = match y_position {
            VerticalAxisPosition::Left => window.left,
            VerticalAxisPosition::Right => window.right,
            VerticalAxisPosition::CrossesOther => transform.x.apply(0.0),
        };

        // A label flush against a mid-window axis line collides with the
        // other axis where the two lines cross; drop that one label.
        let suppress_x_zero =
            !x_external && y_position == VerticalAxisPosition::CrossesOther;
        let suppress_y_zero =
            !y_external && x_position == HorizontalAxisPosition::CrossesOther;
        if suppress_x_zero || suppress_y_zero {
            trace!(
                x = suppress_x_zero,
                y = suppress_y_zero,
                "suppressing zero-crossing tick labels"
            );
        }

        let mut x_axis = ticks::build_x_axis(
            window,
            &transform,
            x_range,
            &x_plan,
            &style.x_axis,
            AxisPlacement {
                axis_at: x_axis_at,
                external: x_external,
                suppress_zero_label: suppress_x_zero,
            },
        );
        let mut y_axis = ticks::build_y_axis(
            window,
            &transform,
            y_range,
            &y_plan,
            &style.y_axis,
            AxisPlacement {
                axis_at: y_axis_at,
                external: y_external,
                suppress_zero_label: suppress_y_zero,
            },
        );

        let center_x = (window.left + window.right) / 2.0;
        let center_y = (window.top + window.bottom) / 2.0;
        x_axis.title = reservation.x_label_baseline.map(|baseline| LabelGeometry {
            text: style.x_axis.label.clone(),
            x: center_x,
            y: baseline,
            anchor: TextAnchor::Center,
            angle_degrees: 0.0,
        });
        y_axis.title = reservation.y_label_center_x.map(|center| LabelGeometry {
            text: style.y_axis.label.clone(),
            x: center,
            y: center_y,
            anchor: TextAnchor::Center,
            angle_degrees: 90.0,
        });
        let title = reservation.title_baseline.map(|baseline| LabelGeometry {
            text: style.title.clone(),
            x: center_x,
            y: baseline,
            anchor: TextAnchor::Center,
            angle_degrees: 0.0,
        });

        let legend = match (reservation.legend_left, &style.legend) {
            (Some(band_left), Some(legend_style)) => Some(build_legend(
                band_left,
                canvas,
                window,
                style.border_margin,
                legend_style,
            )?),
            _ => None,
        };

        debug!(
            ticks_x = x_axis.marks.len(),
            ticks_y = y_axis.marks.len(),
            "layout pass finished"
        );
        Ok(Layout {
            window,
            transform,
            x_position,
            y_position,
            x_axis,
            y_axis,
            title,
            legend,
        })
    }
}

fn longest_label(
    font: &crate::layout::style::FontMetrics,
    range: AxisRange,
    plan: &TickPlan,
) -> f64 {
    plan.values(range)
        .iter()
        .map(|&value| font.text_width(&format_tick(value, plan.interval)))
        .fold(0.0f64, f64::max)
}

fn build_legend(
    band_left: f64,
    canvas: CanvasSize,
    window: PlotWindow,
    border_margin: f64,
    style: &crate::layout::style::LegendStyle,
) -> LayoutResult<LegendGeometry> {
    let line_height = style.font.line_height();
    let height = style.entries.len() as f64 * line_height + 2.0 * style.padding;
    let frame = PlotWindow::new(
        band_left + style.padding,
        canvas.width - border_margin,
        window.top,
        window.top + height,
    )?;

    let entries = style
        .entries
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let baseline = frame.top + style.padding + (index as f64 + 0.8) * line_height;
            let mid = baseline - style.font.size * 0.35;
            LegendEntry {
                sample: LineSegment::new(
                    frame.left + style.padding,
                    mid,
                    frame.left + style.padding + style.sample_length,
                    mid,
                ),
                label: LabelGeometry {
                    text: text.clone(),
                    x: frame.left + 2.0 * style.padding + style.sample_length,
                    y: baseline,
                    anchor: TextAnchor::Left,
                    angle_degrees: 0.0,
                },
            }
        })
        .collect();

    Ok(LegendGeometry { frame, entries })
}
