//! Per-tick geometry: mark segments, value-label anchors, grid lines.

use smallvec::SmallVec;

use crate::core::scale::{AxisRange, TickPlan};
use crate::core::transform::CoordinateTransform;
use crate::core::types::{LineSegment, PlotWindow};
use crate::layout::format::format_tick;
use crate::layout::rotation::{LabelSide, TextAnchor};
use crate::layout::style::{AxisStyle, ValueLabelSide};

/// Minor tick marks are drawn at this fraction of the major length.
const MINOR_LENGTH_RATIO: f64 = 0.6;

/// One positioned glyph run, ready for the drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGeometry {
    pub text: String,
    /// Anchor point in canvas coordinates.
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    /// Counter-clockwise rotation around the anchor point, in degrees.
    pub angle_degrees: f64,
}

/// One tick mark segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub major: bool,
    pub segment: LineSegment,
}

/// Everything the drawing layer needs for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    pub line: LineSegment,
    pub marks: SmallVec<[TickMark; 16]>,
    pub labels: Vec<LabelGeometry>,
    pub grid: Vec<LineSegment>,
    /// Axis title, positioned by the engine from the reservation bands.
    pub title: Option<LabelGeometry>,
}

/// Placement inputs the engine resolves before tick geometry is built.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisPlacement {
    /// Canvas coordinate of the axis line on the perpendicular axis.
    pub axis_at: f64,
    /// Ticks and labels attach to the window border rather than to a
    /// mid-window axis line.
    pub external: bool,
    /// Skip the value label at the zero tick because the other axis line is
    /// drawn through it.
    pub suppress_zero_label: bool,
}

fn minor_values(majors: &[f64], per_major: usize) -> Vec<f64> {
    if per_major == 0 {
        return Vec::new();
    }
    let mut minors = Vec::with_capacity(majors.len().saturating_sub(1) * per_major);
    for pair in majors.windows(2) {
        let step = (pair[1] - pair[0]) / (per_major as f64 + 1.0);
        for index in 1..=per_major {
            minors.push(pair[0] + step * index as f64);
        }
    }
    minors
}

fn is_zero_tick(value: f64, interval: f64) -> bool {
    value == 0.0 || value.abs() < interval.abs() * 1e-9
}

pub(crate) fn build_x_axis(
    window: PlotWindow,
    transform: &CoordinateTransform,
    range: AxisRange,
    plan: &TickPlan,
    style: &AxisStyle,
    placement: AxisPlacement,
) -> AxisGeometry {
    let above = style.value_labels == ValueLabelSide::HighEdge;
    let side = if above {
        LabelSide::Above
    } else {
        LabelSide::Below
    };
    let sign = if above { -1.0 } else { 1.0 };
    let base = if placement.external {
        if above { window.top } else { window.bottom }
    } else {
        placement.axis_at
    };

    let majors = plan.values(range);
    let mut marks: SmallVec<[TickMark; 16]> = SmallVec::new();
    let mut labels = Vec::new();
    let mut grid = Vec::new();
    let label_spec = style.label_rotation.placement(side);
    let font = style.font;

    for &value in &majors {
        let x = transform.x.apply(value);
        marks.push(TickMark {
            value,
            major: true,
            segment: LineSegment::new(x, base, x, base + sign * style.tick_length),
        });
        if style.grid {
            grid.push(LineSegment::new(x, window.top, x, window.bottom));
        }
        if style.shows_value_labels() {
            if placement.suppress_zero_label && is_zero_tick(value, plan.interval) {
                continue;
            }
            let origin_y = base + sign * style.tick_length;
            labels.push(LabelGeometry {
                text: format_tick(value, plan.interval),
                x: x + label_spec.dx * font.size,
                y: origin_y + label_spec.dy * font.size,
                anchor: label_spec.anchor,
                angle_degrees: style.label_rotation.angle_degrees(),
            });
        }
    }

    for value in minor_values(&majors, style.minor_per_major) {
        let x = transform.x.apply(value);
        let length = style.tick_length * MINOR_LENGTH_RATIO;
        marks.push(TickMark {
            value,
            major: false,
            segment: LineSegment::new(x, base, x, base + sign * length),
        });
    }

    AxisGeometry {
        line: LineSegment::new(window.left, placement.axis_at, window.right, placement.axis_at),
        marks,
        labels,
        grid,
        title: None,
    }
}

pub(crate) fn build_y_axis(
    window: PlotWindow,
    transform: &CoordinateTransform,
    range: AxisRange,
    plan: &TickPlan,
    style: &AxisStyle,
    placement: AxisPlacement,
) -> AxisGeometry {
    let right_side = style.value_labels == ValueLabelSide::HighEdge;
    let side = if right_side {
        LabelSide::RightOf
    } else {
        LabelSide::LeftOf
    };
    let sign = if right_side { 1.0 } else { -1.0 };
    let base = if placement.external {
        if right_side { window.right } else { window.left }
    } else {
        placement.axis_at
    };

    let majors = plan.values(range);
    let mut marks: SmallVec<[TickMark; 16]> = SmallVec::new();
    let mut labels = Vec::new();
    let mut grid = Vec::new();
    let label_spec = style.label_rotation.placement(side);
    let font = style.font;

    for &value in &majors {
        let y = transform.y.apply(value);
        marks.push(TickMark {
            value,
            major: true,
            segment: LineSegment::new(base, y, base + sign * style.tick_length, y),
        });
        if style.grid {
            grid.push(LineSegment::new(window.left, y, window.right, y));
        }
        if style.shows_value_labels() {
            if placement.suppress_zero_label && is_zero_tick(value, plan.interval) {
                continue;
            }
            let origin_x = base + sign * style.tick_length;
            labels.push(LabelGeometry {
                text: format_tick(value, plan.interval),
                x: origin_x + label_spec.dx * font.size,
                y: y + label_spec.dy * font.size,
                anchor: label_spec.anchor,
                angle_degrees: style.label_rotation.angle_degrees(),
            });
        }
    }

    for value in minor_values(&majors, style.minor_per_major) {
        let y = transform.y.apply(value);
        let length = style.tick_length * MINOR_LENGTH_RATIO;
        marks.push(TickMark {
            value,
            major: false,
            segment: LineSegment::new(base, y, base + sign * length, y),
        });
    }

    AxisGeometry {
        line: LineSegment::new(placement.axis_at, window.top, placement.axis_at, window.bottom),
        marks,
        labels,
        grid,
        title: None,
    }
}
