//! Plot-window space reservation.
//!
//! Starting from the full canvas minus the border margin, each enabled
//! element shrinks the remaining rectangle: title band, legend band, axis
//! title bands, rotation-dependent tick-label bands, tick marks. Whatever
//! is left becomes the plot window.

use tracing::debug;

use crate::core::types::{CanvasSize, PlotWindow};
use crate::error::LayoutResult;
use crate::layout::style::{ChartStyle, ValueLabelSide};

/// Outcome of the reservation pass: the plot window plus the anchor
/// coordinates of the bands that were carved off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Reservation {
    pub window: PlotWindow,
    /// Baseline y of the title, when a title band was reserved.
    pub title_baseline: Option<f64>,
    /// Baseline y of the x-axis title, when its band was reserved.
    pub x_label_baseline: Option<f64>,
    /// Center x of the rotated y-axis title, when its band was reserved.
    pub y_label_center_x: Option<f64>,
    /// Left edge of the legend band, when one was reserved.
    pub legend_left: Option<f64>,
}

/// Inputs the reservation needs beyond the style: whether each axis renders
/// its ticks and value labels outside the window, and how wide the longest
/// formatted tick label is.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReservationInputs {
    pub x_external: bool,
    pub y_external: bool,
    pub longest_x_label: f64,
    pub longest_y_label: f64,
}

pub(crate) fn reserve(
    canvas: CanvasSize,
    style: &ChartStyle,
    inputs: ReservationInputs,
) -> LayoutResult<Reservation> {
    let margin = style.border_margin;
    let mut left = margin;
    let mut right = canvas.width - margin;
    let mut top = margin;
    let mut bottom = canvas.height - margin;

    let mut title_baseline = None;
    if style.has_title() {
        title_baseline = Some(top + style.title_font.size);
        top += style.title_font.line_height();
    }

    let mut legend_left = None;
    if let Some(legend) = &style.legend {
        let band = legend.band_width();
        if band > 0.0 {
            right -= band;
            legend_left = Some(right);
        }
    }

    let mut x_label_baseline = None;
    if style.x_axis.has_label() {
        let line = style.x_axis.label_font.line_height();
        x_label_baseline = Some(bottom - line * 0.25);
        bottom -= line;
    }

    let mut y_label_center_x = None;
    if style.y_axis.has_label() {
        let line = style.y_axis.label_font.line_height();
        y_label_center_x = Some(left + line * 0.5);
        left += line;
    }

    if inputs.x_external && style.x_axis.shows_value_labels() {
        let extent = style
            .x_axis
            .label_rotation
            .extent_beside_horizontal_axis(inputs.longest_x_label, style.x_axis.font.size);
        match style.x_axis.value_labels {
            ValueLabelSide::LowEdge => bottom -= extent,
            ValueLabelSide::HighEdge => top += extent,
            ValueLabelSide::Hidden => {}
        }
    }
    if inputs.y_external && style.y_axis.shows_value_labels() {
        let extent = style
            .y_axis
            .label_rotation
            .extent_beside_vertical_axis(inputs.longest_y_label, style.y_axis.font.size);
        match style.y_axis.value_labels {
            ValueLabelSide::LowEdge => left += extent,
            ValueLabelSide::HighEdge => right -= extent,
            ValueLabelSide::Hidden => {}
        }
    }

    if inputs.x_external && style.x_axis.tick_length > 0.0 {
        match style.x_axis.value_labels {
            ValueLabelSide::HighEdge => top += style.x_axis.tick_length,
            _ => bottom -= style.x_axis.tick_length,
        }
    }
    if inputs.y_external && style.y_axis.tick_length > 0.0 {
        match style.y_axis.value_labels {
            ValueLabelSide::HighEdge => right -= style.y_axis.tick_length,
            _ => left += style.y_axis.tick_length,
        }
    }

    let window = PlotWindow::new(left, right, top, bottom)?;
    debug!(
        left,
        right,
        top,
        bottom,
        title = title_baseline.is_some(),
        legend = legend_left.is_some(),
        "reserved plot window"
    );

    Ok(Reservation {
        window,
        title_baseline,
        x_label_baseline,
        y_label_center_x,
        legend_left,
    })
}
