//! chart-layout: autoscaling and geometry layout for 2-D charts.
//!
//! The crate does two things: it turns raw numeric ranges into rounded axis
//! bounds with nice tick intervals, and it solves the geometry of every
//! chart element (plot window, axis lines, ticks, value labels, titles,
//! legend) inside a fixed canvas. Drawing is left to the consumer: the
//! output is plain segments and label anchors in canvas coordinates.

pub mod core;
pub mod error;
pub mod layout;
pub mod telemetry;

pub use crate::core::{
    Autoscale, AxisRange, AxisTransform, CanvasSize, CoordinateTransform, LineSegment, PlotWindow,
    ScaleOptions, TickPlan, autoscale, scale,
};
pub use error::{LayoutError, LayoutResult};
pub use layout::{AxisStyle, ChartStyle, Layout, LayoutEngine, RotationStyle};
