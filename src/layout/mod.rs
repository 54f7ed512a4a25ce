//! Geometry layer: style configuration, window reservation, rotation
//! tables, tick placement, and the layout engine that sequences them.

pub mod engine;
pub mod format;
pub mod rotation;
pub mod style;
pub mod ticks;
mod window;

pub use self::engine::{
    HorizontalAxisPosition, Layout, LayoutEngine, LegendEntry, LegendGeometry,
    VerticalAxisPosition,
};
pub use self::format::format_tick;
pub use self::rotation::{LabelPlacement, LabelSide, RotationStyle, TextAnchor};
pub use self::style::{AxisStyle, ChartStyle, FontMetrics, LegendStyle, TickAnchor, ValueLabelSide};
pub use self::ticks::{AxisGeometry, LabelGeometry, TickMark};
