//! Pure numeric layer: rounding families, limit filtering, axis
//! autoscaling, and the data-to-canvas transform.

pub mod limits;
pub mod rounding;
pub mod scale;
pub mod transform;
pub mod types;

pub use self::limits::{LimitScan, is_limit_value, scan, scan_trusted};
pub use self::rounding::{
    round_down_decimal, round_down_even, round_up_decimal, round_up_even, round_up_semi_decimal,
};
pub use self::scale::{
    Autoscale, AxisRange, ScaleOptions, TickPlan, autoscale, autoscale_with_uncertainty, scale,
};
pub use self::transform::{AxisTransform, CoordinateTransform};
pub use self::types::{CanvasSize, LineSegment, PlotWindow};
