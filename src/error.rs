use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Failure modes of autoscaling and layout.
///
/// All variants are raised synchronously at the point of detection and
/// propagate to the caller of the render pass; none of them is recoverable
/// inside the crate. Individual non-finite samples during autoscaling are not
/// errors: they are excluded and counted as long as two finite samples
/// remain.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid axis range: min={min}, max={max} (bounds must be finite with min < max)")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid scale option: {0}")]
    InvalidOption(String),

    #[error("not enough usable data: {usable} finite of {total} samples (need at least 2)")]
    NoUsableData { usable: usize, total: usize },

    #[error(
        "plot window collapsed after space reservation: left={left}, right={right}, top={top}, bottom={bottom}"
    )]
    DegenerateWindow {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },

    #[error("non-normal {axis}-axis transform: scale={scale}, shift={shift}")]
    ScalingError {
        axis: &'static str,
        scale: f64,
        shift: f64,
    },
}
