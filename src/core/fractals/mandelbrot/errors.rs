use crate::core::data::viewport::{Viewport, ViewportError};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero, got {0}")]
    ZeroMaxIterations(i32),
    #[error("adaptive gain must be finite and non-negative, got {0}")]
    InvalidGain(f64),
    #[error("adaptive ceiling {ceiling} is below the iteration limit {limit}")]
    CeilingBelowLimit { ceiling: i32, limit: i32 },
    #[error(
        "{}x{} viewport cannot be sampled {samples_per_axis}x{samples_per_axis} per pixel",
        .viewport.width(), .viewport.height()
    )]
    SampleGridTooLarge { viewport: Viewport, samples_per_axis: u32 },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
