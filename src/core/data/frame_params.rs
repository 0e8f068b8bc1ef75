use crate::core::data::palette::Palettes;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::adaptive_iterations::AdaptiveIterationPolicy;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum FrameParamsError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    View(#[from] ViewStateError),
}

/// Single-precision per-frame parameters for a shader-style renderer.
///
/// This is the only place the double-precision view is narrowed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameParams {
    pub resolution: (f32, f32),
    pub zoom: f32,
    pub center: (f32, f32),
    pub effective_max_iterations: i32,
    pub foreground: [f32; 3],
    pub background: [f32; 3],
    pub adaptive_enabled: bool,
}

impl FrameParams {
    pub fn from_view(
        view: &ViewState,
        viewport: Viewport,
        palettes: &Palettes,
        policy: &AdaptiveIterationPolicy,
    ) -> Result<Self, FrameParamsError> {
        viewport.aspect_ratio()?;
        if viewport.is_degenerate() {
            return Err(FrameParamsError::Viewport(ViewportError::DivisionByZero {
                width: viewport.width(),
                height: viewport.height(),
            }));
        }

        // a zoom too small for f32 would reach the shader as zero
        let zoom = view.zoom() as f32;
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(FrameParamsError::View(ViewStateError::InvalidState {
                zoom: f64::from(zoom),
            }));
        }

        let center = view.center();

        Ok(Self {
            resolution: (viewport.width() as f32, viewport.height() as f32),
            zoom,
            center: (center.real as f32, center.imag as f32),
            effective_max_iterations: policy.for_view(view),
            foreground: palettes.foreground(view.foreground_index()).to_f32(),
            background: palettes.background(view.background_index()).to_f32(),
            adaptive_enabled: view.adaptive_enabled(),
        })
    }
}
