//! Screen ↔ complex-plane transforms.
//!
//! Positions are measured from the screen centre rather than from a corner,
//! so the per-pixel term stays bounded by the screen size at any zoom depth
//! and `center` is only ever added once.

use crate::core::data::complex::Complex;
use crate::core::data::point::ScreenPoint;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::{Viewport, ViewportError};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} viewport",
        .point.x, .point.y, .viewport.width(), .viewport.height()
    )]
    PointOutsideViewport {
        point: ScreenPoint,
        viewport: Viewport,
    },
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Per-frame constants of the screen → plane map.
///
/// Built once per frame so the per-pixel work is two multiply-adds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenTransform {
    viewport: Viewport,
    center: Complex,
    half_width: f64,
    half_height: f64,
    real_scale: f64,
    imag_scale: f64,
}

impl ScreenTransform {
    pub fn new(viewport: Viewport, center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        let aspect = viewport.aspect_ratio()?;
        if viewport.is_degenerate() {
            return Err(ViewportError::DivisionByZero {
                width: viewport.width(),
                height: viewport.height(),
            });
        }

        let width = f64::from(viewport.width());
        let height = f64::from(viewport.height());

        Ok(Self {
            viewport,
            center,
            half_width: width / 2.0,
            half_height: height / 2.0,
            real_scale: zoom * aspect * 2.0 / width,
            imag_scale: zoom * 2.0 / height,
        })
    }

    pub fn for_view(viewport: Viewport, view: &ViewState) -> Result<Self, ViewportError> {
        Self::new(viewport, view.center(), view.zoom())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Maps without a bounds check; the map is defined for any finite position.
    #[must_use]
    pub fn to_complex(&self, position: ScreenPoint) -> Complex {
        let offset_x = position.x - self.half_width;
        let offset_y = position.y - self.half_height;

        Complex {
            real: self.center.real + offset_x * self.real_scale,
            // pixel rows grow downwards, the imaginary axis upwards
            imag: self.center.imag - offset_y * self.imag_scale,
        }
    }

    #[must_use]
    pub fn to_screen(&self, point: Complex) -> ScreenPoint {
        let delta = point - self.center;

        ScreenPoint {
            x: self.half_width + delta.real / self.real_scale,
            y: self.half_height - delta.imag / self.imag_scale,
        }
    }
}

pub fn pixel_to_complex_coords(
    position: ScreenPoint,
    viewport: Viewport,
    view: &ViewState,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !viewport.contains(position) {
        return Err(PixelToComplexCoordsError::PointOutsideViewport {
            point: position,
            viewport,
        });
    }

    let transform = ScreenTransform::for_view(viewport, view)?;
    Ok(transform.to_complex(position))
}

/// Inverse of [`pixel_to_complex_coords`]. The result may lie off screen.
pub fn complex_to_pixel_coords(
    point: Complex,
    viewport: Viewport,
    view: &ViewState,
) -> Result<ScreenPoint, PixelToComplexCoordsError> {
    let transform = ScreenTransform::for_view(viewport, view)?;
    Ok(transform.to_screen(point))
}
