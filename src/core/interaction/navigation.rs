use crate::core::data::complex::Complex;
use crate::core::data::point::ScreenPoint;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::interaction::errors::InteractionError;

fn require_area(viewport: Viewport) -> Result<f64, ViewportError> {
    let aspect = viewport.aspect_ratio()?;

    if viewport.is_degenerate() {
        return Err(ViewportError::DivisionByZero {
            width: viewport.width(),
            height: viewport.height(),
        });
    }

    Ok(aspect)
}

/// Cursor position in view units: the screen spans `[-aspect, aspect]`
/// horizontally and `[-1, 1]` vertically, `+im` upwards.
fn normalised_cursor(viewport: Viewport, cursor: ScreenPoint) -> Result<Complex, ViewportError> {
    let aspect = require_area(viewport)?;
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    Ok(Complex {
        real: (cursor.x / width - 0.5) * 2.0 * aspect,
        imag: -(cursor.y / height - 0.5) * 2.0,
    })
}

/// Scales zoom by `factor` while keeping the complex point under `cursor`
/// at the same screen position.
///
/// Returns the new state; `view` itself is never modified, so a rejected
/// zoom leaves the caller's state as it was.
pub fn zoom_to_cursor(
    view: &ViewState,
    viewport: Viewport,
    cursor: ScreenPoint,
    factor: f64,
) -> Result<ViewState, InteractionError> {
    let cursor_norm = normalised_cursor(viewport, cursor)?;
    let target = cursor_norm * view.zoom() + view.center();

    let zoom = view.zoom() * factor;
    let center = target - cursor_norm * zoom;

    let mut next = *view;
    next.set_view(zoom, center)?;
    Ok(next)
}

/// Shifts the centre by a pointer drag of `(dx, dy)` device pixels.
///
/// Both axes subtract the scaled delta, so the content follows the pointer
/// horizontally and mirrors it vertically.
pub fn pan_by_pixels(
    view: &ViewState,
    viewport: Viewport,
    dx: f64,
    dy: f64,
) -> Result<ViewState, InteractionError> {
    let aspect = require_area(viewport)?;
    let width = f64::from(viewport.width());
    let height = f64::from(viewport.height());

    let displacement = Complex {
        real: dx / width * view.zoom() * aspect * 2.0,
        imag: dy / height * view.zoom() * 2.0,
    };

    let mut next = *view;
    next.set_center(view.center() - displacement)?;
    Ok(next)
}
