use crate::core::data::view_state::{MAX_ITERATIONS, ViewState, ViewStateError, validate_zoom};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_ITERATION_GAIN: f64 = 0.1;
pub const DEFAULT_ITERATION_CEILING: i32 = 2000;

/// Scales the iteration budget with zoom depth.
///
/// Each halving of `zoom` below `1.0` adds `gain` times the base budget, up to
/// `ceiling`. At `zoom >= 1.0` the base budget is returned unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AdaptiveIterationPolicy {
    gain: f64,
    ceiling: i32,
}

impl Default for AdaptiveIterationPolicy {
    fn default() -> Self {
        Self {
            gain: DEFAULT_ITERATION_GAIN,
            ceiling: DEFAULT_ITERATION_CEILING,
        }
    }
}

impl AdaptiveIterationPolicy {
    pub fn new(gain: f64, ceiling: i32) -> Result<Self, MandelbrotError> {
        if !gain.is_finite() || gain < 0.0 {
            return Err(MandelbrotError::InvalidGain(gain));
        }

        if ceiling < MAX_ITERATIONS {
            return Err(MandelbrotError::CeilingBelowLimit {
                ceiling,
                limit: MAX_ITERATIONS,
            });
        }

        Ok(Self { gain, ceiling })
    }

    #[must_use]
    pub fn gain(&self) -> f64 {
        self.gain
    }

    #[must_use]
    pub fn ceiling(&self) -> i32 {
        self.ceiling
    }

    pub fn effective_max_iterations(
        &self,
        zoom: f64,
        max_iterations: i32,
        adaptive_enabled: bool,
    ) -> Result<i32, ViewStateError> {
        let zoom = validate_zoom(zoom)?;

        if !adaptive_enabled {
            return Ok(max_iterations.min(self.ceiling));
        }

        Ok(self.scale(zoom, max_iterations))
    }

    /// Effective cap for a view. Infallible since a `ViewState` always holds a valid zoom.
    #[must_use]
    pub fn for_view(&self, view: &ViewState) -> i32 {
        if view.adaptive_enabled() {
            self.scale(view.zoom(), view.max_iterations())
        } else {
            view.max_iterations().min(self.ceiling)
        }
    }

    fn scale(&self, zoom: f64, max_iterations: i32) -> i32 {
        if self.gain == 0.0 {
            return max_iterations.min(self.ceiling);
        }

        let zoom_factor = (1.0 / zoom).max(1.0);
        let scaled = f64::from(max_iterations) * (1.0 + zoom_factor.log2() * self.gain);

        // the f64 min keeps an infinite zoom factor from saturating the cast
        scaled.round().min(f64::from(self.ceiling)) as i32
    }
}
