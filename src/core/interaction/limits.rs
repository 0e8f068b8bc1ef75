use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum InteractionLimitsError {
    #[error("zoom-in factor must lie in (0, 1), got {0}")]
    ZoomInFactor(f64),
    #[error("zoom-out factor must be finite and above 1, got {0}")]
    ZoomOutFactor(f64),
    #[error("iteration step must be positive, got {0}")]
    IterationStep(i32),
}

/// Step sizes for the discrete interaction commands.
///
/// The default zoom factors are not exact reciprocals: one wheel step in
/// followed by one out leaves the zoom about 0.04% smaller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteractionLimits {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub iteration_step: i32,
}

impl Default for InteractionLimits {
    fn default() -> Self {
        Self {
            zoom_in_factor: 0.85,
            zoom_out_factor: 1.176,
            iteration_step: 10,
        }
    }
}

impl InteractionLimits {
    pub fn validate(self) -> Result<Self, InteractionLimitsError> {
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            return Err(InteractionLimitsError::ZoomInFactor(self.zoom_in_factor));
        }

        if !(self.zoom_out_factor.is_finite() && self.zoom_out_factor > 1.0) {
            return Err(InteractionLimitsError::ZoomOutFactor(self.zoom_out_factor));
        }

        if self.iteration_step <= 0 {
            return Err(InteractionLimitsError::IterationStep(self.iteration_step));
        }

        Ok(self)
    }

    /// Zoom multiplier for a wheel delta, `None` for a zero or non-finite delta.
    #[must_use]
    pub fn zoom_factor_for(&self, wheel_delta: f64) -> Option<f64> {
        if wheel_delta > 0.0 && wheel_delta.is_finite() {
            Some(self.zoom_in_factor)
        } else if wheel_delta < 0.0 && wheel_delta.is_finite() {
            Some(self.zoom_out_factor)
        } else {
            None
        }
    }
}
