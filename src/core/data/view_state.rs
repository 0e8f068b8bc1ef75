use crate::core::data::complex::Complex;
use crate::core::data::palette::{Step, cycle_index};
use thiserror::Error;

pub const DEFAULT_ZOOM: f64 = 2.0;
pub const DEFAULT_CENTER: Complex = Complex::ZERO;
pub const DEFAULT_MAX_ITERATIONS: i32 = 100;
pub const MIN_ITERATIONS: i32 = 10;
pub const MAX_ITERATIONS: i32 = 1000;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewStateError {
    #[error("invalid view state: zoom must be positive and finite, got {zoom}")]
    InvalidState { zoom: f64 },
    #[error("invalid view state: center must be finite, got ({real}, {imag})")]
    InvalidCenter { real: f64, imag: f64 },
}

/// Where the view is looking and how much detail it asks for.
///
/// Fields are private so that `zoom > 0`, a finite center and
/// `MIN_ITERATIONS <= max_iterations <= MAX_ITERATIONS` hold for every value
/// that exists.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: f64,
    center: Complex,
    max_iterations: i32,
    adaptive_enabled: bool,
    foreground_index: usize,
    background_index: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: DEFAULT_CENTER,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            adaptive_enabled: true,
            foreground_index: 0,
            background_index: 0,
        }
    }
}

pub(crate) fn validate_zoom(zoom: f64) -> Result<f64, ViewStateError> {
    if zoom > 0.0 && zoom.is_finite() {
        Ok(zoom)
    } else {
        Err(ViewStateError::InvalidState { zoom })
    }
}

fn validate_center(center: Complex) -> Result<Complex, ViewStateError> {
    if center.is_finite() {
        Ok(center)
    } else {
        Err(ViewStateError::InvalidCenter {
            real: center.real,
            imag: center.imag,
        })
    }
}

impl ViewState {
    pub fn new(zoom: f64, center: Complex, max_iterations: i32) -> Result<Self, ViewStateError> {
        Ok(Self {
            zoom: validate_zoom(zoom)?,
            center: validate_center(center)?,
            max_iterations: max_iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    #[must_use]
    pub fn adaptive_enabled(&self) -> bool {
        self.adaptive_enabled
    }

    #[must_use]
    pub fn foreground_index(&self) -> usize {
        self.foreground_index
    }

    #[must_use]
    pub fn background_index(&self) -> usize {
        self.background_index
    }

    /// Replaces zoom and center together, leaving `self` untouched on error.
    pub fn set_view(&mut self, zoom: f64, center: Complex) -> Result<(), ViewStateError> {
        let zoom = validate_zoom(zoom)?;
        let center = validate_center(center)?;

        self.zoom = zoom;
        self.center = center;
        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ViewStateError> {
        self.zoom = validate_zoom(zoom)?;
        Ok(())
    }

    pub fn set_center(&mut self, center: Complex) -> Result<(), ViewStateError> {
        self.center = validate_center(center)?;
        Ok(())
    }

    /// Saturates at `MIN_ITERATIONS` / `MAX_ITERATIONS`.
    pub fn set_max_iterations(&mut self, max_iterations: i32) {
        self.max_iterations = max_iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
    }

    pub fn adjust_max_iterations(&mut self, step: Step, amount: i32) {
        let delta = match step {
            Step::Forward => amount,
            Step::Backward => amount.saturating_neg(),
        };

        self.set_max_iterations(self.max_iterations.saturating_add(delta));
    }

    pub fn set_adaptive_enabled(&mut self, enabled: bool) {
        self.adaptive_enabled = enabled;
    }

    pub fn toggle_adaptive(&mut self) {
        self.adaptive_enabled = !self.adaptive_enabled;
    }

    /// Selects a palette pair, wrapping both indices into `[0, palette_len)`.
    pub fn select_colours(&mut self, foreground: usize, background: usize, palette_len: usize) {
        if palette_len == 0 {
            return;
        }

        self.foreground_index = foreground % palette_len;
        self.background_index = background % palette_len;
    }

    pub fn cycle_foreground(&mut self, step: Step, palette_len: usize) {
        self.foreground_index = cycle_index(self.foreground_index, palette_len, step);
    }

    pub fn cycle_background(&mut self, step: Step, palette_len: usize) {
        self.background_index = cycle_index(self.background_index, palette_len, step);
    }

    /// Restores the default view. The background selection is kept.
    pub fn reset(&mut self) {
        *self = Self {
            background_index: self.background_index,
            ..Self::default()
        };
    }
}
