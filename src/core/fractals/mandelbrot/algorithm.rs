use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::{Point, ScreenPoint};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::adaptive_iterations::AdaptiveIterationPolicy;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_result::EscapeResult;
use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, ScreenTransform};

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z <- z^2 + c` from zero, testing the bailout after each update.
///
/// The escape index is divided by `reference_max_iterations` (the base
/// budget), not by `iteration_cap`. A non-positive reference is treated as 1
/// so the fraction stays finite.
#[must_use]
pub fn escape_time(c: Complex, iteration_cap: i32, reference_max_iterations: i32) -> EscapeResult {
    let reference = f64::from(reference_max_iterations.max(1));
    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;

    for iteration in 0..iteration_cap.max(0) {
        let next_zx = zx * zx - zy * zy + c.real;
        zy = 2.0 * zx * zy + c.imag;
        zx = next_zx;

        if zx * zx + zy * zy > ESCAPE_RADIUS_SQUARED {
            return EscapeResult::Escaped(f64::from(iteration) / reference);
        }
    }

    EscapeResult::Bounded
}

/// Per-frame escape-time evaluator over one immutable view snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    transform: ScreenTransform,
    iteration_cap: i32,
    reference_max_iterations: i32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let viewport = self.transform.viewport();
        let position = ScreenPoint::from(pixel);

        if !viewport.contains(position) {
            return Err(PixelToComplexCoordsError::PointOutsideViewport {
                point: position,
                viewport,
            });
        }

        let c = self.transform.to_complex(position);

        Ok(escape_time(
            c,
            self.iteration_cap,
            self.reference_max_iterations,
        ))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        viewport: Viewport,
        view: &ViewState,
        iteration_cap: i32,
    ) -> Result<Self, MandelbrotError> {
        if iteration_cap <= 0 {
            return Err(MandelbrotError::ZeroMaxIterations(iteration_cap));
        }

        Ok(Self {
            transform: ScreenTransform::for_view(viewport, view)?,
            iteration_cap,
            reference_max_iterations: view.max_iterations(),
        })
    }

    /// Builds the evaluator with the cap `policy` derives for `view`.
    pub fn for_view(
        viewport: Viewport,
        view: &ViewState,
        policy: &AdaptiveIterationPolicy,
    ) -> Result<Self, MandelbrotError> {
        Self::new(viewport, view, policy.for_view(view))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.transform.viewport()
    }

    #[must_use]
    pub fn iteration_cap(&self) -> i32 {
        self.iteration_cap
    }

    #[must_use]
    pub fn reference_max_iterations(&self) -> i32 {
        self.reference_max_iterations
    }
}
