use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::TwoToneColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use log::debug;
use thiserror::Error;

/// How the per-pixel work is scheduled. Both modes produce identical frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderMode {
    Serial,
    #[default]
    Parallel,
}

#[derive(Debug, Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("failed to evaluate pixel: {0}")]
    Algorithm(#[source] PixelToComplexCoordsError),
    #[error("failed to assemble frame: {0}")]
    PixelBuffer(#[source] PixelBufferError),
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GenerateFractalError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}

impl From<GeneratePixelBufferError<std::convert::Infallible>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<std::convert::Infallible>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GeneratePixelBufferError::ColourMap(never) => match never {},
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Everything needed to render one frame, detached from the live view.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRequest {
    algorithm: MandelbrotAlgorithm,
    colour_map: TwoToneColourMap,
    mode: RenderMode,
    anti_aliasing: AntiAliasing,
}

impl FrameRequest {
    #[must_use]
    pub fn new(algorithm: MandelbrotAlgorithm, colour_map: TwoToneColourMap, mode: RenderMode) -> Self {
        Self {
            algorithm,
            colour_map,
            mode,
            anti_aliasing: AntiAliasing::OFF,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> &MandelbrotAlgorithm {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &TwoToneColourMap {
        &self.colour_map
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    #[must_use]
    pub fn anti_aliasing(&self) -> AntiAliasing {
        self.anti_aliasing
    }

    /// Size of the delivered frame.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let samples = self.anti_aliasing.samples_per_axis();
        let grid = self.sample_viewport();

        Viewport::new(grid.width() / samples, grid.height() / samples)
    }

    /// Size of the grid the algorithm evaluates before downsampling.
    #[must_use]
    pub fn sample_viewport(&self) -> Viewport {
        self.algorithm.viewport()
    }

    #[must_use]
    pub fn with_mode(self, mode: RenderMode) -> Self {
        Self { mode, ..self }
    }

    /// The algorithm is expected to cover the frame scaled by the sample grid,
    /// as [`ExplorerConfig::build_frame_request`] builds it.
    ///
    /// [`ExplorerConfig::build_frame_request`]: crate::core::fractals::mandelbrot::explorer_config::ExplorerConfig::build_frame_request
    #[must_use]
    pub fn with_anti_aliasing(self, anti_aliasing: AntiAliasing) -> Self {
        Self {
            anti_aliasing,
            ..self
        }
    }
}

/// Runs mapper, evaluator and colour map over every pixel of the request.
pub fn render_frame<C: CancelToken>(
    request: &FrameRequest,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    let viewport = request.sample_viewport();
    let samples_per_axis = request.anti_aliasing.samples_per_axis();

    debug!(
        "rendering {}x{} samples ({:?}, cap {}, {}x{} per pixel, {})",
        viewport.width(),
        viewport.height(),
        request.mode,
        request.algorithm.iteration_cap(),
        samples_per_axis,
        samples_per_axis,
        request.colour_map.display_name()
    );

    let escapes = match request.mode {
        RenderMode::Serial => generate_fractal_serial_cancelable(viewport, &request.algorithm, cancel)?,
        RenderMode::Parallel => {
            generate_fractal_parallel_rayon_cancelable(viewport, &request.algorithm, cancel)?
        }
    };

    if cancel.is_cancelled() {
        return Err(RenderFrameError::Cancelled(Cancelled));
    }

    let pixel_buffer = generate_pixel_buffer_cancelable(escapes, &request.colour_map, viewport, cancel)?;

    Ok(pixel_buffer.downsample(samples_per_axis))
}
