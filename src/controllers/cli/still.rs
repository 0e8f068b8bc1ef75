use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::explorer_config::ExplorerConfig;
use log::info;
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StillRenderError {
    #[error("cannot build frame: {0}")]
    Request(#[from] MandelbrotError),
    #[error("render failed: {0}")]
    Render(#[from] RenderFrameError),
    #[error("nothing has been rendered yet")]
    NoFrame,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders a single frame and hands it to a file presenter.
pub struct StillRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> StillRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: &ExplorerConfig,
        view: &ViewState,
        viewport: Viewport,
    ) -> Result<Duration, StillRenderError> {
        let request = config.build_frame_request(view, viewport)?;

        info!(
            "rendering {}x{} at zoom {:e}, centre ({}, {}), {} iterations",
            viewport.width(),
            viewport.height(),
            view.zoom(),
            view.center().real,
            view.center().imag,
            request.algorithm().iteration_cap()
        );

        let start = Instant::now();
        let buffer = render_frame(&request, &NeverCancel)?;
        let duration = start.elapsed();

        info!("rendered in {duration:?} ({:?})", request.mode());

        self.buffer = Some(buffer);
        Ok(duration)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> Result<(), StillRenderError> {
        let buffer = self.buffer.as_ref().ok_or(StillRenderError::NoFrame)?;
        self.presenter.present(buffer, filepath)?;

        Ok(())
    }
}
