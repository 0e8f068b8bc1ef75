use crate::core::actions::render_frame::FrameRequest;
use crate::core::data::frame_params::{FrameParams, FrameParamsError};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::explorer_config::ExplorerConfig;
use crate::core::interaction::limits::InteractionLimitsError;
use crate::core::interaction::{InputEvent, InteractionController, InteractionError, InteractionReport};
use std::sync::Arc;
use std::time::{Duration, Instant};

const FPS_SMOOTHING: f64 = 0.1;

/// Exponentially smoothed frames-per-second estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    fps: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            self.record(now.saturating_duration_since(last));
        }
        self.last_tick = Some(now);
    }

    fn record(&mut self, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        if seconds <= 0.0 {
            return;
        }

        let sample = 1.0 / seconds;
        self.fps = Some(match self.fps {
            Some(fps) => fps + FPS_SMOOTHING * (sample - fps),
            None => sample,
        });
    }

    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }
}

/// Everything the window owns about the exploration session.
pub struct GuiAppState {
    pub view: ViewState,
    pub config: ExplorerConfig,
    interaction: InteractionController,
    last_submitted_request: Option<Arc<FrameRequest>>,
    pub latest_submitted_generation: u64,
    pub clock: FrameClock,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self::with_checked_limits(ExplorerConfig::default(), ViewState::default())
    }
}

impl GuiAppState {
    /// Rejects zoom factors or iteration steps the interaction controller cannot apply.
    pub fn new(config: ExplorerConfig, view: ViewState) -> Result<Self, InteractionLimitsError> {
        config.limits.validate()?;
        Ok(Self::with_checked_limits(config, view))
    }

    fn with_checked_limits(config: ExplorerConfig, view: ViewState) -> Self {
        let interaction = InteractionController::new(config.limits, config.palettes.len());

        Self {
            view,
            config,
            interaction,
            last_submitted_request: None,
            latest_submitted_generation: 0,
            clock: FrameClock::default(),
        }
    }

    pub fn apply(
        &mut self,
        event: InputEvent,
        viewport: Viewport,
    ) -> Result<InteractionReport, InteractionError> {
        self.interaction.apply(&mut self.view, viewport, event)
    }

    pub fn build_render_request(&self, viewport: Viewport) -> Result<FrameRequest, MandelbrotError> {
        self.config.build_frame_request(&self.view, viewport)
    }

    pub fn frame_params(&self, viewport: Viewport) -> Result<FrameParams, FrameParamsError> {
        FrameParams::from_view(&self.view, viewport, &self.config.palettes, &self.config.adaptive)
    }

    #[must_use]
    pub fn should_submit(&self, request: &FrameRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<FrameRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }
}
