use crate::core::actions::render_frame::{FrameRequest, RenderMode};
use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::palette::Palettes;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::adaptive_iterations::AdaptiveIterationPolicy;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::{OvershootPolicy, TwoToneColourMap};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::interaction::limits::InteractionLimits;

/// Settings fixed for a session, as opposed to the per-interaction [`ViewState`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerConfig {
    pub palettes: Palettes,
    pub limits: InteractionLimits,
    pub adaptive: AdaptiveIterationPolicy,
    pub overshoot: OvershootPolicy,
    pub render_mode: RenderMode,
    pub anti_aliasing: AntiAliasing,
}

impl ExplorerConfig {
    /// Snapshots `view` into a request the render worker can own.
    pub fn build_frame_request(
        &self,
        view: &ViewState,
        viewport: Viewport,
    ) -> Result<FrameRequest, MandelbrotError> {
        let samples_per_axis = self.anti_aliasing.samples_per_axis();
        let sample_viewport = viewport
            .scaled(samples_per_axis)
            .ok_or(MandelbrotError::SampleGridTooLarge {
                viewport,
                samples_per_axis,
            })?;

        let algorithm = MandelbrotAlgorithm::for_view(sample_viewport, view, &self.adaptive)?;
        let colour_map = TwoToneColourMap::for_view(view, &self.palettes, self.overshoot);

        Ok(FrameRequest::new(algorithm, colour_map, self.render_mode)
            .with_anti_aliasing(self.anti_aliasing))
    }
}
