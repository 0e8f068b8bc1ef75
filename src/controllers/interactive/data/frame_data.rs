use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::time::Duration;

/// A finished frame, tagged with the submission it answers.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl FrameData {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.pixel_buffer.viewport()
    }
}
