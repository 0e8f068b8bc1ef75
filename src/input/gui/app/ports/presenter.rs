use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use egui::Context as EguiContext;
use std::sync::Arc;
use std::time::Duration;

/// The window surface the app draws frames and the overlay onto.
pub trait GuiPresenterPort {
    /// Draws the newest finished frame, if any, with the overlay on top.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// The sink the render worker delivers frames to.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    fn last_render_duration(&self) -> Option<Duration>;

    fn last_error_message(&self) -> Option<&str>;
}
