use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

#[derive(Debug, Default, Clone, Copy)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        vsync: bool,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, event_loop_proxy, vsync)
    }
}
