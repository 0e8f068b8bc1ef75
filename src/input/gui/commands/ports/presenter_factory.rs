use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        vsync: bool,
    ) -> Result<T, pixels::Error>;
}
