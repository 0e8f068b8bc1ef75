use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;
use log::debug;
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Hands render events from the worker thread to the UI thread.
///
/// Only the newest event is kept; an unread older one is replaced.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            debug!("event loop closed, frame left undelivered");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
