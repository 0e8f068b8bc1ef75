use crate::controllers::interactive::events::render::RenderEvent;

/// Receives render results on the worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
