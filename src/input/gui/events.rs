/// User events posted to the winit loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter. The loop decides whether
    /// it warrants a redraw.
    Wake,
}
