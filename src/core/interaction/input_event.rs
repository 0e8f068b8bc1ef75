use crate::core::data::palette::Step;
use crate::core::data::point::ScreenPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One user input, already translated out of the windowing toolkit's terms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Press {
        button: PointerButton,
        position: ScreenPoint,
    },
    Move {
        position: ScreenPoint,
    },
    Release {
        button: PointerButton,
    },
    /// Positive `delta` scrolls forward (zoom in).
    Wheel {
        delta: f64,
        position: ScreenPoint,
    },
    Reset,
    AdjustIterations(Step),
    CycleForeground(Step),
    CycleBackground(Step),
    ToggleAdaptive,
}
